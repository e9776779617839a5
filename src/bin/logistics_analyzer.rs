use logistics_tracking::analysis::{AnalysisError, AnalyzerConfig, LogisticsDataset};
use logistics_tracking::logging::init_tracing;

fn run() -> anyhow::Result<()> {
    let config = AnalyzerConfig::default();

    let dataset = match LogisticsDataset::load(&config) {
        Ok(dataset) => dataset,
        Err(e @ AnalysisError::MissingInput { .. }) => {
            tracing::error!("Please run logistics_tracking first to create the dataset.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!("\nSample Data:");
    for row in dataset.sample(config.sample_size, config.sample_seed) {
        println!(
            "{}  {:<20} {:<17} {:<19} {:>6.2} kg",
            row.tracking_number, row.package_type, row.carrier, row.current_status, row.weight_kg
        );
    }

    println!("\n{}", dataset.report());
    tracing::info!("Analysis complete");

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        tracing::error!("An error occurred: {e:#}");
    }
}
