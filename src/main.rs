use logistics_tracking::corpus::Corpus;
use logistics_tracking::generator::GeneratorConfig;
use logistics_tracking::logging::init_tracing;
use logistics_tracking::metrics::Metrics;

fn run() -> anyhow::Result<()> {
    let config = GeneratorConfig::default();
    let metrics = Metrics::new()?;

    tracing::info!("Generating {} package records...", config.num_packages);
    let corpus = Corpus::generate(&config, &metrics);

    // Nothing is written until every record exists
    corpus.save(&config, &metrics)?;

    tracing::info!(
        packages = corpus.len(),
        seed = corpus.seed,
        json = %config.json_path().display(),
        csv = %config.csv_path().display(),
        "Data generation completed successfully"
    );
    tracing::debug!("Generation metrics:\n{}", metrics.render()?);

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        tracing::error!("An error occurred: {e:#}");
    }
}
