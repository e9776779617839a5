// ============================================================================
// Analysis - Descriptive statistics over a generated dataset
// ============================================================================
//
// Reads both output files back: the CSV drives the per-package statistics,
// the JSON supplies the tracking histories.
//
// ============================================================================

pub mod errors;
pub mod stats;
pub mod report;

pub use errors::AnalysisError;
pub use report::AnalysisReport;
pub use stats::{AverageDimensions, BasicStats, DeliveryTimeStats, TransitionCounts};

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::corpus::{CorpusError, FlatPackageRecord};
use crate::domain::tracking::Package;

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub data_dir: PathBuf,
    pub json_file: String,
    pub csv_file: String,
    pub sample_size: usize,
    pub sample_seed: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            json_file: "logistics_data.json".to_string(),
            csv_file: "logistics_data.csv".to_string(),
            sample_size: 3,
            sample_seed: 42,
        }
    }
}

impl AnalyzerConfig {
    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(&self.json_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_file)
    }
}

fn open_input(path: &Path) -> Result<File, AnalysisError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalysisError::MissingInput { path: path.to_path_buf() },
        _ => CorpusError::io(path, e).into(),
    })
}

/// Both representations of one generated dataset
#[derive(Debug, Clone)]
pub struct LogisticsDataset {
    pub packages: Vec<Package>,
    pub rows: Vec<FlatPackageRecord>,
}

impl LogisticsDataset {
    pub fn load(config: &AnalyzerConfig) -> Result<Self, AnalysisError> {
        let json_path = config.json_path();
        let csv_path = config.csv_path();

        let packages: Vec<Package> = serde_json::from_reader(BufReader::new(open_input(&json_path)?))
            .map_err(|e| CorpusError::json(&json_path, e))?;

        let mut reader = csv::Reader::from_reader(open_input(&csv_path)?);
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<FlatPackageRecord>, _>>()
            .map_err(|e| CorpusError::csv(&csv_path, e))?;

        tracing::info!(packages = packages.len(), rows = rows.len(), "Data loaded");

        if packages.len() != rows.len() {
            tracing::warn!(
                packages = packages.len(),
                rows = rows.len(),
                "JSON and CSV record counts differ"
            );
        }

        Ok(Self { packages, rows })
    }

    pub fn from_packages(packages: Vec<Package>) -> Self {
        let rows = packages.iter().map(FlatPackageRecord::from).collect();
        Self { packages, rows }
    }

    /// Up to `n` distinct rows, reproducible for a given seed.
    pub fn sample(&self, n: usize, seed: u64) -> Vec<&FlatPackageRecord> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.rows.choose_multiple(&mut rng, n).collect()
    }

    pub fn basic_stats(&self) -> BasicStats {
        stats::basic_stats(&self.rows)
    }

    pub fn delivery_times(&self) -> Option<DeliveryTimeStats> {
        stats::delivery_times(&self.rows)
    }

    pub fn status_transitions(&self) -> TransitionCounts {
        stats::status_transitions(&self.packages)
    }

    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            basic: self.basic_stats(),
            delivery: self.delivery_times(),
            transitions: self.status_transitions(),
        }
    }
}
