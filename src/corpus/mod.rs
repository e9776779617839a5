// ============================================================================
// Corpus - Assembling and persisting a generated dataset
// ============================================================================
//
// The whole corpus is generated in memory first; files are only written
// once every record exists. The same record set is emitted twice:
// - nested JSON (full entity graph, enums as display strings)
// - flattened CSV (one row per package, no tracking history)
//
// ============================================================================

pub mod errors;
pub mod flat;
pub mod writer;

pub use errors::CorpusError;
pub use flat::{FlatPackageRecord, FLAT_COLUMNS};

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::domain::tracking::Package;
use crate::generator::{generate_package, GeneratorConfig, TimeWindow};
use crate::metrics::Metrics;

const PROGRESS_INTERVAL: usize = 500;

/// A generated dataset together with the seed that reproduces it
#[derive(Debug, Clone)]
pub struct Corpus {
    pub seed: u64,
    pub window: TimeWindow,
    pub packages: Vec<Package>,
}

impl Corpus {
    /// Generate `config.num_packages` records from a seeded StdRng.
    pub fn generate(config: &GeneratorConfig, metrics: &Metrics) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        let window = match config.reference_time {
            Some(reference) => TimeWindow::this_month(reference),
            None => TimeWindow::this_month_now(),
        };
        let mut rng = StdRng::seed_from_u64(seed);

        tracing::info!(
            packages = config.num_packages,
            seed,
            window_start = %window.start,
            window_end = %window.end,
            "Generating package records"
        );

        let start = Instant::now();
        let packages = assemble(&mut rng, &window, config.num_packages, metrics);
        metrics.observe_generation(start.elapsed().as_secs_f64());

        Self { seed, window, packages }
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn flattened(&self) -> Vec<FlatPackageRecord> {
        self.packages.iter().map(FlatPackageRecord::from).collect()
    }

    /// Write both representations to the locations named in `config`.
    ///
    /// Both files are staged before either is renamed into place, so a
    /// failure leaves the previous JSON/CSV pair as it was.
    pub fn save(&self, config: &GeneratorConfig, metrics: &Metrics) -> Result<(), CorpusError> {
        let json_path = config.json_path();
        let csv_path = config.csv_path();

        tracing::info!(path = %json_path.display(), "Saving JSON data");
        let json = writer::stage_json(&json_path, &self.packages)?;

        tracing::info!(path = %csv_path.display(), "Saving CSV data");
        let csv = match writer::stage_csv(&csv_path, &self.flattened()) {
            Ok(csv) => csv,
            Err(e) => {
                json.discard();
                return Err(e);
            }
        };

        if let Err(e) = json.commit() {
            csv.discard();
            return Err(e);
        }
        metrics.record_file_written("json");
        csv.commit()?;
        metrics.record_file_written("csv");
        Ok(())
    }
}

/// Build `count` packages in order from a single random source.
pub fn assemble<R: Rng + ?Sized>(
    rng: &mut R,
    window: &TimeWindow,
    count: usize,
    metrics: &Metrics,
) -> Vec<Package> {
    let mut packages = Vec::with_capacity(count);
    for i in 0..count {
        let package = generate_package(rng, window);
        metrics.record_package(&package);
        packages.push(package);

        if (i + 1) % PROGRESS_INTERVAL == 0 {
            tracing::debug!(generated = i + 1, total = count, "Generation progress");
        }
    }
    packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tracking::{PackageStatus, PackageType};
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;

    fn config(dir: &Path, num_packages: usize, seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            num_packages,
            seed: Some(seed),
            reference_time: Some(
                NaiveDate::from_ymd_opt(2024, 7, 19).unwrap().and_hms_opt(10, 20, 30).unwrap(),
            ),
            output_dir: dir.to_path_buf(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_generate_requested_count() {
        let dir = tempfile::tempdir().unwrap();
        let metrics = Metrics::new().unwrap();
        let corpus = Corpus::generate(&config(dir.path(), 25, 1), &metrics);

        assert_eq!(corpus.len(), 25);
        assert_eq!(corpus.seed, 1);
        assert_eq!(corpus.flattened().len(), 25);
    }

    #[test]
    fn test_same_seed_produces_identical_json() {
        let dir = tempfile::tempdir().unwrap();
        let metrics = Metrics::new().unwrap();
        let a = Corpus::generate(&config(dir.path(), 50, 42), &metrics);
        let b = Corpus::generate(&config(dir.path(), 50, 42), &metrics);

        let json_a = serde_json::to_vec_pretty(&a.packages).unwrap();
        let json_b = serde_json::to_vec_pretty(&b.packages).unwrap();
        assert_eq!(json_a, json_b);

        let c = Corpus::generate(&config(dir.path(), 50, 43), &metrics);
        assert_ne!(json_a, serde_json::to_vec_pretty(&c.packages).unwrap());
    }

    #[test]
    fn test_saved_files_are_byte_identical_across_runs() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let metrics = Metrics::new().unwrap();

        for dir in [first.path(), second.path()] {
            let config = config(dir, 30, 9);
            Corpus::generate(&config, &metrics).save(&config, &metrics).unwrap();
        }

        let a = config(first.path(), 30, 9);
        let b = config(second.path(), 30, 9);
        assert_eq!(fs::read(a.json_path()).unwrap(), fs::read(b.json_path()).unwrap());
        assert_eq!(fs::read(a.csv_path()).unwrap(), fs::read(b.csv_path()).unwrap());
    }

    #[test]
    fn test_hundred_packages_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), 100, 2024);
        let metrics = Metrics::new().unwrap();
        let corpus = Corpus::generate(&config, &metrics);
        corpus.save(&config, &metrics).unwrap();

        let mut reader = csv::Reader::from_path(config.csv_path()).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, FLAT_COLUMNS);

        let rows: Vec<FlatPackageRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 100);

        let json = fs::read_to_string(config.json_path()).unwrap();
        let packages: Vec<Package> = serde_json::from_str(&json).unwrap();
        assert_eq!(packages.len(), 100);

        // cross-format consistency: same package, same scalar values
        for (package, row) in packages.iter().zip(&rows) {
            assert_eq!(&FlatPackageRecord::from(package), row);
        }
    }

    #[test]
    fn test_json_uses_display_strings_and_nested_objects() {
        let dir = tempfile::tempdir().unwrap();
        let metrics = Metrics::new().unwrap();
        let corpus = Corpus::generate(&config(dir.path(), 5, 77), &metrics);
        let value = serde_json::to_value(&corpus.packages).unwrap();

        let first = &value[0];
        assert!(first["dimensions"]["volume"].is_f64());
        assert!(first["origin"]["latitude"].is_f64());
        assert_eq!(first["tracking_history"][0]["status"], "Pending");
        assert!(PackageType::ALL
            .iter()
            .any(|t| first["package_type"] == t.as_str()));
    }

    #[test]
    fn test_failed_csv_write_keeps_previous_pair() {
        let dir = tempfile::tempdir().unwrap();
        let metrics = Metrics::new().unwrap();

        let first = config(dir.path(), 10, 1);
        Corpus::generate(&first, &metrics).save(&first, &metrics).unwrap();
        let json_before = fs::read(first.json_path()).unwrap();
        let csv_before = fs::read(first.csv_path()).unwrap();

        // a directory squatting on the staging path makes the CSV write fail
        let mut blocked = first.csv_path().into_os_string();
        blocked.push(".tmp");
        fs::create_dir(&blocked).unwrap();

        let second = config(dir.path(), 10, 2);
        let err = Corpus::generate(&second, &metrics)
            .save(&second, &metrics)
            .unwrap_err();
        assert!(matches!(err, CorpusError::Csv { .. }));

        assert_eq!(fs::read(second.json_path()).unwrap(), json_before);
        assert_eq!(fs::read(second.csv_path()).unwrap(), csv_before);

        let mut staged_json = second.json_path().into_os_string();
        staged_json.push(".tmp");
        assert!(!Path::new(&staged_json).exists());
    }

    #[test]
    fn test_overnight_packages_in_corpus_have_short_histories() {
        let dir = tempfile::tempdir().unwrap();
        let metrics = Metrics::new().unwrap();
        let corpus = Corpus::generate(&config(dir.path(), 400, 5), &metrics);

        let overnight: Vec<_> = corpus
            .packages
            .iter()
            .filter(|p| p.package_type == PackageType::Overnight)
            .collect();
        assert!(!overnight.is_empty());
        for package in overnight {
            assert!((2..=3).contains(&package.tracking_history.len()));
            assert!(!matches!(package.current_status, PackageStatus::Returned));
        }
    }
}
