use std::path::PathBuf;

use chrono::NaiveDateTime;

/// Knobs for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of package records to generate
    pub num_packages: usize,
    /// Random seed (None = random, logged so the run can be replayed)
    pub seed: Option<u64>,
    /// Upper bound of the "this month" timestamp window (None = now)
    pub reference_time: Option<NaiveDateTime>,
    pub output_dir: PathBuf,
    pub json_file: String,
    pub csv_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_packages: 2000,
            seed: None,
            reference_time: None,
            output_dir: PathBuf::from("data"),
            json_file: "logistics_data.json".to_string(),
            csv_file: "logistics_data.csv".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = GeneratorConfig::default();
        assert_eq!(config.num_packages, 2000);
        assert_eq!(config.json_path(), PathBuf::from("data/logistics_data.json"));
        assert_eq!(config.csv_path(), PathBuf::from("data/logistics_data.csv"));
    }
}
