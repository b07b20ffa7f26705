//! Benchmark configuration for graphbench
//!
//! Configuration is an optional TOML file; every key falls back to the
//! built-in sweep (sizes 10..500, densities 0.25..1.0, 100 runs).

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{
    BenchConfig, DEFAULT_DENSITIES, DEFAULT_OUTPUT, DEFAULT_RUNS, DEFAULT_SIZES,
};

impl BenchConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: BenchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject configurations the sweep cannot run
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            bail_invalid!("runs (expected at least 1)", self.runs);
        }
        if self.sizes.is_empty() {
            bail_invalid!("sizes", "empty list");
        }
        if let Some(size) = self.sizes.iter().find(|&&s| s == 0) {
            bail_invalid!("size (expected at least 1 vertex)", size);
        }
        if self.densities.is_empty() {
            bail_invalid!("densities", "empty list");
        }
        if let Some(density) = self
            .densities
            .iter()
            .find(|d| !d.is_finite() || !(0.0..=1.0).contains(*d))
        {
            bail_invalid!("density (expected 0.0..=1.0)", density);
        }
        if self.representations.is_empty() {
            bail_invalid!("representations", "empty list");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Representation;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes, vec![10, 50, 100, 200, 500]);
        assert_eq!(config.densities, vec![0.25, 0.5, 0.75, 1.0]);
        assert_eq!(config.runs, 100);
        assert_eq!(
            config.representations,
            vec![Representation::Dense, Representation::Sparse]
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: BenchConfig = toml::from_str("runs = 5\nseed = 11\n").unwrap();
        assert_eq!(config.runs, 5);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(config.output, std::path::PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_representations_parse_lowercase() {
        let config: BenchConfig = toml::from_str("representations = [\"sparse\"]\n").unwrap();
        assert_eq!(config.representations, vec![Representation::Sparse]);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = BenchConfig {
            runs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BenchConfig {
            densities: vec![0.5, 1.2],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BenchConfig {
            sizes: vec![10, 0],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BenchConfig {
            representations: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        let config = BenchConfig {
            sizes: vec![5, 8],
            densities: vec![0.5],
            runs: 3,
            seed: Some(9),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = BenchConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench.toml");
        fs::write(&path, "runs = 0\n").unwrap();
        assert!(BenchConfig::load(&path).is_err());
    }
}
