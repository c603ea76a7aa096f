use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    composition::Direction,
    error::{ConfigError, Result},
};

/// Main configuration for the image-stitcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Composition settings
    pub composition: CompositionConfig,

    /// Output settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            composition: CompositionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string(),
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.composition.validate()?;
        Ok(())
    }
}

/// Composition pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionConfig {
    /// Resize inputs in parallel during normalization
    pub parallel_normalization: bool,

    /// Number of worker threads for parallel normalization
    pub worker_threads: usize,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            parallel_normalization: true,
            worker_threads: num_cpus::get(),
        }
    }
}

impl CompositionConfig {
    fn validate(&self) -> Result<()> {
        if self.worker_threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: "composition.worker_threads".to_string(),
                value: self.worker_threads.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default concatenation axis when none is given on the command line
    pub default_direction: Direction,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_direction: Direction::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let original_config = Config::default();

        // Save and load
        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(
            original_config.composition.parallel_normalization,
            loaded_config.composition.parallel_normalization
        );
        assert_eq!(
            original_config.output.default_direction,
            loaded_config.output.default_direction
        );
    }

    #[test]
    fn test_invalid_worker_threads() {
        let mut config = Config::default();
        config.composition.worker_threads = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_direction_serialized_lowercase() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("default_direction = \"horizontal\""));
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::from_file("no_such_config.toml");
        assert!(result.is_err());
    }
}
