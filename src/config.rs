//! Session configuration
//!
//! Built-in defaults, overlaid by an optional YAML file, overlaid by CLI
//! flags (the binary applies the last layer).

use crate::dataset::{DEFAULT_DATASET_PATH, DEFAULT_TEXT_COLUMN};
use crate::export::DEFAULT_EXPORT_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MIN_SAMPLE_SIZE: usize = 1;
pub const MAX_SAMPLE_SIZE: usize = 200;
pub const MAX_SEED: u64 = 9999;

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

/// Everything needed to draw a sample and run a review session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// CSV dataset; falls back to demo tweets when missing
    pub dataset_path: PathBuf,
    pub text_column: String,
    pub sample_size: usize,
    pub seed: u64,
    /// Print the sampled records before reviewing
    pub show_sample: bool,
    pub output_path: PathBuf,
    /// YAML gazetteer for the lexicon tagger; built-in when unset
    pub lexicon_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            sample_size: 25,
            seed: 42,
            show_sample: false,
            output_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            lexicon_path: None,
        }
    }
}

/// Default config location (~/.config/ner-review/config.yaml on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ner-review").join("config.yaml"))
}

impl SessionConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load from `explicit` if given, else from the default location if a
    /// file exists there, else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_path(path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.sample_size as u64;
        if !(MIN_SAMPLE_SIZE as u64..=MAX_SAMPLE_SIZE as u64).contains(&size) {
            return Err(ConfigError::OutOfRange {
                field: "sample_size",
                value: size,
                min: MIN_SAMPLE_SIZE as u64,
                max: MAX_SAMPLE_SIZE as u64,
            });
        }
        if self.seed > MAX_SEED {
            return Err(ConfigError::OutOfRange {
                field: "seed",
                value: self.seed,
                min: 0,
                max: MAX_SEED,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.sample_size, 25);
        assert_eq!(config.seed, 42);
        assert_eq!(config.text_column, "tweet_text");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = SessionConfig::from_yaml_str("sample_size: 10\nseed: 7\n").unwrap();
        assert_eq!(config.sample_size, 10);
        assert_eq!(config.seed, 7);
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET_PATH));
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(SessionConfig::from_yaml_str("").unwrap(), SessionConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            SessionConfig::from_yaml_str("sample_sise: 10"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn sample_size_bounds() {
        let mut config = SessionConfig::default();
        config.sample_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "sample_size", .. })
        ));
        config.sample_size = 201;
        assert!(config.validate().is_err());
        config.sample_size = 200;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn seed_bounds() {
        let config = SessionConfig {
            seed: 10_000,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "seed", value: 10_000, .. })
        ));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dataset_path: tweets.csv").unwrap();
        writeln!(file, "lexicon_path: lexicon.yaml").unwrap();
        file.flush().unwrap();

        let config = SessionConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("tweets.csv"));
        assert_eq!(config.lexicon_path, Some(PathBuf::from("lexicon.yaml")));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SessionConfig::load(Some(dir.path().join("absent.yaml").as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
