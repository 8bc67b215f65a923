use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid planner config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid planner config: {0}")]
    Invalid(String),
}

/// Tunables for the parser. The defaults are the reference behavior; a
/// config file only needs to name the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Fragments shorter than this (after trimming) are dropped as noise.
    pub min_phrase_chars: usize,
    /// Duration for phrases with no stated or implied length, and for the
    /// fallback record.
    pub default_minutes: u32,
    /// Minutes credited per episode / show / movie mentioned.
    pub minutes_per_episode: u32,
    /// Adjacent similar activities merge when their durations differ by less
    /// than this many minutes.
    pub merge_window_minutes: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_phrase_chars: 3,
            default_minutes: motiv_core::DEFAULT_DURATION_MINUTES,
            minutes_per_episode: 25,
            merge_window_minutes: 10,
        }
    }
}

impl PlannerConfig {
    /// Load and validate a config from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a config from a YAML string. An empty document
    /// yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PlannerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_phrase_chars == 0 {
            return Err(ConfigError::Invalid(
                "min_phrase_chars must be at least 1".to_string(),
            ));
        }
        if self.default_minutes == 0 {
            return Err(ConfigError::Invalid(
                "default_minutes must be at least 1".to_string(),
            ));
        }
        if self.minutes_per_episode == 0 {
            return Err(ConfigError::Invalid(
                "minutes_per_episode must be at least 1".to_string(),
            ));
        }
        if self.merge_window_minutes == 0 {
            return Err(ConfigError::Invalid(
                "merge_window_minutes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
