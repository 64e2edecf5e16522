//! Configuration loading and typed config structures for the policy lab.
//!
//! The canonical configuration lives in `policylab-config.yaml`. Every
//! section is optional: a missing key falls back to the documented default,
//! so an empty file yields the reference calibration.

use std::path::Path;

use serde::Deserialize;

use crate::constants::EngineConstants;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but cannot be used by the engine.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending key.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `policylab-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LabConfig {
    /// Structural constants of the equilibrium model.
    #[serde(default)]
    pub constants: EngineConstants,

    /// Snapshot history settings.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LabConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `POLICYLAB_LOG_LEVEL` overrides `logging.level`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value would break the engine.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value would break the engine.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.logging.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Default configuration with environment overrides applied.
    ///
    /// Used when no configuration file is present.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.logging.apply_env_overrides();
        config
    }

    /// Check every section for values the rest of the system cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constants.validate()?;
        if self.history.capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "history.capacity",
                reason: String::from("history must hold at least one snapshot"),
            });
        }
        if self.history.trend_window == 0 {
            return Err(ConfigError::Invalid {
                field: "history.trend_window",
                reason: String::from("trend window must cover at least one point"),
            });
        }
        Ok(())
    }
}

/// Snapshot history configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryConfig {
    /// Maximum retained snapshots; the oldest is evicted first.
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,

    /// Points per window when computing trend ratios.
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
            trend_window: default_trend_window(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit newline-delimited JSON instead of human-readable lines.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("POLICYLAB_LOG_LEVEL") {
            if !level.is_empty() {
                self.level = level;
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_history_capacity() -> usize {
    30
}

const fn default_trend_window() -> usize {
    5
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LabConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.history.capacity, 30);
        assert_eq!(config.history.trend_window, 5);
        assert_eq!(config.constants.riders.count, 100);
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = LabConfig::parse("").unwrap_or_else(|_| LabConfig {
            history: HistoryConfig {
                capacity: 0,
                trend_window: 0,
            },
            ..LabConfig::default()
        });
        assert_eq!(config.history, HistoryConfig::default());
        assert_eq!(config.constants, EngineConstants::default());
    }

    #[test]
    fn parse_partial_yaml() {
        let yaml = r"
constants:
  demand:
    market_size: 20000
  riders:
    count: 250
history:
  capacity: 10
logging:
  json: true
";
        let config = LabConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert!((config.constants.demand.market_size - 20_000.0).abs() < f64::EPSILON);
        assert!((config.constants.demand.alpha - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.constants.riders.count, 250);
        assert!((config.constants.riders.income_factor - 0.035).abs() < f64::EPSILON);
        assert_eq!(config.history.capacity, 10);
        assert_eq!(config.history.trend_window, 5);
        assert!(config.logging.json);
    }

    #[test]
    fn zero_capacity_rejected() {
        let result = LabConfig::parse("history:\n  capacity: 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "history.capacity",
                ..
            })
        ));
    }

    #[test]
    fn zero_riders_rejected_at_load() {
        let result = LabConfig::parse("constants:\n  riders:\n    count: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let result = LabConfig::parse("history: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = LabConfig::from_file(Path::new("/nonexistent/policylab-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
