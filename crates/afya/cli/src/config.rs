//! Configuration for the afya CLI
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `AFYA_*` environment variables (nested keys joined with `__`,
//! e.g. `AFYA_STORAGE__DATA_PATH`). Command-line flags override all three.

use afya_engine::ScoringPolicy;
use afya_types::Standard;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfyaConfig {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Standard used when a command does not name one
    #[serde(default = "default_standard")]
    pub default_standard: Standard,

    /// Scoring configuration
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AfyaConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            default_standard: default_standard(),
            scoring: ScoringConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the clause register
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Pretty-print the register on save
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            pretty: true,
        }
    }
}

/// Scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Policies reported by `afya score` when `--policy` is not given
    #[serde(default = "default_policies")]
    pub policies: Vec<ScoringPolicy>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            policies: default_policies(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_standard() -> Standard {
    Standard::iso_7101()
}

fn default_data_path() -> PathBuf {
    PathBuf::from("afya-clauses.json")
}

fn default_policies() -> Vec<ScoringPolicy> {
    ScoringPolicy::ALL.to_vec()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl AfyaConfig {
    /// Load configuration from an optional file plus the environment.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("AFYA")
                .prefix_separator("_")
                .separator("__"),
        );

        builder.build()?.try_deserialize()
    }
}
