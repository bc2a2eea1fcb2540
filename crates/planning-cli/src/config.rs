//! Command line configuration

use planning_sdk::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file, extension resolved by the `config` crate
const DEFAULT_CONFIG_FILE: &str = "config/planning";

/// Environment variable prefix (e.g. `PLANNING_LOG_LEVEL`)
const ENV_PREFIX: &str = "PLANNING";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

/// Command line configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Attach the evaluation trace to JSON output
    pub enable_trace: bool,

    /// Enable metrics
    pub enable_metrics: bool,

    /// Reject structure types outside the matrix
    pub strict_structure_types: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            enable_trace: false,
            enable_metrics: true,
            strict_structure_types: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from `.env`, a config file and environment variables
    ///
    /// An explicit path must exist; the default `config/planning` file is optional.
    /// Environment variables override the file.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let file_source = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .add_source(file_source)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Engine settings derived from this configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .enable_metrics(self.enable_metrics)
            .enable_tracing(self.enable_trace)
            .strict_structure_types(self.strict_structure_types)
    }
}
