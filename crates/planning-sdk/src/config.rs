//! Configuration types for DecisionEngine

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Enable metrics collection
    pub enable_metrics: bool,

    /// Attach an evaluation trace to every response
    pub enable_tracing: bool,

    /// Reject structures outside the matrix instead of answering "N"
    pub strict_structure_types: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            enable_metrics: true,
            enable_tracing: false,
            strict_structure_types: false,
        }
    }

    /// Parse configuration from YAML text
    ///
    /// Missing keys take their default values.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SdkError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        tracing::debug!("Loaded engine configuration from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = enable;
        self
    }

    /// Enable strict structure types
    pub fn strict_structure_types(mut self, enable: bool) -> Self {
        self.strict_structure_types = enable;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
