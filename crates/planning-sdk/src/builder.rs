//! Builder pattern for DecisionEngine

use crate::config::EngineConfig;
use crate::decision_engine::DecisionEngine;
use crate::error::Result;
use std::path::PathBuf;

/// Builder for DecisionEngine
///
/// # Example
///
/// ```rust,ignore
/// use planning_sdk::DecisionEngineBuilder;
///
/// let engine = DecisionEngineBuilder::new()
///     .enable_metrics(true)
///     .enable_tracing(true)
///     .build()?;
///
/// // Settings from a YAML file, with explicit overrides applied on top
/// let engine = DecisionEngineBuilder::new()
///     .with_config_file("config/engine.yaml")
///     .strict_structure_types(true)
///     .build()?;
/// ```
pub struct DecisionEngineBuilder {
    config: EngineConfig,
    config_file: Option<PathBuf>,
    enable_metrics: Option<bool>,
    enable_tracing: Option<bool>,
    strict_structure_types: Option<bool>,
}

impl DecisionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            config_file: None,
            enable_metrics: None,
            enable_tracing: None,
            strict_structure_types: None,
        }
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Read the base configuration from a YAML file at build time
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = Some(enable);
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = Some(enable);
        self
    }

    /// Reject structures outside the matrix
    pub fn strict_structure_types(mut self, enable: bool) -> Self {
        self.strict_structure_types = Some(enable);
        self
    }

    /// Build the decision engine
    ///
    /// A configured file replaces the base configuration; explicit setter
    /// calls win over both.
    pub fn build(self) -> Result<DecisionEngine> {
        let mut config = match &self.config_file {
            Some(path) => EngineConfig::from_yaml_file(path)?,
            None => self.config,
        };

        if let Some(enable) = self.enable_metrics {
            config.enable_metrics = enable;
        }
        if let Some(enable) = self.enable_tracing {
            config.enable_tracing = enable;
        }
        if let Some(enable) = self.strict_structure_types {
            config.strict_structure_types = enable;
        }

        Ok(DecisionEngine::new(config))
    }
}

impl Default for DecisionEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder() {
        let engine = DecisionEngineBuilder::new()
            .enable_metrics(true)
            .enable_tracing(false)
            .build();

        assert!(engine.is_ok());
    }

    #[test]
    fn test_builder_with_multiple_options() {
        let engine = DecisionEngineBuilder::new()
            .enable_metrics(false)
            .enable_tracing(true)
            .strict_structure_types(true)
            .build()
            .unwrap();

        assert!(!engine.config().enable_metrics);
        assert!(engine.config().enable_tracing);
        assert!(engine.config().strict_structure_types);
    }

    #[test]
    fn test_builder_setters_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enable_tracing: true").unwrap();
        writeln!(file, "strict_structure_types: true").unwrap();

        let engine = DecisionEngineBuilder::new()
            .with_config_file(file.path())
            .strict_structure_types(false)
            .build()
            .unwrap();

        assert!(engine.config().enable_tracing);
        assert!(!engine.config().strict_structure_types);
    }

    #[test]
    fn test_builder_missing_file_fails() {
        let result = DecisionEngineBuilder::new()
            .with_config_file("/nonexistent/engine.yaml")
            .build();

        assert!(result.is_err());
    }
}
