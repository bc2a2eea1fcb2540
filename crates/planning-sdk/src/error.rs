//! SDK error types

use planning_core::StructureType;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid enumerated input
    #[error("Core error: {0}")]
    Core(#[from] planning_core::CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Malformed request document
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Structure outside the matrix, rejected in strict mode
    #[error("Unrecognized structure type '{0}' (strict structure types enabled)")]
    UnrecognizedStructure(StructureType),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
