//! Decision request loading from JSON or YAML documents

use crate::error::{Result, SdkError};
use planning_core::DecisionRequest;
use std::path::Path;

/// Document format of a serialized request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Json,
    Yaml,
}

impl RequestFormat {
    /// Pick a format from a file extension; anything unknown is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => RequestFormat::Yaml,
            _ => RequestFormat::Json,
        }
    }
}

/// Parse a request from text
pub fn parse_request(content: &str, format: RequestFormat) -> Result<DecisionRequest> {
    if content.trim().is_empty() {
        return Err(SdkError::InvalidRequest(
            "empty request document".to_string(),
        ));
    }

    let request = match format {
        RequestFormat::Json => serde_json::from_str(content)?,
        RequestFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(request)
}

/// Load a request from a file, choosing the format by extension
pub fn load_request(path: impl AsRef<Path>) -> Result<DecisionRequest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let format = RequestFormat::from_path(path);
    tracing::debug!("Loading {:?} request from {}", format, path.display());
    parse_request(&content, format)
}
