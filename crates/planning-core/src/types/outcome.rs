//! Decision result

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether planning permission is required
///
/// Rendered externally as `"Y"` or `"N"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionResult {
    #[serde(rename = "Y")]
    PermissionRequired,
    #[serde(rename = "N")]
    PermissionNotRequired,
}

impl DecisionResult {
    /// External code: `"Y"` or `"N"`
    pub fn as_code(&self) -> &'static str {
        match self {
            DecisionResult::PermissionRequired => "Y",
            DecisionResult::PermissionNotRequired => "N",
        }
    }

    /// Parse an external code (case-insensitive)
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim() {
            "Y" | "y" => Ok(DecisionResult::PermissionRequired),
            "N" | "n" => Ok(DecisionResult::PermissionNotRequired),
            other => Err(CoreError::InvalidDecisionCode(other.to_string())),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, DecisionResult::PermissionRequired)
    }
}

impl From<bool> for DecisionResult {
    /// `true` means permission is required
    fn from(required: bool) -> Self {
        if required {
            DecisionResult::PermissionRequired
        } else {
            DecisionResult::PermissionNotRequired
        }
    }
}

impl fmt::Display for DecisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for DecisionResult {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        DecisionResult::from_code(s)
    }
}
