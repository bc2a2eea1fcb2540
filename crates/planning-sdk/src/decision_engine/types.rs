//! Request options and response types for DecisionEngine

use super::trace::EvaluationTrace;
use planning_core::DecisionResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decision request options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOptions {
    /// Attach the evaluation trace to the response
    #[serde(default)]
    pub enable_trace: bool,
}

impl DecisionOptions {
    /// Options with tracing enabled
    pub fn with_trace() -> Self {
        Self { enable_trace: true }
    }
}

/// Stage of the evaluation that fixed the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStage {
    /// A universal condition applied
    Universal,
    /// The structure baseline stood
    Baseline,
    /// Removed PD rights forced the outcome
    Modifier,
}

impl fmt::Display for DecisionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecisionStage::Universal => "universal",
            DecisionStage::Baseline => "baseline",
            DecisionStage::Modifier => "modifier",
        };
        f.write_str(name)
    }
}

/// Decision response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionResponse {
    /// Request ID (for tracking and correlation)
    pub request_id: String,

    /// Decision result, serialized as "Y" or "N"
    pub result: DecisionResult,

    /// Stage that fixed the outcome
    pub decided_by: DecisionStage,

    /// Processing time in microseconds
    pub processing_time_us: u64,

    /// Evaluation trace (only present if tracing was enabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<EvaluationTrace>,
}
