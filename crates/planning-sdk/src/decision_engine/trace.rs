//! Evaluation trace types
//!
//! These structures record every input the evaluation looked at, for audit.

use super::evaluator::BaselineRule;
use super::types::DecisionStage;
use planning_core::{DecisionResult, HeightCategory, Location, StructureType};
use serde::{Deserialize, Serialize};

/// Trace of a single flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionTrace {
    /// Field name (e.g. "listed_building")
    pub condition: String,

    /// Human-readable description
    pub label: String,

    /// The flag value
    pub value: bool,
}

impl ConditionTrace {
    /// Create a new condition trace
    pub fn new(condition: impl Into<String>, label: impl Into<String>, value: bool) -> Self {
        Self {
            condition: condition.into(),
            label: label.into(),
            value,
        }
    }
}

/// Trace of the baseline stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineTrace {
    /// Matrix row that applied
    pub rule: BaselineRule,

    pub structure_type: StructureType,
    pub location: Location,
    pub height: HeightCategory,

    /// Baseline outcome before modifiers
    pub result: DecisionResult,
}

/// Full trace of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationTrace {
    /// All seven universal conditions, in evaluation order
    pub universal: Vec<ConditionTrace>,

    /// Absent when a universal condition decided the outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineTrace>,

    /// Modifiers, empty when a universal condition decided the outcome
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<ConditionTrace>,

    /// Stage that fixed the outcome
    pub decided_by: DecisionStage,

    /// Final outcome
    pub result: DecisionResult,
}

impl EvaluationTrace {
    /// Universal conditions that were set
    pub fn triggered_conditions(&self) -> Vec<&str> {
        self.universal
            .iter()
            .filter(|trace| trace.value)
            .map(|trace| trace.condition.as_str())
            .collect()
    }
}
