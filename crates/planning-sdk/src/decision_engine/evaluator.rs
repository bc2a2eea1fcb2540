//! Three-stage evaluation of the decision matrix
//!
//! 1. Universal override: any universal condition means permission is required.
//! 2. Baseline: structure, location and height pick a row of the matrix.
//! 3. Modifier override: removed PD rights force "required" over any baseline.
//!
//! Everything here is pure. Logging and tracing live in the engine.

use super::types::DecisionStage;
use planning_core::{
    DecisionRequest, DecisionResult, HeightCategory, Location, Modifiers, StructureType,
    UniversalConditions,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Matrix row used to derive the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineRule {
    /// Gates: required only on new build properties
    Gate,
    /// Fences adjacent to a highway: free only up to 1m
    FenceAdjacent,
    /// Other fences: required only above 2m
    FenceNotAdjacent,
    /// Walls, any location: required only above 2m
    Wall,
    /// Structure outside the matrix
    Unrecognized,
}

impl BaselineRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaselineRule::Gate => "gate",
            BaselineRule::FenceAdjacent => "fence_adjacent",
            BaselineRule::FenceNotAdjacent => "fence_not_adjacent",
            BaselineRule::Wall => "wall",
            BaselineRule::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for BaselineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stage 1
pub(crate) fn universal_override(universal: &UniversalConditions) -> bool {
    universal.any()
}

/// Stage 2
///
/// `location` and `height` are ignored for gates; `location` is ignored for walls.
pub(crate) fn baseline(request: &DecisionRequest) -> (BaselineRule, DecisionResult) {
    match (request.structure_type, request.location) {
        (StructureType::Gate, _) => (
            BaselineRule::Gate,
            DecisionResult::from(request.modifiers.new_build_property),
        ),
        (StructureType::Fence, Location::Adjacent) => (
            BaselineRule::FenceAdjacent,
            DecisionResult::from(request.height != HeightCategory::UpTo1m),
        ),
        (StructureType::Fence, Location::NotAdjacent) => (
            BaselineRule::FenceNotAdjacent,
            DecisionResult::from(request.height == HeightCategory::Above2m),
        ),
        (StructureType::Wall, _) => (
            BaselineRule::Wall,
            DecisionResult::from(request.height == HeightCategory::Above2m),
        ),
        (StructureType::Other, _) => (
            BaselineRule::Unrecognized,
            DecisionResult::PermissionNotRequired,
        ),
    }
}

/// Stage 3
pub(crate) fn modifier_override(baseline: DecisionResult, modifiers: &Modifiers) -> DecisionResult {
    if modifiers.pd_removed_by_previous_planning {
        DecisionResult::PermissionRequired
    } else {
        baseline
    }
}

/// Stage credited with the outcome once stage 1 has passed
pub(crate) fn post_universal_stage(modifiers: &Modifiers) -> DecisionStage {
    if modifiers.pd_removed_by_previous_planning {
        DecisionStage::Modifier
    } else {
        DecisionStage::Baseline
    }
}

/// Evaluate and report which stage fixed the outcome
pub(crate) fn evaluate_staged(request: &DecisionRequest) -> (DecisionResult, DecisionStage) {
    if universal_override(&request.universal) {
        return (DecisionResult::PermissionRequired, DecisionStage::Universal);
    }

    let (_, baseline_result) = baseline(request);
    (
        modifier_override(baseline_result, &request.modifiers),
        post_universal_stage(&request.modifiers),
    )
}

/// Evaluate the decision matrix for one request
///
/// Total over its input: structures outside the matrix fall back to
/// "not required" at the baseline stage. Same input, same output.
pub fn evaluate(request: &DecisionRequest) -> DecisionResult {
    evaluate_staged(request).0
}
