//! Evaluation trace construction
//!
//! Runs the same stage functions as [`evaluate`](super::evaluate) while
//! recording what each stage saw. All seven universal conditions are read
//! even when the first one already decides the outcome.

use super::evaluator::{baseline, modifier_override, post_universal_stage, universal_override};
use super::trace::{BaselineTrace, ConditionTrace, EvaluationTrace};
use super::types::DecisionStage;
use planning_core::{DecisionRequest, DecisionResult};

pub(super) struct TraceBuilder;

impl TraceBuilder {
    /// Evaluate a request and build its trace
    pub(super) fn evaluate(request: &DecisionRequest) -> (DecisionResult, EvaluationTrace) {
        let universal: Vec<ConditionTrace> = request
            .universal
            .iter()
            .map(|(condition, value)| {
                ConditionTrace::new(condition.code(), condition.label(), value)
            })
            .collect();

        if universal_override(&request.universal) {
            let result = DecisionResult::PermissionRequired;
            let trace = EvaluationTrace {
                universal,
                baseline: None,
                modifiers: Vec::new(),
                decided_by: DecisionStage::Universal,
                result,
            };
            return (result, trace);
        }

        let (rule, baseline_result) = baseline(request);
        let result = modifier_override(baseline_result, &request.modifiers);
        let decided_by = post_universal_stage(&request.modifiers);

        let modifiers = request
            .modifiers
            .iter()
            .map(|(modifier, value)| ConditionTrace::new(modifier.code(), modifier.label(), value))
            .collect();

        let trace = EvaluationTrace {
            universal,
            baseline: Some(BaselineTrace {
                rule,
                structure_type: request.structure_type,
                location: request.location,
                height: request.height,
                result: baseline_result,
            }),
            modifiers,
            decided_by,
            result,
        };

        (result, trace)
    }
}
