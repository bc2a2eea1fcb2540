//! Unit tests for DecisionEngine

use super::*;
use crate::config::EngineConfig;
use crate::error::SdkError;
use crate::metrics::{
    Metrics, DECISIONS_NOT_REQUIRED_TOTAL, DECISIONS_REJECTED_TOTAL, DECISIONS_REQUIRED_TOTAL,
    DECISIONS_TOTAL,
};
use planning_core::{
    DecisionRequest, DecisionResult, HeightCategory, Location, Modifier, StructureType,
    UniversalCondition,
};

fn fence_adjacent_low() -> DecisionRequest {
    DecisionRequest::new(
        Location::Adjacent,
        HeightCategory::UpTo1m,
        StructureType::Fence,
    )
}

// ============================================================================
// Request IDs
// ============================================================================

#[test]
fn test_request_id_format() {
    let engine = DecisionEngine::default();
    let response = engine.decide(fence_adjacent_low()).unwrap();

    let parts: Vec<&str> = response.request_id.split('_').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "req");
    assert_eq!(parts[1].len(), 14);
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(parts[2].len(), 6);
    assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
}

// ============================================================================
// decide / evaluate agreement
// ============================================================================

#[test]
fn test_decide_matches_evaluate() {
    let engine = DecisionEngine::default();

    for structure in [
        StructureType::Fence,
        StructureType::Wall,
        StructureType::Gate,
        StructureType::Other,
    ] {
        for location in Location::ALL {
            for height in HeightCategory::ALL {
                for new_build in [false, true] {
                    for pd_removed in [false, true] {
                        let request = DecisionRequest::new(location, height, structure)
                            .with_modifier(Modifier::NewBuildProperty, new_build)
                            .with_modifier(Modifier::PdRemovedByPreviousPlanning, pd_removed);

                        let response = engine.decide(request).unwrap();
                        assert_eq!(response.result, evaluate(&request), "{:?}", request);
                        assert_eq!(response.result, engine.evaluate(&request));
                    }
                }
            }
        }
    }
}

#[test]
fn test_decided_by_stage() {
    let engine = DecisionEngine::default();

    let response = engine.decide(fence_adjacent_low()).unwrap();
    assert_eq!(response.decided_by, DecisionStage::Baseline);
    assert_eq!(response.result, DecisionResult::PermissionNotRequired);

    let request = fence_adjacent_low().with_modifier(Modifier::PdRemovedByPreviousPlanning, true);
    let response = engine.decide(request).unwrap();
    assert_eq!(response.decided_by, DecisionStage::Modifier);
    assert_eq!(response.result, DecisionResult::PermissionRequired);

    let request = request.with_condition(UniversalCondition::Aonb, true);
    let response = engine.decide(request).unwrap();
    assert_eq!(response.decided_by, DecisionStage::Universal);
}

// ============================================================================
// Tracing
// ============================================================================

#[test]
fn test_trace_disabled_by_default() {
    let engine = DecisionEngine::default();
    let response = engine.decide(fence_adjacent_low()).unwrap();
    assert!(response.trace.is_none());
}

#[test]
fn test_trace_from_config() {
    let engine = DecisionEngine::new(EngineConfig::new().enable_tracing(true));
    let response = engine.decide(fence_adjacent_low()).unwrap();
    assert!(response.trace.is_some());
}

#[test]
fn test_trace_from_options() {
    let engine = DecisionEngine::default();
    let response = engine
        .decide_with_options(fence_adjacent_low(), DecisionOptions::with_trace())
        .unwrap();

    let trace = response.trace.unwrap();
    assert_eq!(trace.universal.len(), 7);
    assert_eq!(trace.modifiers.len(), 2);
    assert_eq!(trace.decided_by, DecisionStage::Baseline);

    let baseline = trace.baseline.unwrap();
    assert_eq!(baseline.rule, BaselineRule::FenceAdjacent);
    assert_eq!(baseline.result, DecisionResult::PermissionNotRequired);
}

#[test]
fn test_trace_reads_every_universal_condition() {
    let engine = DecisionEngine::default();
    let request = fence_adjacent_low()
        .with_condition(UniversalCondition::ListedBuilding, true)
        .with_condition(UniversalCondition::FaceListedBuilding, true);

    let (result, trace) = engine.evaluate_traced(&request);

    assert_eq!(result, DecisionResult::PermissionRequired);
    assert_eq!(trace.universal.len(), 7);
    assert_eq!(
        trace.triggered_conditions(),
        vec!["listed_building", "face_listed_building"]
    );
    assert!(trace.baseline.is_none());
    assert!(trace.modifiers.is_empty());
    assert_eq!(trace.decided_by, DecisionStage::Universal);
}

#[test]
fn test_trace_keeps_baseline_under_modifier_override() {
    let engine = DecisionEngine::default();
    let request = DecisionRequest::new(
        Location::NotAdjacent,
        HeightCategory::Above1m,
        StructureType::Wall,
    )
    .with_modifier(Modifier::PdRemovedByPreviousPlanning, true);

    let (result, trace) = engine.evaluate_traced(&request);

    assert_eq!(result, DecisionResult::PermissionRequired);
    let baseline = trace.baseline.unwrap();
    assert_eq!(baseline.rule, BaselineRule::Wall);
    assert_eq!(baseline.result, DecisionResult::PermissionNotRequired);
    assert_eq!(trace.decided_by, DecisionStage::Modifier);
}

// ============================================================================
// Strict structure types
// ============================================================================

#[test]
fn test_lenient_mode_answers_unrecognized_structure() {
    let engine = DecisionEngine::default();
    let request = DecisionRequest::new(
        Location::Adjacent,
        HeightCategory::Above2m,
        StructureType::Other,
    );

    let response = engine.decide(request).unwrap();
    assert_eq!(response.result, DecisionResult::PermissionNotRequired);
}

#[test]
fn test_strict_mode_rejects_unrecognized_structure() {
    let engine = DecisionEngine::new(EngineConfig::new().strict_structure_types(true));
    let request = DecisionRequest::new(
        Location::Adjacent,
        HeightCategory::Above2m,
        StructureType::Other,
    )
    .with_condition(UniversalCondition::ListedBuilding, true);

    let result = engine.decide(request);
    assert!(matches!(
        result,
        Err(SdkError::UnrecognizedStructure(StructureType::Other))
    ));
    assert_eq!(engine.metrics().counter(DECISIONS_REJECTED_TOTAL).get(), 1);
    assert_eq!(engine.metrics().counter(DECISIONS_TOTAL).get(), 0);
}

#[test]
fn test_strict_mode_accepts_known_structures() {
    let engine = DecisionEngine::new(EngineConfig::new().strict_structure_types(true));
    for structure in StructureType::KNOWN {
        let request = DecisionRequest::new(Location::Adjacent, HeightCategory::UpTo1m, structure);
        assert!(engine.decide(request).is_ok());
    }
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn test_metrics_counts_outcomes() {
    let engine = DecisionEngine::default();

    engine.decide(fence_adjacent_low()).unwrap();
    engine
        .decide(fence_adjacent_low().with_condition(UniversalCondition::Article4Directive, true))
        .unwrap();
    engine
        .decide(fence_adjacent_low().with_condition(UniversalCondition::Article23Land, true))
        .unwrap();

    let metrics = engine.metrics();
    assert_eq!(metrics.counter(DECISIONS_TOTAL).get(), 3);
    assert_eq!(metrics.counter(DECISIONS_REQUIRED_TOTAL).get(), 2);
    assert_eq!(metrics.counter(DECISIONS_NOT_REQUIRED_TOTAL).get(), 1);
    assert_eq!(metrics.histogram("decide_duration").count(), 3);
}

#[test]
fn test_decide_duration_histogram_after_many_decisions() {
    let engine = DecisionEngine::default();

    for _ in 0..20_000 {
        engine.decide(fence_adjacent_low()).unwrap();
    }

    let histogram = engine.metrics().histogram("decide_duration");
    assert_eq!(histogram.count(), 20_000);
    assert!(histogram.sum() >= 0.0);
    assert!(histogram.avg().is_finite());
    assert!(histogram.avg() <= histogram.sum());
    assert_eq!(engine.metrics().counter(DECISIONS_TOTAL).get(), 20_000);
}

#[test]
fn test_metrics_disabled() {
    let engine = DecisionEngine::new(EngineConfig::new().enable_metrics(false));
    engine.decide(fence_adjacent_low()).unwrap();

    assert!(engine.metrics().counter_names().is_empty());
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn test_engine_shared_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let engine = Arc::new(DecisionEngine::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..25 {
                    let response = engine.decide(fence_adjacent_low()).unwrap();
                    assert_eq!(response.result, DecisionResult::PermissionNotRequired);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(engine.metrics().counter(DECISIONS_TOTAL).get(), 100);
}

#[test]
fn test_response_serializes_codes() {
    let engine = DecisionEngine::default();
    let response = engine
        .decide_with_options(fence_adjacent_low(), DecisionOptions::with_trace())
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["result"], "N");
    assert_eq!(json["decided_by"], "baseline");
    assert_eq!(json["trace"]["baseline"]["rule"], "fence_adjacent");
    assert_eq!(
        json["trace"]["universal"][0]["condition"],
        "listed_building"
    );
}
