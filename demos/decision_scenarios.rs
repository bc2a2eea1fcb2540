//! Decision scenarios example
//!
//! This example demonstrates:
//! - Building a DecisionEngine with metrics enabled
//! - Deciding a handful of typical enclosure requests
//! - Reading the evaluation trace and metrics counters

use planning_sdk::{
    DecisionEngineBuilder, DecisionOptions, DecisionRequest, HeightCategory, Location, Metrics,
    Modifier, StructureType, UniversalCondition,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planning_sdk=info".into()),
        )
        .init();

    println!("=== Decision Scenarios Example ===\n");

    let engine = DecisionEngineBuilder::new().enable_metrics(true).build()?;

    let scenarios = [
        (
            "Low fence next to a highway",
            DecisionRequest::new(
                Location::Adjacent,
                HeightCategory::UpTo1m,
                StructureType::Fence,
            ),
        ),
        (
            "Tall garden wall",
            DecisionRequest::new(
                Location::NotAdjacent,
                HeightCategory::Above2m,
                StructureType::Wall,
            ),
        ),
        (
            "Gate on a new build",
            DecisionRequest::new(
                Location::Adjacent,
                HeightCategory::UpTo1m,
                StructureType::Gate,
            )
            .with_modifier(Modifier::NewBuildProperty, true),
        ),
        (
            "Fence at a listed building",
            DecisionRequest::new(
                Location::NotAdjacent,
                HeightCategory::UpTo1m,
                StructureType::Fence,
            )
            .with_condition(UniversalCondition::ListedBuilding, true),
        ),
        (
            "Wall where PD rights were removed",
            DecisionRequest::new(
                Location::NotAdjacent,
                HeightCategory::UpTo1m,
                StructureType::Wall,
            )
            .with_modifier(Modifier::PdRemovedByPreviousPlanning, true),
        ),
    ];

    for (name, request) in scenarios {
        let response = engine.decide_with_options(request, DecisionOptions::with_trace())?;

        println!("{}:", name);
        println!("  Request ID: {}", response.request_id);
        println!("  Result: {}", response.result);
        println!("  Decided by: {}", response.decided_by);
        if let Some(trace) = &response.trace {
            let triggered = trace.triggered_conditions();
            if !triggered.is_empty() {
                println!("  Triggered conditions: {:?}", triggered);
            }
            if let Some(baseline) = &trace.baseline {
                println!("  Baseline rule: {} -> {}", baseline.rule, baseline.result);
            }
        }
        println!("  Processing Time: {}us\n", response.processing_time_us);
    }

    let metrics = engine.metrics();
    println!("Metrics:");
    println!(
        "  Total Decisions: {}",
        metrics.counter("decisions_total").get()
    );
    println!(
        "  Permission Required: {}",
        metrics.counter("decisions_required_total").get()
    );
    println!(
        "  Permission Not Required: {}",
        metrics.counter("decisions_not_required_total").get()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
