//! DecisionEngine - Main API for planning permission decisions
//!
//! This module provides the pure decision function and the `DecisionEngine`
//! that wraps it with request ids, audit traces, metrics and logging.
//!
//! # Architecture
//!
//! The module is organized into:
//! - `evaluator`: the three evaluation stages and the pure `evaluate`
//! - `types`: Options/Response types (DecisionOptions, DecisionResponse, DecisionStage)
//! - `trace`: audit trace types
//! - `trace_builder`: trace construction alongside evaluation
//! - `engine`: Core DecisionEngine implementation
//! - `tests`: Unit tests (test-only)

mod engine;
mod evaluator;
mod trace;
mod trace_builder;
mod types;

// Re-export public types
pub use engine::DecisionEngine;
pub use evaluator::{evaluate, BaselineRule};
pub use trace::{BaselineTrace, ConditionTrace, EvaluationTrace};
pub use types::{DecisionOptions, DecisionResponse, DecisionStage};

// Tests module (only compiled in test mode)
#[cfg(test)]
mod tests;
