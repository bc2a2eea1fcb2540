//! Planning Permission Decision Engine SDK
//!
//! High-level API for evaluating the boundary enclosure decision matrix.

pub mod builder;
pub mod config;
pub mod decision_engine;
pub mod error;
pub mod metrics;
pub mod request_loader;

// Re-export main types
pub use builder::DecisionEngineBuilder;
pub use config::EngineConfig;
pub use decision_engine::{
    evaluate, BaselineRule, BaselineTrace, ConditionTrace, DecisionEngine, DecisionOptions,
    DecisionResponse, DecisionStage, EvaluationTrace,
};
pub use error::{Result, SdkError};
pub use metrics::{Counter, Histogram, Metrics, MetricsCollector};
pub use request_loader::{load_request, parse_request, RequestFormat};

// Re-export commonly used types from dependencies
pub use planning_core::{
    DecisionRequest, DecisionResult, HeightCategory, Location, Modifier, Modifiers, StructureType,
    UniversalCondition, UniversalConditions,
};
