//! Planning Core - Core types for the planning permission decision engine
//!
//! This crate provides the fundamental types shared by the engine and its callers:
//! - Enclosure attributes (location, height category, structure type)
//! - Universal conditions and modifiers
//! - The decision request and its two-valued result
//! - Error types for parsing external values into those types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{
    DecisionRequest, DecisionResult, HeightCategory, Location, Modifier, Modifiers, StructureType,
    UniversalCondition, UniversalConditions,
};
