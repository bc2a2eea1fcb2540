//! Input and output types for a single decision
//!
//! This module contains:
//! - Enclosure attributes
//! - Site conditions (universal flags and modifiers)
//! - The decision request
//! - The decision result

pub mod conditions;
pub mod enclosure;
pub mod outcome;
pub mod request;

pub use conditions::{Modifier, Modifiers, UniversalCondition, UniversalConditions};
pub use enclosure::{HeightCategory, Location, StructureType};
pub use outcome::DecisionResult;
pub use request::DecisionRequest;
