//! Decision request

use super::conditions::{Modifier, Modifiers, UniversalCondition, UniversalConditions};
use super::enclosure::{HeightCategory, Location, StructureType};
use serde::{Deserialize, Serialize};

/// One proposed enclosure and its site context
///
/// Constructed by the caller for a single evaluation. Flag groups default to
/// all-false when omitted from serialized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Position relative to a highway
    pub location: Location,

    /// Height bucket
    pub height: HeightCategory,

    /// Fence, wall or gate
    pub structure_type: StructureType,

    /// Universal conditions
    #[serde(default)]
    pub universal: UniversalConditions,

    /// Modifiers
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl DecisionRequest {
    /// Create a request with every flag cleared
    pub fn new(location: Location, height: HeightCategory, structure_type: StructureType) -> Self {
        Self {
            location,
            height,
            structure_type,
            universal: UniversalConditions::none(),
            modifiers: Modifiers::none(),
        }
    }

    /// Replace the universal conditions
    pub fn with_universal(mut self, universal: UniversalConditions) -> Self {
        self.universal = universal;
        self
    }

    /// Set a single universal condition
    pub fn with_condition(mut self, condition: UniversalCondition, value: bool) -> Self {
        self.universal.set(condition, value);
        self
    }

    /// Replace the modifiers
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set a single modifier
    pub fn with_modifier(mut self, modifier: Modifier, value: bool) -> Self {
        self.modifiers.set(modifier, value);
        self
    }
}
