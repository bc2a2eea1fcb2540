//! Site conditions
//!
//! Universal conditions force a "permission required" outcome on their own.
//! Modifiers are applied around the structure baseline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single universal condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniversalCondition {
    ListedBuilding,
    #[serde(rename = "article_2_3_land")]
    Article23Land,
    #[serde(rename = "article_2_4_land")]
    Article24Land,
    #[serde(rename = "article_4_directive")]
    Article4Directive,
    Aonb,
    WorksAffectingTpo,
    FaceListedBuilding,
}

impl UniversalCondition {
    /// All universal conditions in evaluation order
    pub const ALL: [UniversalCondition; 7] = [
        UniversalCondition::ListedBuilding,
        UniversalCondition::Article23Land,
        UniversalCondition::Article24Land,
        UniversalCondition::Article4Directive,
        UniversalCondition::Aonb,
        UniversalCondition::WorksAffectingTpo,
        UniversalCondition::FaceListedBuilding,
    ];

    /// Field name
    pub fn code(&self) -> &'static str {
        match self {
            UniversalCondition::ListedBuilding => "listed_building",
            UniversalCondition::Article23Land => "article_2_3_land",
            UniversalCondition::Article24Land => "article_2_4_land",
            UniversalCondition::Article4Directive => "article_4_directive",
            UniversalCondition::Aonb => "aonb",
            UniversalCondition::WorksAffectingTpo => "works_affecting_tpo",
            UniversalCondition::FaceListedBuilding => "face_listed_building",
        }
    }

    /// Short human-readable description
    pub fn label(&self) -> &'static str {
        match self {
            UniversalCondition::ListedBuilding => "Listed building",
            UniversalCondition::Article23Land => "Article 2(3) land",
            UniversalCondition::Article24Land => "Article 2(4) land",
            UniversalCondition::Article4Directive => "Article 4 directive",
            UniversalCondition::Aonb => "Area of Outstanding Natural Beauty",
            UniversalCondition::WorksAffectingTpo => "Works affecting a Tree Preservation Order",
            UniversalCondition::FaceListedBuilding => "Enclosure faces a listed building",
        }
    }
}

impl fmt::Display for UniversalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The seven universal flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversalConditions {
    pub listed_building: bool,
    pub article_2_3_land: bool,
    pub article_2_4_land: bool,
    pub article_4_directive: bool,
    pub aonb: bool,
    pub works_affecting_tpo: bool,
    pub face_listed_building: bool,
}

impl UniversalConditions {
    /// No universal condition applies
    pub fn none() -> Self {
        Self::default()
    }

    /// Flag value for one condition
    pub fn get(&self, condition: UniversalCondition) -> bool {
        match condition {
            UniversalCondition::ListedBuilding => self.listed_building,
            UniversalCondition::Article23Land => self.article_2_3_land,
            UniversalCondition::Article24Land => self.article_2_4_land,
            UniversalCondition::Article4Directive => self.article_4_directive,
            UniversalCondition::Aonb => self.aonb,
            UniversalCondition::WorksAffectingTpo => self.works_affecting_tpo,
            UniversalCondition::FaceListedBuilding => self.face_listed_building,
        }
    }

    /// Set the flag for one condition
    pub fn set(&mut self, condition: UniversalCondition, value: bool) {
        let slot = match condition {
            UniversalCondition::ListedBuilding => &mut self.listed_building,
            UniversalCondition::Article23Land => &mut self.article_2_3_land,
            UniversalCondition::Article24Land => &mut self.article_2_4_land,
            UniversalCondition::Article4Directive => &mut self.article_4_directive,
            UniversalCondition::Aonb => &mut self.aonb,
            UniversalCondition::WorksAffectingTpo => &mut self.works_affecting_tpo,
            UniversalCondition::FaceListedBuilding => &mut self.face_listed_building,
        };
        *slot = value;
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, condition: UniversalCondition, value: bool) -> Self {
        self.set(condition, value);
        self
    }

    /// Every condition with its value, in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (UniversalCondition, bool)> + '_ {
        UniversalCondition::ALL
            .into_iter()
            .map(move |condition| (condition, self.get(condition)))
    }

    /// Whether any universal condition applies
    pub fn any(&self) -> bool {
        self.iter().any(|(_, value)| value)
    }
}

/// A single modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    NewBuildProperty,
    PdRemovedByPreviousPlanning,
}

impl Modifier {
    /// All modifiers in evaluation order
    pub const ALL: [Modifier; 2] = [
        Modifier::NewBuildProperty,
        Modifier::PdRemovedByPreviousPlanning,
    ];

    /// Field name
    pub fn code(&self) -> &'static str {
        match self {
            Modifier::NewBuildProperty => "new_build_property",
            Modifier::PdRemovedByPreviousPlanning => "pd_removed_by_previous_planning",
        }
    }

    /// Short human-readable description
    pub fn label(&self) -> &'static str {
        match self {
            Modifier::NewBuildProperty => "New build property",
            Modifier::PdRemovedByPreviousPlanning => {
                "Permitted development rights removed by previous planning"
            }
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The two modifier flags
///
/// `new_build_property` only affects gates, through the baseline.
/// `pd_removed_by_previous_planning` overrides any baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub new_build_property: bool,
    pub pd_removed_by_previous_planning: bool,
}

impl Modifiers {
    /// No modifier applies
    pub fn none() -> Self {
        Self::default()
    }

    /// Flag value for one modifier
    pub fn get(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::NewBuildProperty => self.new_build_property,
            Modifier::PdRemovedByPreviousPlanning => self.pd_removed_by_previous_planning,
        }
    }

    /// Set the flag for one modifier
    pub fn set(&mut self, modifier: Modifier, value: bool) {
        match modifier {
            Modifier::NewBuildProperty => self.new_build_property = value,
            Modifier::PdRemovedByPreviousPlanning => self.pd_removed_by_previous_planning = value,
        }
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, modifier: Modifier, value: bool) -> Self {
        self.set(modifier, value);
        self
    }

    /// Every modifier with its value, in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (Modifier, bool)> + '_ {
        Modifier::ALL
            .into_iter()
            .map(move |modifier| (modifier, self.get(modifier)))
    }
}
