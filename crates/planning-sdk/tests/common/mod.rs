//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use planning_sdk::{
    evaluate, DecisionRequest, DecisionResult, HeightCategory, Location, Modifiers, StructureType,
    UniversalCondition, UniversalConditions,
};

/// Test helper to build requests field by field, starting from "all flags off"
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    request: DecisionRequest,
}

impl Scenario {
    pub fn fence(location: Location, height: HeightCategory) -> Self {
        Self {
            request: DecisionRequest::new(location, height, StructureType::Fence),
        }
    }

    pub fn wall(location: Location, height: HeightCategory) -> Self {
        Self {
            request: DecisionRequest::new(location, height, StructureType::Wall),
        }
    }

    pub fn gate(location: Location, height: HeightCategory) -> Self {
        Self {
            request: DecisionRequest::new(location, height, StructureType::Gate),
        }
    }

    pub fn structure(structure: StructureType, location: Location, height: HeightCategory) -> Self {
        Self {
            request: DecisionRequest::new(location, height, structure),
        }
    }

    pub fn universal(mut self, condition: UniversalCondition) -> Self {
        self.request.universal.set(condition, true);
        self
    }

    pub fn new_build(mut self) -> Self {
        self.request.modifiers.new_build_property = true;
        self
    }

    pub fn pd_removed(mut self) -> Self {
        self.request.modifiers.pd_removed_by_previous_planning = true;
        self
    }

    pub fn request(&self) -> DecisionRequest {
        self.request
    }

    pub fn decide(&self) -> DecisionResult {
        evaluate(&self.request)
    }

    pub fn assert_code(&self, expected: &str) {
        assert_eq!(
            self.decide().as_code(),
            expected,
            "unexpected decision for {:?}",
            self.request
        );
    }
}

/// Every structure the request type can carry
pub fn all_structures() -> [StructureType; 4] {
    [
        StructureType::Fence,
        StructureType::Wall,
        StructureType::Gate,
        StructureType::Other,
    ]
}

/// Every combination of both modifier flags
pub fn all_modifiers() -> Vec<Modifiers> {
    let mut out = Vec::new();
    for new_build_property in [false, true] {
        for pd_removed_by_previous_planning in [false, true] {
            out.push(Modifiers {
                new_build_property,
                pd_removed_by_previous_planning,
            });
        }
    }
    out
}

/// Every non-empty combination of universal flags (127 of them)
pub fn all_universal_triggered() -> Vec<UniversalConditions> {
    (1u8..128)
        .map(|mask| {
            UniversalCondition::ALL
                .into_iter()
                .enumerate()
                .fold(UniversalConditions::none(), |acc, (i, condition)| {
                    acc.with(condition, mask & (1 << i) != 0)
                })
        })
        .collect()
}

/// Every request with no universal condition set
pub fn all_requests_without_universal() -> Vec<DecisionRequest> {
    let mut out = Vec::new();
    for structure in all_structures() {
        for location in Location::ALL {
            for height in HeightCategory::ALL {
                for modifiers in all_modifiers() {
                    out.push(
                        DecisionRequest::new(location, height, structure).with_modifiers(modifiers),
                    );
                }
            }
        }
    }
    out
}
