//! Error types for Planning Core

use thiserror::Error;

/// Core error type
///
/// Only produced when converting external text into the enumerated input
/// types. Evaluation itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid location: '{0}' (expected adjacent or not_adjacent)")]
    InvalidLocation(String),

    #[error("Invalid height category: '{0}' (expected up_to_1m, above_1m, up_to_2m or above_2m)")]
    InvalidHeight(String),

    #[error("Invalid structure type: '{0}' (expected fence, wall or gate)")]
    InvalidStructureType(String),

    #[error("Invalid decision code: '{0}' (expected Y or N)")]
    InvalidDecisionCode(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
