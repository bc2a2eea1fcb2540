//! Prompt error types

use thiserror::Error;

/// Errors raised while talking to the user
///
/// Invalid answers are never errors: they are reported and asked again.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Input ended before every question was answered
    #[error("Input closed before all questions were answered")]
    InputClosed,

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
