//! Planning permission command line library
//!
//! Provides the interactive prompt and command handling for testing and reuse.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;
