//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Planning permission check for fences, walls and gates
#[derive(Parser, Debug)]
#[command(name = "planning-permission", version, about)]
pub struct Cli {
    /// Configuration file (defaults to config/planning.*)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Include the evaluation trace in JSON output
    #[arg(long, global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer the questions one at a time (default)
    Interactive,

    /// Decide a request stored as JSON or YAML
    Evaluate {
        /// Request file; `.yaml`/`.yml` is read as YAML, anything else as JSON
        #[arg(long, short)]
        request: PathBuf,

        /// Print only Y or N
        #[arg(long)]
        code_only: bool,

        /// Reject structure types other than fence, wall or gate
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// Subcommand to run, interactive when none was given
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
