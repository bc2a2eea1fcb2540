//! Planning permission command line tool
//!
//! Interactive numbered-menu check, or one-shot evaluation of a request file.

use anyhow::Result;
use clap::Parser;
use planning_cli::cli::{Cli, Command};
use planning_cli::commands::{run_evaluate, run_interactive};
use planning_cli::config::{CliConfig, LogFormat};
use planning_cli::prompt::Prompter;
use planning_sdk::DecisionEngineBuilder;
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = CliConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    match cli.selected_command() {
        Command::Interactive => {
            let engine = DecisionEngineBuilder::new()
                .with_config(config.engine_config())
                .build()?;

            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            run_interactive(&engine, &mut prompter)?;
        }
        Command::Evaluate {
            request,
            code_only,
            strict,
        } => {
            let engine = DecisionEngineBuilder::new()
                .with_config(config.engine_config())
                .strict_structure_types(strict || config.strict_structure_types)
                .build()?;

            let mut stdout = io::stdout().lock();
            run_evaluate(&engine, &request, code_only, cli.trace, &mut stdout)?;
        }
    }

    Ok(())
}

/// Filter directives used when `RUST_LOG` is not set
///
/// Covers this binary's own target as well as both library crates.
fn default_directives(level: &str) -> String {
    format!(
        "{}={level},planning_cli={level},planning_sdk={level}",
        env!("CARGO_CRATE_NAME"),
        level = level
    )
}

/// Initialize tracing subscriber
///
/// Logs go to stderr so prompts and results on stdout stay clean.
fn init_tracing(config: &CliConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(&config.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
