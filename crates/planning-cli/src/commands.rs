//! Command handlers

use crate::prompt::{Interview, Prompter};
use planning_sdk::{load_request, DecisionEngine, DecisionOptions, DecisionResult};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// Run the interactive interview and print the decision
///
/// When a universal condition is met the engine is not consulted: the
/// outcome is already fixed and the enclosure questions were never asked.
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &DecisionEngine,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<DecisionResult> {
    prompter.say("Welcome to the planning permission check.")?;
    prompter.say("Enter the details for the planning permission check.\n")?;

    match prompter.interview()? {
        Interview::UniversalConditionMet(universal) => {
            let met: Vec<&str> = universal
                .iter()
                .filter(|(_, value)| *value)
                .map(|(condition, _)| condition.code())
                .collect();
            info!(conditions = ?met, "Universal condition met, skipping enclosure questions");

            let result = DecisionResult::PermissionRequired;
            prompter.say("\nOne or more universal conditions are met.")?;
            prompter.say(&format!(
                "Result: Planning permission is required ({}).",
                result.as_code()
            ))?;
            Ok(result)
        }
        Interview::Complete(request) => {
            let response = engine.decide(request)?;
            prompter.say(&format!(
                "\nResult: Planning permission required: {}",
                response.result.as_code()
            ))?;
            Ok(response.result)
        }
    }
}

/// Decide a request file and print the response
pub fn run_evaluate<W: Write>(
    engine: &DecisionEngine,
    request_path: &Path,
    code_only: bool,
    trace: bool,
    output: &mut W,
) -> anyhow::Result<DecisionResult> {
    let request = load_request(request_path)?;

    let options = DecisionOptions {
        enable_trace: trace || engine.config().enable_tracing,
    };
    let response = engine.decide_with_options(request, options)?;

    if code_only {
        writeln!(output, "{}", response.result.as_code())?;
    } else {
        writeln!(output, "{}", serde_json::to_string_pretty(&response)?)?;
    }

    Ok(response.result)
}
