//! Request files example
//!
//! This example demonstrates:
//! - Loading decision requests from JSON and YAML documents
//! - Deciding them with an engine configured from a YAML file
//! - Printing the serialized response

use planning_sdk::{load_request, DecisionEngineBuilder};

const REQUEST_FILES: [&str; 3] = [
    "demos/requests/gate_new_build.yaml",
    "demos/requests/garden_wall.json",
    "demos/requests/listed_fence.yaml",
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planning_sdk=debug".into()),
        )
        .init();

    println!("=== Request Files Example ===\n");

    let engine = DecisionEngineBuilder::new()
        .with_config_file("demos/engine.yaml")
        .build()?;

    for path in REQUEST_FILES {
        let request = load_request(path)?;
        let response = engine.decide(request)?;

        println!("{}:", path);
        println!("{}\n", serde_json::to_string_pretty(&response)?);
    }

    println!("=== Example Complete ===");
    Ok(())
}
