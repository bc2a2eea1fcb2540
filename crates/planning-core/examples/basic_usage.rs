//! Basic usage example for planning-core
//!
//! Run with: cargo run --example basic_usage

use planning_core::{
    DecisionRequest, DecisionResult, HeightCategory, Location, Modifier, StructureType,
    UniversalCondition,
};

fn main() {
    println!("=== Planning Core Basic Usage Example ===\n");

    // Example 1: Enumerating the answer sets
    println!("1. Enclosure answers:");
    for location in Location::ALL {
        println!("   location: {}", location);
    }
    for height in HeightCategory::ALL {
        println!("   height: {}", height);
    }
    for structure in StructureType::KNOWN {
        println!("   structure_type: {}", structure);
    }
    println!();

    // Example 2: Parsing user-facing text
    println!("2. Parsing:");
    let structure: StructureType = "Gate".parse().unwrap_or(StructureType::Other);
    let lenient = StructureType::from("pergola".to_string());
    println!(
        "   \"Gate\" -> {} (recognized: {})",
        structure,
        structure.is_recognized()
    );
    println!(
        "   \"pergola\" -> {} (recognized: {})\n",
        lenient,
        lenient.is_recognized()
    );

    // Example 3: Building a request
    println!("3. Building a request:");
    let request = DecisionRequest::new(
        Location::Adjacent,
        HeightCategory::UpTo1m,
        StructureType::Gate,
    )
    .with_modifier(Modifier::NewBuildProperty, true)
    .with_condition(UniversalCondition::Aonb, false);
    println!("   {:#?}\n", request);

    // Example 4: Serializing
    println!("4. Serialized request:");
    match serde_json::to_string_pretty(&request) {
        Ok(json) => println!("{}\n", json),
        Err(e) => println!("   failed to serialize: {}\n", e),
    }

    // Example 5: Decision codes
    println!("5. Decision codes:");
    for result in [
        DecisionResult::PermissionRequired,
        DecisionResult::PermissionNotRequired,
    ] {
        println!("   {:?} -> {}", result, result.as_code());
    }

    println!("\n=== Example Complete ===");
}
