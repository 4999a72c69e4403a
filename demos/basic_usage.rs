//! Basic usage example for countrycodes-rs
//!
//! This example demonstrates how to:
//! - Load the bundled ISO 3166-1 table
//! - Look codes up by alpha-2, alpha-3, numeric code and name
//! - Search names by prefix
//! - Use the snapshot cache

use countrycodes_rs::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== countrycodes-rs Basic Usage Example ===\n");

    // Load the store
    println!("Loading bundled country codes...");
    let codes = CountryCodes::bundled()?;
    println!("✓ {} codes loaded\n", codes.len());

    // Example 1: Exact lookups
    println!("--- Example 1: Exact lookups ---");
    if let Some(c) = codes.get_by_alpha2("DE") {
        println!("alpha2 DE  -> {} ({}, {})", c.name(), c.alpha3().unwrap_or("-"), c.numeric_str());
    }
    if let Some(c) = codes.get_by_alpha3("JPN") {
        println!("alpha3 JPN -> {}", c.name());
    }
    if let Some(c) = codes.get_by_numeric(840) {
        println!("numeric 840 -> {}", c.name());
    }
    if let Some(c) = codes.get_by_name("Viet Nam") {
        println!("name 'Viet Nam' -> {}", c.alpha2());
    }
    println!();

    // Example 2: Prefix search
    println!("--- Example 2: Prefix search ---");
    for prefix in ["united", "saint", "korea"] {
        let hits = codes.find_by_name(prefix);
        println!("'{prefix}': {} match(es)", hits.len());
        for c in hits {
            println!("  - {} ({})", c.name(), c.alpha2());
        }
    }
    println!();

    // Example 3: Reserved codes
    println!("--- Example 3: Transitionally reserved codes ---");
    for c in codes.by_assignment(Assignment::TransitionallyReserved) {
        println!("{} {} {}", c.alpha2(), c.numeric_str(), c.name());
    }
    println!();

    // Example 4: Snapshot cache
    println!("--- Example 4: Cache usage ---");
    let source = CountryCodes::default_dataset_path();
    let start = std::time::Instant::now();
    let first = CountryCodes::load_cached(&source)?;
    println!("First load: {} codes in {:?}", first.len(), start.elapsed());
    let start = std::time::Instant::now();
    let second = CountryCodes::load_cached(&source)?;
    println!("Second load: {} codes in {:?}", second.len(), start.elapsed());
    println!();

    // Example 5: Statistics
    println!("--- Example 5: Store statistics ---");
    let stats = codes.stats();
    println!("Records: {}", stats.records);
    println!("Distinct numeric codes: {}", stats.numeric);
    for (assignment, count) in &stats.per_assignment {
        println!("  {assignment}: {count}");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
