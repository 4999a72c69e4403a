//! Error handling example for countrycodes-rs
//!
//! This example demonstrates the construction errors and not-found lookups

use countrycodes_rs::prelude::*;

const HEADER: &str = "full_name,short_name_lower_case,remarks,independent_bool,territory_name,alpha2_code,alpha3_code,numeric_code,assignment_status\n";

fn main() -> Result<()> {
    println!("=== countrycodes-rs Error Handling Example ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Loading a missing file ---");
    match CountryCodes::load_from_path("does/not/exist.csv") {
        Ok(_) => println!("✓ unexpectedly loaded"),
        Err(e) => eprintln!("✗ {e}"),
    }
    println!();

    // Example 2: Broken sources, one per error kind
    println!("--- Example 2: Broken sources ---");
    let broken = [
        ("header only", String::new()),
        ("short row", "Albania,Albania,AL,ALB,008,OfficiallyAssigned\n".to_string()),
        ("bad status", "Albania,Albania,,true,,AL,ALB,008,Assigned\n".to_string()),
        ("bad numeric", "Albania,Albania,,true,,AL,ALB,O08,OfficiallyAssigned\n".to_string()),
        (
            "bad codes",
            "Albania,Albania,,true,,ALB,ALB,008,OfficiallyAssigned\nAlgeria,Algeria,,true,,DZ,,012,OfficiallyAssigned\n"
                .to_string(),
        ),
    ];
    for (label, body) in broken {
        match CountryCodes::from_csv_str(&format!("{HEADER}{body}")) {
            Ok(_) => println!("  {label}: loaded"),
            Err(CodeError::Validation(report)) => {
                println!("  {label}: {} invalid code(s)", report.len());
                for code in report.codes() {
                    for v in report.violations(code) {
                        println!("    {code}: {v}");
                    }
                }
            }
            Err(e) => println!("  {label}: {e}"),
        }
    }
    println!();

    let codes = CountryCodes::bundled()?;

    // Example 3: Not-found lookups
    println!("--- Example 3: Unknown keys ---");
    for code in ["", "XX", "us", "ABCD"] {
        match codes.get_by_alpha2(code) {
            Some(c) => println!("  Found: {} ({})", c.name(), c.alpha2()),
            None => println!("  Not found: {code:?}"),
        }
    }
    let zero = codes.get_by_numeric(0).cloned().unwrap_or_default();
    println!("  numeric 0 -> {zero:?}");

    Ok(())
}
