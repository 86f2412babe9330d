//! CLI tool to generate sample data and verification report files.
//!
//! Produces:
//! - `output/sample_operations.json` — sample operations (size from `NUMERIC_SAMPLE_SIZE`)
//! - `output/verification_report.json` — evaluation counts plus property checks

use numeric_utilities::config::EngineConfig;
use numeric_utilities::data::generate_sample_operations;
use numeric_utilities::engine::Evaluator;
use numeric_utilities::report::generate_report;
use numeric_utilities::telemetry;

fn main() {
    telemetry::init();
    let config = EngineConfig::from_env().expect("Invalid engine configuration");

    // Generate sample operations
    let operations = generate_sample_operations(config.sample_size);
    let ops_json =
        serde_json::to_string_pretty(&operations).expect("Failed to serialize operations");
    std::fs::create_dir_all("output").expect("Failed to create output directory");
    std::fs::write("output/sample_operations.json", &ops_json).expect("Failed to write operations");
    println!("Wrote output/sample_operations.json ({} operations)", operations.len());

    // Generate verification report
    let evaluator = Evaluator::new(config);
    let report = generate_report(&operations, &evaluator);
    let report_json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
    std::fs::write("output/verification_report.json", &report_json)
        .expect("Failed to write report");

    // Print summary
    println!("Wrote output/verification_report.json");
    println!();
    println!("=== VERIFICATION REPORT SUMMARY ===");
    println!("Total Operations: {}", report.total_operations);
    println!("  Evaluated:        {}", report.evaluated);
    println!("  Rejected:         {}", report.rejected);
    println!();
    println!("--- By Operation ---");
    for (name, summary) in &report.by_operation {
        println!("  {:<10} {} evaluated, {} rejected", name, summary.evaluated, summary.rejected);
    }
    println!();
    println!("--- Properties ---");
    for check in &report.properties {
        let status = if check.passed() { "PASS" } else { "FAIL" };
        println!(
            "  [{}] {} ({} cases, {} failures)",
            status, check.name, check.cases, check.failures
        );
        if let Some(example) = &check.counterexample {
            println!("         first counterexample: {}", example);
        }
    }

    if !report.all_passed() {
        std::process::exit(1);
    }
}
