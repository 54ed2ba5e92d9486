use crate::support::{print_json_or_exit, read_json_file_or_exit};
use docsite_kernel::aggregate_records;
use serde_json::Value;

pub fn run(results_path: String, json_output: bool) {
    let records: Vec<Value> = read_json_file_or_exit(&results_path, "search results");
    let aggregation = aggregate_records(records);

    if json_output {
        print_json_or_exit(&aggregation, "search-aggregate");
        return;
    }

    println!("docsite search-aggregate");
    println!("  Results path: {results_path}");
    println!("  Ranked: {}", aggregation.ranked.len());
    println!("  Skipped: {}", aggregation.warning_count());
    for group in &aggregation.grouped {
        println!("  {} ({})", group.category, group.results.len());
        for result in &group.results {
            println!(
                "    {:>8.3}  {}  {}",
                result.score(),
                result.meta().title(),
                result.url()
            );
        }
    }
    for warning in &aggregation.warnings {
        println!("  WARN {}", warning.message);
    }
}
