use crate::support::{print_json_or_exit, read_json_file_or_exit};
use docsite_kernel::{NavCheckReport, NavJson, NavTree, check_nav};

fn print_report(report: &NavCheckReport) {
    println!(
        "[nav-check] {} (nodes={}, errors={}, warnings={})",
        if report.accepted() { "OK" } else { "FAIL" },
        report.summary.node_count,
        report.summary.error_count,
        report.summary.warning_count
    );
    for finding in &report.errors {
        println!("  - {} {} ({})", finding.url, finding.class, finding.message);
    }
    for finding in &report.warnings {
        println!(
            "  - WARN {} {} ({})",
            finding.url, finding.class, finding.message
        );
    }
}

pub fn run(nav_path: String, json_output: bool) {
    let nav: NavJson = read_json_file_or_exit(&nav_path, "nav");
    let report = check_nav(&NavTree::from_json(&nav));

    if json_output {
        print_json_or_exit(&report, "nav-check");
    } else {
        print_report(&report);
    }

    if !report.accepted() {
        std::process::exit(1);
    }
}
