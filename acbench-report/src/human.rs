//! Terminal Output
//!
//! Results grouped by scenario with status icons (✓/✗), followed by any
//! divergences and a one-line summary.

use crate::format::{format_bytes, format_ms, format_number};
use crate::report::Report;

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("acbench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    for scenario in report.scenarios() {
        output.push_str(&format!("Scenario: {}\n", scenario));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for r in report.results.iter().filter(|r| r.scenario == scenario) {
            if !r.is_ok() {
                output.push_str(&format!("  ✗ {}\n", r.implementation));
                output.push_str(&format!(
                    "      error: {}\n",
                    r.error.as_deref().unwrap_or("unknown")
                ));
                continue;
            }

            output.push_str(&format!("  ✓ {}\n", r.implementation));
            output.push_str(&format!(
                "      search: {} ops/sec  median: {}  p95: {}  p99: {}\n",
                format_number(r.search_ops_per_second),
                format_ms(r.search_time_median_ms),
                format_ms(r.search_time_p95_ms),
                format_ms(r.search_time_p99_ms),
            ));
            output.push_str(&format!(
                "      compile: {}  memory: {}  matches: {}\n",
                format_ms(r.compile_time_median_ms),
                format_bytes(r.memory_delta_bytes),
                r.total_matches_found,
            ));
        }
        output.push('\n');
    }

    if !report.divergences.is_empty() {
        output.push_str("Match count divergences\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for divergence in &report.divergences {
            output.push_str(&format!("  {}\n", divergence.scenario));
            for (name, count) in &divergence.counts {
                output.push_str(&format!("      {:<40} {}\n", name, count));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Summary: {} pairs, {} ok, {} failed, {} divergent scenarios\n",
        report.results.len(),
        report.results.len() - report.failed_count(),
        report.failed_count(),
        report.divergences.len(),
    ));

    output
}
