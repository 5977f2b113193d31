//! Markdown Output
//!
//! One table per metric, implementations as rows and scenarios as columns.
//! A pair that failed or never ran shows `FAILED`.

use crate::format::{format_bytes, format_number};
use crate::report::Report;
use acbench_core::BenchmarkResult;
use std::fmt::Write;

/// Render the full Markdown report
pub fn generate_markdown_report(report: &Report) -> String {
    let mut out = String::new();
    let meta = &report.meta;

    out.push_str("# Aho-Corasick Benchmark Results\n\n");
    out.push_str("## System Information\n\n");
    out.push_str("| Property | Value |\n");
    out.push_str("| --- | --- |\n");
    let _ = writeln!(out, "| Date | {} |", meta.timestamp.to_rfc3339());
    let _ = writeln!(out, "| acbench | {} |", meta.version);
    if let Some(commit) = &meta.git_commit {
        let _ = writeln!(out, "| Commit | {} |", commit);
    }
    let _ = writeln!(out, "| Platform | {} {} |", meta.system.os, meta.system.arch);
    let _ = writeln!(out, "| Target | {} |", meta.system.target);
    let _ = writeln!(out, "| CPU | {} |", meta.system.cpu);
    let _ = writeln!(out, "| CPU Cores | {} |", meta.system.cpu_cores);
    let _ = writeln!(out, "| Memory | {:.1} GB |", meta.system.memory_gb);
    let _ = writeln!(
        out,
        "| Iterations | {} compile, {} warm-up, {} search |",
        meta.config.compile_iterations,
        meta.config.search_warmup_iterations,
        meta.config.search_iterations
    );
    out.push('\n');

    metric_table(&mut out, report, "Search Throughput (ops/sec, higher is better)", |r| {
        format_number(r.search_ops_per_second)
    });
    metric_table(&mut out, report, "Search Latency (median ms, lower is better)", |r| {
        format!("{:.3}", r.search_time_median_ms)
    });
    metric_table(&mut out, report, "Compile Time (median ms, lower is better)", |r| {
        format!("{:.3}", r.compile_time_median_ms)
    });
    metric_table(&mut out, report, "Memory Overhead (bytes, lower is better)", |r| {
        format_bytes(r.memory_delta_bytes)
    });
    metric_table(&mut out, report, "Match Counts (for cross-validation)", |r| {
        format_number(r.total_matches_found as f64)
    });

    if !report.divergences.is_empty() {
        out.push_str("## Match Count Divergences\n\n");
        out.push_str(
            "Engines differ in how they report overlapping and nested occurrences, \
             so a divergence is a diagnostic, not a failure.\n\n",
        );
        for divergence in &report.divergences {
            let counts: Vec<String> = divergence
                .counts
                .iter()
                .map(|(name, count)| format!("{name}: {count}"))
                .collect();
            let _ = writeln!(out, "- **{}**: {}", divergence.scenario, counts.join(", "));
        }
        out.push('\n');
    }

    let failures: Vec<&BenchmarkResult> = report.results.iter().filter(|r| !r.is_ok()).collect();
    if !failures.is_empty() {
        out.push_str("## Failures\n\n");
        for r in failures {
            let _ = writeln!(
                out,
                "- {} / {}: {}",
                r.implementation,
                r.scenario,
                r.error.as_deref().unwrap_or("unknown")
            );
        }
        out.push('\n');
    }

    out
}

fn metric_table(
    out: &mut String,
    report: &Report,
    title: &str,
    cell: impl Fn(&BenchmarkResult) -> String,
) {
    let scenarios = report.scenarios();

    let _ = writeln!(out, "## {}\n", title);
    let _ = writeln!(out, "| Implementation | {} |", scenarios.join(" | "));
    let _ = writeln!(
        out,
        "| --- | {} |",
        vec!["---:"; scenarios.len()].join(" | ")
    );

    for implementation in report.implementations() {
        let cells: Vec<String> = scenarios
            .iter()
            .map(|scenario| match report.find(implementation, scenario) {
                Some(r) if r.is_ok() => cell(r),
                _ => "FAILED".to_string(),
            })
            .collect();
        let _ = writeln!(out, "| {} | {} |", implementation, cells.join(" | "));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample;

    #[test]
    fn test_sections_present() {
        let md = generate_markdown_report(&sample());
        assert!(md.starts_with("# Aho-Corasick Benchmark Results\n"));
        for heading in [
            "## System Information",
            "## Search Throughput (ops/sec, higher is better)",
            "## Search Latency (median ms, lower is better)",
            "## Compile Time (median ms, lower is better)",
            "## Memory Overhead (bytes, lower is better)",
            "## Match Counts (for cross-validation)",
            "## Match Count Divergences",
            "## Failures",
        ] {
            assert!(md.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_system_information_rows() {
        let md = generate_markdown_report(&sample());
        assert!(md.contains("| Date | 2026-03-14T15:09:26+00:00 |"));
        assert!(md.contains("| Platform | linux x86_64 |\n| Target | x86_64-unknown-linux-gnu |"));
        assert!(md.contains("| CPU | Test CPU |"));
        assert!(md.contains("| CPU Cores | 8 |"));
    }

    #[test]
    fn test_table_layout() {
        let md = generate_markdown_report(&sample());
        assert!(md.contains("| Implementation | small | large |\n| --- | ---: | ---: |\n"));
        assert!(md.contains("| engine-a | 2.50K | 2.50K |"));
        assert!(md.contains("| engine-b | FAILED | 2.50K |"));
        assert!(md.contains("| engine-a | 2.0 KB | 2.0 KB |"));
        assert!(md.contains("| engine-a | 10.00 | 120.00 |"));
    }

    #[test]
    fn test_divergence_listing() {
        let md = generate_markdown_report(&sample());
        assert!(md.contains("- **large**: engine-a: 120, engine-b: 118"));
    }
}
