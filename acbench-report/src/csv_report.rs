//! CSV Output
//!
//! Long format, one metric per row:
//!
//! ```text
//! implementation,scenario,metric,value,unit,status
//! ```
//!
//! A failed record contributes a single `error` row carrying its message.

use crate::error::ReportError;
use acbench_core::BenchmarkResult;
use csv::{Terminator, WriterBuilder};

const HEADER: [&str; 6] = ["implementation", "scenario", "metric", "value", "unit", "status"];

/// Render results as long-format CSV
pub fn generate_csv_report(results: &[BenchmarkResult]) -> Result<String, ReportError> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(HEADER)?;

    for r in results {
        let status = r.status.to_string();
        let mut row = |metric: &str, value: String, unit: &str| {
            wtr.write_record([
                r.implementation.as_str(),
                r.scenario.as_str(),
                metric,
                value.as_str(),
                unit,
                status.as_str(),
            ])
        };

        if !r.is_ok() {
            row(
                "error",
                r.error.clone().unwrap_or_else(|| "unknown".to_string()),
                "text",
            )?;
            continue;
        }

        row("compile_time_median_ms", format!("{:.4}", r.compile_time_median_ms), "ms")?;
        row("search_ops_per_sec", format!("{:.2}", r.search_ops_per_second), "ops/sec")?;
        row("search_time_median_ms", format!("{:.4}", r.search_time_median_ms), "ms")?;
        row("search_time_p95_ms", format!("{:.4}", r.search_time_p95_ms), "ms")?;
        row("search_time_p99_ms", format!("{:.4}", r.search_time_p99_ms), "ms")?;
        row("total_matches", r.total_matches_found.to_string(), "count")?;
        row("memory_delta_bytes", r.memory_delta_bytes.to_string(), "bytes")?;
    }

    let bytes = wtr.into_inner().map_err(|e| ReportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::ok;

    #[test]
    fn test_ok_record_rows() {
        let csv = generate_csv_report(&[ok("engine-a", "small", 10)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "implementation,scenario,metric,value,unit,status");
        assert_eq!(lines.len(), 1 + 7);
        assert_eq!(lines[1], "engine-a,small,compile_time_median_ms,1.2500,ms,ok");
        assert_eq!(lines[2], "engine-a,small,search_ops_per_sec,2500.00,ops/sec,ok");
        assert_eq!(lines[6], "engine-a,small,total_matches,10,count,ok");
        assert_eq!(lines[7], "engine-a,small,memory_delta_bytes,2048,bytes,ok");
    }

    #[test]
    fn test_failed_record_single_quoted_row() {
        let failed = BenchmarkResult::failed("engine (x)", "small", "bad, \"quoted\" pattern");
        let csv = generate_csv_report(&[failed]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "engine (x),small,error,\"bad, \"\"quoted\"\" pattern\",text,failed"
        );
    }

    #[test]
    fn test_parses_back() {
        let csv = generate_csv_report(&[ok("a,b", "s", 3)]).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let first = reader.records().next().unwrap().unwrap();
        assert_eq!(&first[0], "a,b");
        assert_eq!(&first[2], "compile_time_median_ms");
    }
}
