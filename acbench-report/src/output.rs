//! Report Files
//!
//! Every file format is written twice into the output directory: once under
//! a timestamped name and once as `*-latest`, overwriting the previous run.
//!
//! | Format | Timestamped | Latest |
//! |---|---|---|
//! | CSV | `raw-<ts>.csv` | `raw-latest.csv` |
//! | Markdown | `report-<ts>.md` | `report-latest.md` |
//! | JSON | `results-<ts>.json` | `results-latest.json` |

use crate::csv_report::generate_csv_report;
use crate::error::ReportError;
use crate::json::generate_json_report;
use crate::markdown::generate_markdown_report;
use crate::report::Report;
use crate::OutputFormat;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render `report` in one format
pub fn render(report: &Report, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Csv => generate_csv_report(&report.results),
        OutputFormat::Markdown => Ok(generate_markdown_report(report)),
        OutputFormat::Json => generate_json_report(report),
        OutputFormat::Human => Ok(crate::human::format_human_output(report)),
    }
}

fn file_stem_and_ext(format: OutputFormat) -> Option<(&'static str, &'static str)> {
    match format {
        OutputFormat::Csv => Some(("raw", "csv")),
        OutputFormat::Markdown => Some(("report", "md")),
        OutputFormat::Json => Some(("results", "json")),
        OutputFormat::Human => None,
    }
}

/// Write the file formats in `formats` to `dir`, creating it if needed
///
/// `Human` has no file form and is ignored. Returns the written paths,
/// timestamped file before its `-latest` copy.
pub fn write_reports(
    report: &Report,
    dir: &Path,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>, ReportError> {
    std::fs::create_dir_all(dir)?;
    let timestamp = report.meta.timestamp.format("%Y-%m-%dT%H-%M-%S").to_string();

    let mut written = Vec::new();
    for &format in formats {
        let Some((stem, ext)) = file_stem_and_ext(format) else {
            continue;
        };
        let content = render(report, format)?;
        for name in [format!("{stem}-{timestamp}.{ext}"), format!("{stem}-latest.{ext}")] {
            let path = dir.join(name);
            std::fs::write(&path, &content)?;
            written.push(path);
        }
        info!(format = ?format, dir = %dir.display(), "Report written");
    }
    Ok(written)
}
