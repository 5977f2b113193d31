#![warn(missing_docs)]
//! acbench Report - Result Output
//!
//! Generates various output formats:
//! - CSV (long format, one metric per row)
//! - Markdown (tables per metric, implementations × scenarios)
//! - JSON (machine-readable, full records)
//! - Human (terminal summary)

mod csv_report;
mod error;
mod format;
mod human;
mod json;
mod markdown;
mod meta;
mod output;
mod report;

pub use csv_report::generate_csv_report;
pub use error::ReportError;
pub use format::{format_bytes, format_ms, format_number};
pub use human::format_human_output;
pub use json::generate_json_report;
pub use markdown::generate_markdown_report;
pub use meta::{build_report_meta, system_info};
pub use output::{render, write_reports};
pub use report::{Report, ReportMeta, SystemInfo};

use serde::{Deserialize, Serialize};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// JSON with full records
    Json,
    /// Long-format CSV
    Csv,
    /// Markdown tables
    #[serde(alias = "md")]
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
