//! Report errors

use thiserror::Error;

/// Failure while rendering or writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem or writer failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8
    #[error("invalid UTF-8 in rendered report: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
