//! Corpus errors

use std::path::PathBuf;
use thiserror::Error;

/// Failure while preparing scenario data
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A corpus file exists but could not be read
    #[error("failed to read corpus file {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A corpus file could not be written
    #[error("failed to write corpus file {}: {source}", path.display())]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Fetching a remote corpus failed
    #[error("failed to download {url}: {message}")]
    Download {
        /// Requested URL
        url: String,
        /// Transport or HTTP status error
        message: String,
    },
}
