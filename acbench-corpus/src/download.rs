//! Real-World Corpus Setup
//!
//! Fetches a public-domain novel from Project Gutenberg to stand in for the
//! large text. The licence header and footer are stripped, and the body is
//! capped at [`LARGE_CORPUS_BYTES`], ending on a sentence when one closes
//! within the last tenth of the cap.

use crate::error::CorpusError;
use crate::text::truncate_to_char_boundary;
use reqwest::blocking::Client;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// War and Peace, plain text UTF-8
pub const GUTENBERG_URL: &str = "https://www.gutenberg.org/cache/epub/2600/pg2600.txt";

/// Size cap for the downloaded corpus (1 MiB)
pub const LARGE_CORPUS_BYTES: usize = 1024 * 1024;

const START_MARKER: &str = "*** START OF THE PROJECT GUTENBERG EBOOK";
const END_MARKER: &str = "*** END OF THE PROJECT GUTENBERG EBOOK";
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// What [`setup_large_corpus`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The destination already existed and was left alone
    AlreadyPresent,
    /// A fresh corpus of `bytes` bytes was written
    Written {
        /// Size of the written file
        bytes: usize,
    },
}

/// Text between the Gutenberg START and END markers
///
/// The line carrying the START marker is dropped. Text without both markers
/// is returned unchanged.
pub fn strip_gutenberg_markers(text: &str) -> &str {
    let (Some(start), Some(end)) = (text.find(START_MARKER), text.find(END_MARKER)) else {
        return text;
    };
    let body_start = text[start..]
        .find('\n')
        .map_or(text.len(), |newline| start + newline + 1);
    if body_start > end {
        return text;
    }
    &text[body_start..end]
}

/// Cap `text` at `max_bytes`, backing up to the last `.` past 90% of the cap
pub fn cap_corpus(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let capped = truncate_to_char_boundary(text, max_bytes);
    match capped.rfind('.') {
        Some(dot) if dot * 10 > max_bytes * 9 => &capped[..=dot],
        _ => capped,
    }
}

/// Strip the Gutenberg envelope, then cap at `max_bytes`
pub fn prepare_large_corpus(raw: &str, max_bytes: usize) -> &str {
    cap_corpus(strip_gutenberg_markers(raw), max_bytes)
}

/// Write the prepared form of `raw` to `dest`, creating parent directories
pub fn write_large_corpus(dest: &Path, raw: &str) -> Result<usize, CorpusError> {
    let text = prepare_large_corpus(raw, LARGE_CORPUS_BYTES);
    let write_err = |source: std::io::Error| CorpusError::Write {
        path: dest.to_path_buf(),
        source,
    };
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(dest, text).map_err(write_err)?;
    Ok(text.len())
}

/// Download `url` into `dest` unless it already exists (or `force` is set)
pub fn setup_large_corpus(url: &str, dest: &Path, force: bool) -> Result<SetupOutcome, CorpusError> {
    if dest.exists() && !force {
        info!(path = %dest.display(), "Large corpus already present, skipping download");
        return Ok(SetupOutcome::AlreadyPresent);
    }

    let download_err = |message: String| CorpusError::Download {
        url: url.to_string(),
        message,
    };

    info!(url, "Downloading large corpus");
    let client = Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|e| download_err(e.to_string()))?;
    let response = client
        .get(url)
        .send()
        .map_err(|e| download_err(e.to_string()))?;
    if !response.status().is_success() {
        return Err(download_err(format!("HTTP {}", response.status())));
    }
    let raw = response.text().map_err(|e| download_err(e.to_string()))?;

    let bytes = write_large_corpus(dest, &raw)?;
    info!(path = %dest.display(), kib = bytes as f64 / 1024.0, "Saved large corpus");
    Ok(SetupOutcome::Written { bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gutenberg(body: &str) -> String {
        format!(
            "The Project Gutenberg eBook of War and Peace\r\n\
             *** START OF THE PROJECT GUTENBERG EBOOK WAR AND PEACE ***\r\n\
             {body}\
             *** END OF THE PROJECT GUTENBERG EBOOK WAR AND PEACE ***\r\n\
             licence text"
        )
    }

    #[test]
    fn test_strip_markers() {
        let raw = gutenberg("Well, Prince, so Genoa and Lucca are now just family estates.\r\n");
        assert_eq!(
            strip_gutenberg_markers(&raw),
            "Well, Prince, so Genoa and Lucca are now just family estates.\r\n"
        );
    }

    #[test]
    fn test_strip_without_markers_is_identity() {
        let plain = "no envelope here";
        assert_eq!(strip_gutenberg_markers(plain), plain);

        let only_start = "*** START OF THE PROJECT GUTENBERG EBOOK X ***\nbody";
        assert_eq!(strip_gutenberg_markers(only_start), only_start);
    }

    #[test]
    fn test_cap_backs_up_to_late_period() {
        // period at byte 94 of a 100 byte cap: past 90%, so the cut lands there
        let text = format!("{}.{}", "a".repeat(94), "b".repeat(50));
        let capped = cap_corpus(&text, 100);
        assert_eq!(capped.len(), 95);
        assert!(capped.ends_with('.'));
    }

    #[test]
    fn test_cap_ignores_early_period() {
        let text = format!("{}.{}", "a".repeat(50), "b".repeat(100));
        assert_eq!(cap_corpus(&text, 100).len(), 100);
    }

    #[test]
    fn test_cap_short_text_untouched() {
        assert_eq!(cap_corpus("short.", 100), "short.");
    }

    #[test]
    fn test_cap_respects_char_boundary() {
        let text = "é".repeat(60);
        let capped = cap_corpus(&text, 101);
        assert_eq!(capped.len(), 100);
    }

    #[test]
    fn test_write_large_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("corpus").join("large.txt");
        let body = "It was in July, 1805. ".repeat(80_000);

        let bytes = write_large_corpus(&dest, &gutenberg(&body)).unwrap();
        let written = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(written.len(), bytes);
        assert!(bytes <= LARGE_CORPUS_BYTES);
        assert!(bytes * 10 > LARGE_CORPUS_BYTES * 9);
        assert!(written.starts_with("It was in July"));
        assert!(written.ends_with('.'));
        assert!(!written.contains("PROJECT GUTENBERG"));
    }

    #[test]
    fn test_existing_corpus_not_downloaded() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("large.txt");
        std::fs::write(&dest, "kept").unwrap();

        // Unroutable URL: reaching the network would fail the call
        let outcome = setup_large_corpus("http://invalid.invalid/", &dest, false).unwrap();
        assert_eq!(outcome, SetupOutcome::AlreadyPresent);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "kept");
    }
}
