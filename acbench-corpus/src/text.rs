//! Text Generation
//!
//! Synthetic prose is built from bundled paragraphs chosen by a seeded RNG,
//! joined by blank lines and cut to the requested byte length.

use crate::error::CorpusError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{info, warn};

const PROSE: &str = include_str!("../data/prose.txt");

fn paragraphs() -> Vec<&'static str> {
    PROSE
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Longest prefix of `text` no longer than `max_bytes` that ends on a char boundary
pub fn truncate_to_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Deterministic prose of at most `target_bytes` bytes
///
/// The same `(target_bytes, seed)` always yields the same text.
pub fn generate_text(target_bytes: usize, seed: u64) -> String {
    let paragraphs = paragraphs();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = String::with_capacity(target_bytes + 1024);

    while text.len() < target_bytes {
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(paragraphs[rng.gen_range(0..paragraphs.len())]);
    }

    let end = truncate_to_char_boundary(&text, target_bytes).len();
    text.truncate(end);
    text
}

/// Read the large text from `path`, falling back to synthetic prose
///
/// A missing file is not an error: the fallback is logged. A file that
/// exists but cannot be read is.
pub fn load_large_text(
    path: Option<&Path>,
    target_bytes: usize,
    seed: u64,
) -> Result<String, CorpusError> {
    if let Some(path) = path {
        if path.exists() {
            let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), bytes = text.len(), "Loaded large text");
            return Ok(text);
        }
        warn!(
            path = %path.display(),
            "Large text not found, generating synthetic text (run `acbench setup-corpus` to fetch one)"
        );
    }
    Ok(generate_text(target_bytes, seed))
}
