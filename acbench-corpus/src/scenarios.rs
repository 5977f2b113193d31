//! Scenario Definitions
//!
//! Five workloads crossing pattern-set size with text size:
//!
//! | Scenario | Patterns | Text |
//! |---|---|---|
//! | `few-patterns-small-text` | 20 | ~10 KB |
//! | `few-patterns-large-text` | 20 | ~1 MB |
//! | `medium-balanced` | ~500 | ~100 KB |
//! | `many-patterns-small-text` | 5,000 | ~10 KB |
//! | `many-patterns-large-text` | 5,000 | ~1 MB |

use crate::error::CorpusError;
use crate::patterns::{MANY_PATTERNS_LIMIT, few_patterns, generate_many_patterns, medium_patterns};
use crate::text::{generate_text, load_large_text};
use acbench_core::Scenario;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scenario names in run order
pub const SCENARIO_NAMES: [&str; 5] = [
    "few-patterns-small-text",
    "few-patterns-large-text",
    "medium-balanced",
    "many-patterns-small-text",
    "many-patterns-large-text",
];

/// Text sizes and sources used to build the scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Real-world large text, synthesized when absent
    #[serde(default = "default_large_text_path")]
    pub large_text_path: Option<PathBuf>,
    /// Small text size in bytes
    #[serde(default = "default_small_text_bytes")]
    pub small_text_bytes: usize,
    /// Medium text size in bytes
    #[serde(default = "default_medium_text_bytes")]
    pub medium_text_bytes: usize,
    /// Synthetic large text size in bytes
    #[serde(default = "default_large_text_bytes")]
    pub large_text_bytes: usize,
    /// Size of the derived pattern set
    #[serde(default = "default_many_patterns")]
    pub many_patterns: usize,
    /// Seed for synthetic text
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            large_text_path: default_large_text_path(),
            small_text_bytes: default_small_text_bytes(),
            medium_text_bytes: default_medium_text_bytes(),
            large_text_bytes: default_large_text_bytes(),
            many_patterns: default_many_patterns(),
            seed: default_seed(),
        }
    }
}

fn default_large_text_path() -> Option<PathBuf> {
    Some(PathBuf::from("corpus/large.txt"))
}
fn default_small_text_bytes() -> usize {
    10 * 1024
}
fn default_medium_text_bytes() -> usize {
    100 * 1024
}
fn default_large_text_bytes() -> usize {
    1024 * 1024
}
fn default_many_patterns() -> usize {
    MANY_PATTERNS_LIMIT
}
fn default_seed() -> u64 {
    42
}

/// Build every scenario, in [`SCENARIO_NAMES`] order
///
/// Texts and pattern sets are generated once and shared between the
/// scenarios that use them.
pub fn load_scenarios(config: &CorpusConfig) -> Result<Vec<Scenario>, CorpusError> {
    let small = generate_text(config.small_text_bytes, config.seed);
    let medium = generate_text(config.medium_text_bytes, config.seed.wrapping_add(1));
    let large = load_large_text(
        config.large_text_path.as_deref(),
        config.large_text_bytes,
        config.seed.wrapping_add(2),
    )?;

    let few = few_patterns();
    let many = generate_many_patterns(config.many_patterns);

    Ok(vec![
        Scenario::new(
            SCENARIO_NAMES[0],
            format!("{} patterns, ~10 KB text, baseline sanity check", few.len()),
            few.clone(),
            [small.clone()],
        ),
        Scenario::new(
            SCENARIO_NAMES[1],
            format!("{} patterns, ~1 MB text, search scaling with text size", few.len()),
            few,
            [large.clone()],
        ),
        Scenario::new(
            SCENARIO_NAMES[2],
            "500 patterns, ~100 KB text, balanced real-world workload",
            medium_patterns(),
            [medium],
        ),
        Scenario::new(
            SCENARIO_NAMES[3],
            format!("{} patterns, ~10 KB text, compile-heavy", many.len()),
            many.clone(),
            [small],
        ),
        Scenario::new(
            SCENARIO_NAMES[4],
            format!("{} patterns, ~1 MB text, full stress test", many.len()),
            many,
            [large],
        ),
    ])
}
