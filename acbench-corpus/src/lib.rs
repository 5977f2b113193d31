#![warn(missing_docs)]
//! acbench Corpus
//!
//! Workload data for the benchmark: bundled word lists, a derived
//! 5,000-pattern set, seeded synthetic prose and the five scenarios that
//! combine them. A real-world large text can be fetched with
//! [`setup_large_corpus`].

mod download;
mod error;
mod patterns;
mod scenarios;
mod text;

pub use download::{
    GUTENBERG_URL, LARGE_CORPUS_BYTES, SetupOutcome, cap_corpus, prepare_large_corpus,
    setup_large_corpus, strip_gutenberg_markers, write_large_corpus,
};
pub use error::CorpusError;
pub use patterns::{
    MANY_PATTERNS_LIMIT, extra_words, few_patterns, generate_many_patterns, medium_patterns,
    prefixes, suffixes,
};
pub use scenarios::{CorpusConfig, SCENARIO_NAMES, load_scenarios};
pub use text::{generate_text, load_large_text, truncate_to_char_boundary};
