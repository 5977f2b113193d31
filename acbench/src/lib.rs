#![warn(missing_docs)]
//! # acbench
//!
//! Benchmark harness for multi-pattern (Aho-Corasick) string matching engines.
//!
//! - **Adapter contract**: every engine is wrapped so it compiles, searches and
//!   reports matches in one canonical shape, whatever its native API returns
//! - **Fixed protocol**: warm pass, compile sampling, memory delta, search
//!   warm-up and sampling, run strictly one pair at a time
//! - **Robust statistics**: MAD outlier rejection, median and tail percentiles
//! - **Cross-validation**: match-count disagreements between engines are
//!   reported as divergences, never as failures
//! - **Reports**: long-format CSV, Markdown tables, JSON and a terminal summary
//!
//! ## Quick Start
//!
//! ```ignore
//! use acbench::{Runner, RunnerConfig, Scenario, load_adapters};
//!
//! let scenario = Scenario::new("demo", "four words", ["he", "she", "his", "hers"], ["ahishers"]);
//! let mut adapters = load_adapters(None);
//! let outcome = Runner::new(RunnerConfig::quick()).run(&mut adapters, &[scenario]);
//! for result in &outcome.results {
//!     println!("{}: {} matches", result.implementation, result.total_matches_found);
//! }
//! ```

// Re-export core types
pub use acbench_core::{
    AdapterError, AllocatorProbe, BenchmarkResult, BenchmarkStatus, ConfigError, Divergence,
    DynMatcher, HeapProbe, LoadError, Match, MatcherAdapter, NullProbe, RunOutcome, Runner,
    RunnerConfig, Scenario, TrackingAllocator, canonicalize, cross_validate, current_allocation,
    reset_allocation_counter, run_benchmarks,
};

// Re-export adapters
pub use acbench_adapters::{
    AdapterDef, AhoCorasickLeftmostLongest, AhoCorasickOverlapping, KeywordSet, load_adapter,
    load_adapters, registered_adapters,
};
#[cfg(feature = "daachorse")]
pub use acbench_adapters::{DaachorseCharwiseLeftmostLongest, DaachorseOverlapping};

// Re-export corpus
pub use acbench_corpus::{
    CorpusConfig, GUTENBERG_URL, SCENARIO_NAMES, SetupOutcome, load_scenarios, setup_large_corpus,
};

// Re-export reports
pub use acbench_report::{
    OutputFormat, Report, generate_csv_report, generate_json_report, generate_markdown_report,
    write_reports,
};

// Re-export stats
pub use acbench_stats::{TimingSummary, filter_outliers, median, percentile, summarize_timings};

/// Run the acbench CLI harness.
///
/// Call this from a binary's `main()` after installing the tracking allocator:
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: acbench::TrackingAllocator = acbench::TrackingAllocator;
///
/// fn main() -> anyhow::Result<()> {
///     acbench::run()
/// }
/// ```
pub use acbench_cli::run;
