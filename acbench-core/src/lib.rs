#![warn(missing_docs)]
//! acbench Core - Benchmark Harness
//!
//! This crate provides the measurement side of acbench:
//! - `MatcherAdapter` contract normalizing heterogeneous matching engines
//! - `Runner` driving every (adapter, scenario) pair through a fixed protocol
//! - Cross-validation of match counts between engines
//! - `TrackingAllocator` and `HeapProbe` for compile-time memory deltas

mod allocator;
mod config;
mod error;
mod matcher;
mod measure;
mod probe;
mod result;
mod runner;
mod scenario;
mod validation;

pub use allocator::{
    TrackingAllocator, current_allocation, live_bytes, reset_allocation_counter, tracking_active,
};
pub use config::RunnerConfig;
pub use error::{AdapterError, ConfigError, LoadError};
pub use matcher::{DynMatcher, Match, MatcherAdapter, canonicalize};
pub use measure::Timer;
pub use probe::{AllocatorProbe, HeapProbe, NullProbe};
pub use result::{BenchmarkResult, BenchmarkStatus};
pub use runner::{RunOutcome, Runner, run_benchmarks};
pub use scenario::Scenario;
pub use validation::{Divergence, cross_validate};
