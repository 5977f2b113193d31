//! Benchmark Runner
//!
//! Drives every (adapter, scenario) pair through the measurement protocol,
//! strictly one pair at a time so timings never share the CPU.
//!
//! ## Protocol (per pair)
//!
//! ```text
//!  1. correctness pass   compile, search every text, count, dispose (untimed)
//!  2. compile sampling   N × { dispose, collect hint, time compile }, dispose
//!  3. memory sampling    collect, read heap, compile, collect, read heap
//!  4. search warm-up     M × raw pass over all texts (untimed)
//!  5. search sampling    K × timed raw pass over all texts
//!  6. dispose
//!  7. reduction          MAD filter, median, p95/p99, ops/s
//! ```
//!
//! Any error or panic in steps 1-6 turns the pair into a `failed` record and
//! the run continues with the next adapter.

use crate::config::RunnerConfig;
use crate::error::AdapterError;
use crate::matcher::DynMatcher;
use crate::measure::time_ms;
use crate::probe::{AllocatorProbe, HeapProbe};
use crate::result::{BenchmarkResult, BenchmarkStatus};
use crate::scenario::Scenario;
use crate::validation::{Divergence, cross_validate};
use acbench_stats::summarize_timings;
use indicatif::{ProgressBar, ProgressStyle};
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{debug, info, warn};

/// Rejected-sample share above which a pair's timings are flagged as noisy
const NOISY_OUTLIER_PCT: f64 = 10.0;

/// Everything a run produces
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// One record per pair, scenario-major, adapter-minor
    pub results: Vec<BenchmarkResult>,
    /// Match-count disagreements, one per affected scenario
    pub divergences: Vec<Divergence>,
}

/// Sequential measurement driver
pub struct Runner {
    config: RunnerConfig,
    probe: Box<dyn HeapProbe>,
    progress: bool,
}

impl Runner {
    /// Runner reading heap usage from the tracking allocator
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            probe: Box::new(AllocatorProbe),
            progress: false,
        }
    }

    /// Replace the heap probe used by the memory phase
    pub fn with_probe(mut self, probe: impl HeapProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Draw a progress bar on stderr while running
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run the full adapter × scenario matrix
    pub fn run(&self, adapters: &mut [Box<dyn DynMatcher>], scenarios: &[Scenario]) -> RunOutcome {
        let total_pairs = adapters.len() * scenarios.len();
        let pb = self.progress_bar(total_pairs as u64);

        let mut results = Vec::with_capacity(total_pairs);
        let mut divergences = Vec::new();

        for scenario in scenarios {
            info!(
                scenario = %scenario.name,
                patterns = scenario.patterns.len(),
                texts = scenario.texts.len(),
                text_bytes = scenario.total_text_bytes(),
                "{}",
                scenario.description
            );

            let mut match_counts = Vec::with_capacity(adapters.len());

            for adapter in adapters.iter_mut() {
                pb.set_message(format!("{} / {}", scenario.name, adapter.name()));
                let result = self.run_pair(adapter.as_mut(), scenario);

                match result.status {
                    BenchmarkStatus::Ok => {
                        info!(
                            adapter = %result.implementation,
                            ops_per_sec = result.search_ops_per_second,
                            compile_ms = result.compile_time_median_ms,
                            memory_bytes = result.memory_delta_bytes,
                            matches = result.total_matches_found,
                            "pair complete"
                        );
                        match_counts
                            .push((result.implementation.clone(), result.total_matches_found));
                    }
                    BenchmarkStatus::Failed => {
                        warn!(
                            adapter = %result.implementation,
                            scenario = %result.scenario,
                            error = result.error.as_deref().unwrap_or("unknown"),
                            "pair failed"
                        );
                    }
                }

                results.push(result);
                pb.inc(1);
            }

            if let Some(divergence) = cross_validate(&scenario.name, &match_counts) {
                divergences.push(divergence);
            }
        }

        pb.finish_and_clear();
        RunOutcome {
            results,
            divergences,
        }
    }

    /// Measure one pair, converting errors and panics into a failed record
    pub fn run_pair(&self, adapter: &mut dyn DynMatcher, scenario: &Scenario) -> BenchmarkResult {
        let name = adapter.name().to_string();
        let outcome = catch_unwind(AssertUnwindSafe(|| self.measure_pair(adapter, scenario)));

        let message = match outcome {
            Ok(Ok(result)) => return result,
            Ok(Err(err)) => err.to_string(),
            Err(panic) => {
                if let Some(s) = panic.downcast_ref::<&str>() {
                    format!("{name} panicked: {s}")
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    format!("{name} panicked: {s}")
                } else {
                    format!("{name} panicked")
                }
            }
        };

        // The engine is never retained past its pair
        let _ = catch_unwind(AssertUnwindSafe(|| adapter.dispose()));
        BenchmarkResult::failed(name, scenario.name.clone(), message)
    }

    fn measure_pair(
        &self,
        adapter: &mut dyn DynMatcher,
        scenario: &Scenario,
    ) -> Result<BenchmarkResult, AdapterError> {
        let patterns = &scenario.patterns;
        let texts = &scenario.texts;
        let cfg = &self.config;

        debug!(adapter = adapter.name(), "correctness pass");
        adapter.compile(patterns)?;
        let mut total_matches_found = 0u64;
        for text in texts {
            total_matches_found += adapter.search(text)?.len() as u64;
        }
        adapter.dispose();

        debug!(adapter = adapter.name(), iterations = cfg.compile_iterations, "compile sampling");
        let mut compile_time_samples = Vec::with_capacity(cfg.compile_iterations);
        for _ in 0..cfg.compile_iterations {
            adapter.dispose();
            self.probe.collect();
            let (compiled, elapsed) = time_ms(|| adapter.compile(patterns));
            compiled?;
            compile_time_samples.push(elapsed);
        }
        adapter.dispose();

        debug!(adapter = adapter.name(), "memory sampling");
        self.probe.collect();
        let heap_before = self.probe.heap_used();
        adapter.compile(patterns)?;
        self.probe.collect();
        let heap_after = self.probe.heap_used();
        let memory_delta_bytes = heap_after.saturating_sub(heap_before);

        debug!(adapter = adapter.name(), iterations = cfg.search_warmup_iterations, "search warm-up");
        for _ in 0..cfg.search_warmup_iterations {
            raw_pass(adapter, texts)?;
        }

        debug!(adapter = adapter.name(), iterations = cfg.search_iterations, "search sampling");
        let mut search_time_samples = Vec::with_capacity(cfg.search_iterations);
        for _ in 0..cfg.search_iterations {
            let (searched, elapsed) = time_ms(|| raw_pass(adapter, texts));
            searched?;
            search_time_samples.push(elapsed);
        }

        adapter.dispose();

        let compile = summarize_timings(&compile_time_samples, cfg.outlier_factor);
        let search = summarize_timings(&search_time_samples, cfg.outlier_factor);
        if search.rejected > 0 || compile.rejected > 0 {
            debug!(
                adapter = adapter.name(),
                compile_rejected = compile.rejected,
                search_rejected = search.rejected,
                "outliers rejected"
            );
        }
        if search.is_noisy(NOISY_OUTLIER_PCT) || compile.is_noisy(NOISY_OUTLIER_PCT) {
            debug!(
                adapter = adapter.name(),
                scenario = %scenario.name,
                compile_outlier_pct = compile.outlier_pct,
                search_outlier_pct = search.outlier_pct,
                "noisy samples; consider more iterations or a quieter machine"
            );
        }

        Ok(BenchmarkResult {
            implementation: adapter.name().to_string(),
            scenario: scenario.name.clone(),
            status: BenchmarkStatus::Ok,
            error: None,
            compile_time_median_ms: compile.median_ms,
            compile_time_samples,
            search_ops_per_second: search.ops_per_second,
            search_time_median_ms: search.median_ms,
            search_time_samples,
            search_time_p95_ms: search.p95_ms,
            search_time_p99_ms: search.p99_ms,
            total_matches_found,
            memory_delta_bytes,
        })
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

/// One full pass over every text through the raw entry point
#[inline]
fn raw_pass(adapter: &dyn DynMatcher, texts: &[String]) -> Result<(), AdapterError> {
    for text in texts {
        adapter.search_raw_discard(text)?;
    }
    Ok(())
}

/// Run every adapter against every scenario with the default heap probe
///
/// Records are ordered scenario-major, adapter-minor.
pub fn run_benchmarks(
    adapters: &mut [Box<dyn DynMatcher>],
    scenarios: &[Scenario],
    config: &RunnerConfig,
) -> Vec<BenchmarkResult> {
    Runner::new(config.clone()).run(adapters, scenarios).results
}
