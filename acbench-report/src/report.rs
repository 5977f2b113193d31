//! Report Data Structures

use crate::meta::build_report_meta;
use acbench_core::{BenchmarkResult, Divergence, RunOutcome, RunnerConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub results: Vec<BenchmarkResult>,
    pub divergences: Vec<Divergence>,
}

impl Report {
    /// Wrap a finished run with freshly collected metadata
    pub fn new(outcome: RunOutcome, config: &RunnerConfig) -> Self {
        Self {
            meta: build_report_meta(config),
            results: outcome.results,
            divergences: outcome.divergences,
        }
    }

    /// Scenario names in first-seen order
    pub fn scenarios(&self) -> Vec<&str> {
        unique_in_order(self.results.iter().map(|r| r.scenario.as_str()))
    }

    /// Implementation names in first-seen order
    pub fn implementations(&self) -> Vec<&str> {
        unique_in_order(self.results.iter().map(|r| r.implementation.as_str()))
    }

    /// Record for one (implementation, scenario) pair
    pub fn find(&self, implementation: &str, scenario: &str) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.implementation == implementation && r.scenario == scenario)
    }

    /// Number of failed records
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_ok()).count()
    }
}

fn unique_in_order<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub git_commit: Option<String>,
    pub git_branch: Option<String>,
    pub system: SystemInfo,
    pub config: RunnerConfig,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    /// rustc target triple the binary was built for
    #[serde(default)]
    pub target: String,
    pub cpu: String,
    pub cpu_cores: u32,
    pub memory_gb: f64,
}
