//! Benchmark result records

use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of one (adapter, scenario) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkStatus {
    /// All protocol phases completed
    Ok,
    /// A phase raised an error; metrics are zero
    Failed,
}

impl std::fmt::Display for BenchmarkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchmarkStatus::Ok => f.write_str("ok"),
            BenchmarkStatus::Failed => f.write_str("failed"),
        }
    }
}

/// One record per (adapter, scenario) pair, immutable once produced
///
/// Times are milliseconds. Raw samples are kept next to the derived
/// statistics so reports can be audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub implementation: String,
    pub scenario: String,
    pub status: BenchmarkStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub compile_time_median_ms: f64,
    pub compile_time_samples: Vec<f64>,
    /// Infinite when the median search time is zero (`null` in JSON)
    #[serde(deserialize_with = "ops_or_infinite")]
    pub search_ops_per_second: f64,
    pub search_time_median_ms: f64,
    pub search_time_samples: Vec<f64>,
    pub search_time_p95_ms: f64,
    pub search_time_p99_ms: f64,
    pub total_matches_found: u64,
    pub memory_delta_bytes: u64,
}

/// JSON has no infinity: `null` throughput reads back as unbounded
fn ops_or_infinite<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

impl BenchmarkResult {
    /// Failed record with the error text and all metrics zeroed
    pub fn failed(
        implementation: impl Into<String>,
        scenario: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            implementation: implementation.into(),
            scenario: scenario.into(),
            status: BenchmarkStatus::Failed,
            error: Some(error.into()),
            compile_time_median_ms: 0.0,
            compile_time_samples: Vec::new(),
            search_ops_per_second: 0.0,
            search_time_median_ms: 0.0,
            search_time_samples: Vec::new(),
            search_time_p95_ms: 0.0,
            search_time_p99_ms: 0.0,
            total_matches_found: 0,
            memory_delta_bytes: 0,
        }
    }

    /// Whether the pair completed
    pub fn is_ok(&self) -> bool {
        self.status == BenchmarkStatus::Ok
    }
}
