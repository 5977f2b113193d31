//! Summary Statistics
//!
//! Headline numbers for a set of timing samples. Everything reported here is
//! computed from the outlier-FILTERED samples; the raw samples stay with the
//! caller for auditing.

use crate::outliers::detect_outliers;
use crate::percentiles::{median, percentile};
use serde::{Deserialize, Serialize};

/// Reduced view of one timing sample set (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Median of the filtered samples
    pub median_ms: f64,
    /// 95th percentile of the filtered samples
    pub p95_ms: f64,
    /// 99th percentile of the filtered samples
    pub p99_ms: f64,
    /// `1000 / median_ms`, or infinity for a zero median
    pub ops_per_second: f64,
    /// Samples kept after filtering
    pub kept: usize,
    /// Samples rejected as outliers
    pub rejected: usize,
    /// Share of samples rejected, in percent
    pub outlier_pct: f64,
}

impl TimingSummary {
    /// Whether more than `threshold_pct` percent of the samples were rejected
    pub fn is_noisy(&self, threshold_pct: f64) -> bool {
        self.outlier_pct > threshold_pct
    }
}

/// Filter outliers and reduce timing samples to their headline statistics
pub fn summarize_timings(samples_ms: &[f64], outlier_factor: f64) -> TimingSummary {
    let analysis = detect_outliers(samples_ms, outlier_factor);
    let filtered = &analysis.cleaned_samples;
    let median_ms = median(filtered);
    let ops_per_second = if median_ms > 0.0 {
        1000.0 / median_ms
    } else {
        f64::INFINITY
    };

    TimingSummary {
        median_ms,
        p95_ms: percentile(filtered, 95.0),
        p99_ms: percentile(filtered, 99.0),
        ops_per_second,
        kept: filtered.len(),
        rejected: analysis.outlier_indices.len(),
        outlier_pct: analysis.outlier_percentage(),
    }
}

/// Arithmetic mean (0 for empty input)
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let m = mean(samples);
    let variance = samples.iter().map(|x| (x - m).powi(2)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Coefficient of variation in percent (relative stddev)
pub fn coefficient_of_variation(samples: &[f64]) -> f64 {
    let m = mean(samples);
    if m == 0.0 {
        0.0
    } else {
        (std_dev(samples) / m) * 100.0
    }
}
