//! Percentile Computation
//!
//! Percentiles are taken over a sorted copy of the samples; the caller's
//! slice is never reordered.

use std::cmp::Ordering;

/// Compute a single percentile from samples
///
/// The rank is `p / 100 * (n - 1)`; the value is interpolated linearly
/// between the order statistics at the floor and ceiling of that rank.
/// A single sample is returned as-is and an empty slice yields `0.0`.
///
/// # Examples
///
/// ```
/// # use acbench_stats::percentile;
/// let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile(&samples, 50.0), 3.0);
/// assert_eq!(percentile(&samples, 25.0), 2.0);
/// ```
pub fn percentile(samples: &[f64], p: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    if samples.len() == 1 {
        return samples[0];
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len();
    let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = (rank.ceil() as usize).min(n - 1);
    let fraction = rank - lower_idx as f64;

    sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
}

/// Median of samples (the interpolated 50th percentile)
pub fn median(samples: &[f64]) -> f64 {
    percentile(samples, 50.0)
}
