//! Outlier Detection
//!
//! Uses the median absolute deviation (MAD) to reject timing samples that
//! were hit by scheduler jitter or allocator stalls.
//!
//! A sample is an outlier when `|x - median| > factor * MAD`. With a MAD of
//! exactly zero there is no dispersion to measure and nothing is rejected.
//! A filter that would reject every sample rejects none instead, so a
//! non-empty input never reduces to an empty set.

use crate::percentiles::median;

/// Median absolute deviation from the median
pub fn mad(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let med = median(samples);
    let deviations: Vec<f64> = samples.iter().map(|x| (x - med).abs()).collect();
    median(&deviations)
}

/// Result of outlier analysis
#[derive(Debug, Clone)]
pub struct OutlierAnalysis {
    /// Original samples (ALL data preserved)
    pub all_samples: Vec<f64>,
    /// Samples that survived the filter, in input order
    pub cleaned_samples: Vec<f64>,
    /// Indices of rejected samples
    pub outlier_indices: Vec<usize>,
    /// Median of the input
    pub median: f64,
    /// MAD of the input
    pub mad: f64,
    /// Lower acceptance bound
    pub lower_bound: f64,
    /// Upper acceptance bound
    pub upper_bound: f64,
}

impl OutlierAnalysis {
    /// Percentage of samples that are outliers
    pub fn outlier_percentage(&self) -> f64 {
        if self.all_samples.is_empty() {
            return 0.0;
        }
        (self.outlier_indices.len() as f64 / self.all_samples.len() as f64) * 100.0
    }
}

/// Detect outliers in samples with a MAD multiplier of `factor`
///
/// # Examples
///
/// ```
/// # use acbench_stats::detect_outliers;
/// let samples = vec![10.0, 11.0, 10.5, 9.5, 10.2, 80.0];
/// let analysis = detect_outliers(&samples, 2.0);
/// assert_eq!(analysis.outlier_indices, vec![5]);
/// ```
pub fn detect_outliers(samples: &[f64], factor: f64) -> OutlierAnalysis {
    let med = median(samples);
    let spread = mad(samples);

    if spread == 0.0 {
        return unfiltered(samples, med, spread);
    }

    let limit = factor * spread;
    let mut cleaned = Vec::with_capacity(samples.len());
    let mut outlier_indices = Vec::new();

    for (i, &sample) in samples.iter().enumerate() {
        if (sample - med).abs() > limit {
            outlier_indices.push(i);
        } else {
            cleaned.push(sample);
        }
    }

    // factor < 1 can put every sample outside the band
    if cleaned.is_empty() {
        return unfiltered(samples, med, spread);
    }

    OutlierAnalysis {
        all_samples: samples.to_vec(),
        cleaned_samples: cleaned,
        outlier_indices,
        median: med,
        mad: spread,
        lower_bound: med - limit,
        upper_bound: med + limit,
    }
}

fn unfiltered(samples: &[f64], median: f64, mad: f64) -> OutlierAnalysis {
    OutlierAnalysis {
        all_samples: samples.to_vec(),
        cleaned_samples: samples.to_vec(),
        outlier_indices: Vec::new(),
        median,
        mad,
        lower_bound: f64::NEG_INFINITY,
        upper_bound: f64::INFINITY,
    }
}

/// Drop samples further than `factor * MAD` from the median
///
/// Returns the input unchanged when the MAD is zero or when every sample
/// would be dropped.
pub fn filter_outliers(samples: &[f64], factor: f64) -> Vec<f64> {
    detect_outliers(samples, factor).cleaned_samples
}
