#![warn(missing_docs)]
//! acbench Statistical Engine
//!
//! Pure numeric reductions used by the benchmark runner:
//! - Percentiles by linear interpolation between order statistics
//! - Median absolute deviation (MAD) as a robust scale estimator
//! - MAD-based outlier filtering of timing samples
//! - Dispersion helpers (mean, standard deviation, coefficient of variation)

mod outliers;
mod percentiles;
mod summary;

pub use outliers::{OutlierAnalysis, detect_outliers, filter_outliers, mad};
pub use percentiles::{median, percentile};
pub use summary::{TimingSummary, coefficient_of_variation, mean, std_dev, summarize_timings};

/// Default multiplier applied to the MAD when rejecting outliers
pub const DEFAULT_OUTLIER_FACTOR: f64 = 2.0;
