//! Runner configuration

use crate::error::ConfigError;
use acbench_stats::DEFAULT_OUTLIER_FACTOR;
use serde::{Deserialize, Serialize};

/// Sample sizes for the measurement protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Timed `compile` calls per pair
    #[serde(default = "default_compile_iterations")]
    pub compile_iterations: usize,
    /// Untimed raw search passes before sampling
    #[serde(default = "default_search_warmup_iterations")]
    pub search_warmup_iterations: usize,
    /// Timed raw search passes per pair
    #[serde(default = "default_search_iterations")]
    pub search_iterations: usize,
    /// MAD multiplier for outlier rejection, at least 1
    #[serde(default = "default_outlier_factor")]
    pub outlier_factor: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            compile_iterations: default_compile_iterations(),
            search_warmup_iterations: default_search_warmup_iterations(),
            search_iterations: default_search_iterations(),
            outlier_factor: default_outlier_factor(),
        }
    }
}

fn default_compile_iterations() -> usize {
    10
}
fn default_search_warmup_iterations() -> usize {
    5
}
fn default_search_iterations() -> usize {
    50
}
fn default_outlier_factor() -> f64 {
    DEFAULT_OUTLIER_FACTOR
}

impl RunnerConfig {
    /// Reduced sample sizes for development runs
    pub fn quick() -> Self {
        Self {
            compile_iterations: 3,
            search_warmup_iterations: 2,
            search_iterations: 10,
            outlier_factor: default_outlier_factor(),
        }
    }

    /// Reject configurations the protocol cannot reduce
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.compile_iterations == 0 {
            return Err(ConfigError::ZeroIterations {
                field: "compile_iterations",
            });
        }
        if self.search_iterations == 0 {
            return Err(ConfigError::ZeroIterations {
                field: "search_iterations",
            });
        }
        // Below 1 the band can exclude every sample
        if !self.outlier_factor.is_finite() || self.outlier_factor < 1.0 {
            return Err(ConfigError::InvalidOutlierFactor(self.outlier_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let full = RunnerConfig::default();
        assert_eq!(
            (full.compile_iterations, full.search_warmup_iterations, full.search_iterations),
            (10, 5, 50)
        );
        let quick = RunnerConfig::quick();
        assert_eq!(
            (quick.compile_iterations, quick.search_warmup_iterations, quick.search_iterations),
            (3, 2, 10)
        );
        assert!(full.validate().is_ok());
        assert!(quick.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let cfg = RunnerConfig {
            search_iterations: 0,
            ..RunnerConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroIterations {
                field: "search_iterations"
            })
        );

        let cfg = RunnerConfig {
            outlier_factor: -1.0,
            ..RunnerConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = RunnerConfig {
            outlier_factor: 0.5,
            ..RunnerConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidOutlierFactor(0.5)));

        let cfg = RunnerConfig {
            outlier_factor: 1.0,
            ..RunnerConfig::default()
        };
        assert!(cfg.validate().is_ok());

        // Warm-up may be skipped entirely
        let cfg = RunnerConfig {
            search_warmup_iterations: 0,
            ..RunnerConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
