//! Error types for the harness

use thiserror::Error;

/// Errors raised by an adapter while a pair is being measured
///
/// Any of these aborts the current pair only; the runner records the
/// `Display` text verbatim in the failed result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The engine rejected the pattern set
    #[error("{adapter}: failed to build automaton: {message}")]
    Construction {
        /// Adapter display name
        adapter: String,
        /// Engine error text
        message: String,
    },

    /// `search`/`search_raw` called before `compile` or after `dispose`
    #[error("{adapter}: compile() must be called before search()")]
    NotCompiled {
        /// Adapter display name
        adapter: String,
    },
}

impl AdapterError {
    /// Wrap an engine build error
    pub fn construction(adapter: &str, err: impl std::fmt::Display) -> Self {
        AdapterError::Construction {
            adapter: adapter.to_string(),
            message: err.to_string(),
        }
    }

    /// Invocation-order violation for `adapter`
    pub fn not_compiled(adapter: &str) -> Self {
        AdapterError::NotCompiled {
            adapter: adapter.to_string(),
        }
    }
}

/// Errors raised while loading adapters, before any measurement starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The engine is not available in this build
    #[error("{name} is unavailable: {reason}")]
    Unavailable {
        /// Registered adapter name
        name: String,
        /// Why it cannot be loaded
        reason: String,
    },

    /// No adapter registered under this name
    #[error("unknown adapter: {0}")]
    Unknown(String),
}

/// Invalid runner configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// An iteration count that must be positive was zero
    #[error("{field} must be at least 1")]
    ZeroIterations {
        /// Offending field
        field: &'static str,
    },

    /// Outlier factor must be a finite number no smaller than 1
    #[error("outlier_factor must be finite and at least 1.0, got {0}")]
    InvalidOutlierFactor(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AdapterError::not_compiled("engine");
        assert_eq!(
            err.to_string(),
            "engine: compile() must be called before search()"
        );

        let err = AdapterError::construction("engine", "duplicate pattern");
        assert!(err.to_string().contains("duplicate pattern"));

        let err = LoadError::Unavailable {
            name: "daachorse".into(),
            reason: "built without the `daachorse` feature".into(),
        };
        assert!(err.to_string().starts_with("daachorse is unavailable"));
    }
}
