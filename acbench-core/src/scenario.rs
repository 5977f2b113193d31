//! Benchmark workloads

use serde::{Deserialize, Serialize};

/// A fixed (patterns, texts) workload shared read-only by every adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier, used as the report column
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Patterns compiled into each engine, in order
    pub patterns: Vec<String>,
    /// Texts searched on every pass, in order
    pub texts: Vec<String>,
}

impl Scenario {
    /// Build a scenario from anything string-like
    pub fn new<P, T>(
        name: impl Into<String>,
        description: impl Into<String>,
        patterns: impl IntoIterator<Item = P>,
        texts: impl IntoIterator<Item = T>,
    ) -> Self
    where
        P: Into<String>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            texts: texts.into_iter().map(Into::into).collect(),
        }
    }

    /// Combined UTF-8 size of all texts
    pub fn total_text_bytes(&self) -> usize {
        self.texts.iter().map(String::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_text_bytes() {
        let scenario = Scenario::new("s", "d", ["a"], ["abc", "héllo"]);
        assert_eq!(scenario.patterns, vec!["a".to_string()]);
        assert_eq!(scenario.total_text_bytes(), 3 + 6);
    }
}
