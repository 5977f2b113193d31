//! Cross-Validation
//!
//! After every adapter has run against a scenario, the warm-pass match counts
//! are compared. There is no ground-truth oracle: engines legitimately differ
//! on overlapping and nested occurrences, so a mismatch is a diagnostic and
//! never changes a result's status.

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Disagreement in total match count between successful adapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divergence {
    /// Scenario the counts were taken on
    pub scenario: String,
    /// `(adapter, total matches)` for every adapter that completed
    pub counts: Vec<(String, u64)>,
}

impl Divergence {
    /// Distinct nonzero counts, ascending
    pub fn distinct_counts(&self) -> Vec<u64> {
        let mut distinct: Vec<u64> = self
            .counts
            .iter()
            .map(|(_, c)| *c)
            .filter(|c| *c > 0)
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        distinct.sort_unstable();
        distinct
    }
}

/// Compare per-adapter match counts for one scenario
///
/// Zero counts are left out of the comparison (an engine that found nothing
/// or already failed). Returns a [`Divergence`] when two or more nonzero
/// counts differ, after logging it.
pub fn cross_validate(scenario: &str, counts: &[(String, u64)]) -> Option<Divergence> {
    let nonzero: Vec<u64> = counts.iter().map(|(_, c)| *c).filter(|c| *c > 0).collect();
    if nonzero.len() <= 1 {
        return None;
    }

    let unique: FxHashSet<u64> = nonzero.into_iter().collect();
    if unique.len() == 1 {
        return None;
    }

    warn!(scenario, "match count divergence");
    for (name, count) in counts {
        warn!(scenario, adapter = %name, matches = *count, "match count");
    }

    Some(Divergence {
        scenario: scenario.to_string(),
        counts: counts.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
        pairs.iter().map(|(n, c)| (n.to_string(), *c)).collect()
    }

    #[test]
    fn test_agreement() {
        assert!(cross_validate("s", &counts(&[("a", 4), ("b", 4), ("c", 4)])).is_none());
    }

    #[test]
    fn test_divergence() {
        let d = cross_validate("s", &counts(&[("overlap", 4), ("leftmost", 2)])).unwrap();
        assert_eq!(d.scenario, "s");
        assert_eq!(d.counts.len(), 2);
        assert_eq!(d.distinct_counts(), vec![2, 4]);
    }

    #[test]
    fn test_zero_counts_excluded() {
        assert!(cross_validate("s", &counts(&[("a", 4), ("failed", 0)])).is_none());
        assert!(cross_validate("s", &counts(&[("a", 0), ("b", 0)])).is_none());
        assert!(cross_validate("s", &[]).is_none());
    }

    #[test]
    fn test_divergence_reports_all_adapters() {
        let d = cross_validate("s", &counts(&[("a", 4), ("b", 0), ("c", 3)])).unwrap();
        assert_eq!(d.counts.len(), 3);
        assert_eq!(d.distinct_counts(), vec![3, 4]);
    }
}
