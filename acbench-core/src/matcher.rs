//! Matcher Adapter Contract
//!
//! Engines disagree wildly on how they report matches: half-open spans keyed
//! by pattern id, end-offset keyed tables, per-keyword position lists. An
//! adapter hides that behind one lifecycle (`compile` → `search_raw`/`search`
//! → `dispose`) and one canonical [`Match`] shape so the runner and the
//! cross-validation never see engine specifics.
//!
//! ```text
//!  compile(patterns) ──► automaton held by the adapter
//!        │
//!        ├── search_raw(text) ──► engine-native value (timed)
//!        │
//!        └── search(text) ──► search_raw + normalize + canonicalize
//!        │
//!  dispose() ──► automaton dropped (idempotent)
//! ```

use crate::error::AdapterError;
use serde::{Deserialize, Serialize};
use std::hint::black_box;

/// A located occurrence of one pattern in one text
///
/// Offsets are byte offsets into the UTF-8 text, `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Match {
    /// First byte of the occurrence
    pub start: usize,
    /// One past the last byte of the occurrence
    pub end: usize,
    /// The pattern that matched
    pub keyword: String,
}

impl Match {
    /// Match of `keyword` beginning at `start`
    pub fn new(start: usize, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        Self {
            start,
            end: start + keyword.len(),
            keyword,
        }
    }

    /// Match of `keyword` whose exclusive end is `end`
    pub fn ending_at(end: usize, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        Self {
            start: end - keyword.len(),
            end,
            keyword,
        }
    }

    /// Length of the matched span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty (never true for a valid match)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check the span invariants against the searched text
    pub fn is_valid_for(&self, text: &str) -> bool {
        self.start < self.end
            && self.end <= text.len()
            && self.len() == self.keyword.len()
            && text.get(self.start..self.end) == Some(self.keyword.as_str())
    }
}

/// Sort matches by `(start, end)` and drop exact duplicates
///
/// Keyword order breaks remaining ties so output is deterministic.
pub fn canonicalize(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_unstable_by(|a, b| {
        (a.start, a.end, &a.keyword).cmp(&(b.start, b.end, &b.keyword))
    });
    matches.dedup();
    matches
}

/// One matching engine exposed through the canonical contract
///
/// Implementations hold the compiled automaton between `compile` and
/// `dispose`. `search_raw` must fail with [`AdapterError::NotCompiled`]
/// instead of returning empty results when nothing is compiled.
pub trait MatcherAdapter {
    /// Engine-native search result, returned untouched by `search_raw`
    type Raw;

    /// Display name, unique across the registry
    fn name(&self) -> &str;

    /// Crate that provides the engine
    fn package_name(&self) -> &str;

    /// Build the automaton, discarding any previous one
    fn compile(&mut self, patterns: &[String]) -> Result<(), AdapterError>;

    /// Run the engine's native search entry point
    fn search_raw(&self, text: &str) -> Result<Self::Raw, AdapterError>;

    /// Translate a native result for `text` into canonical matches
    ///
    /// Order and duplicates do not matter here; `search` canonicalizes.
    fn normalize(&self, text: &str, raw: Self::Raw) -> Vec<Match>;

    /// Search and normalize into sorted, deduplicated matches
    fn search(&self, text: &str) -> Result<Vec<Match>, AdapterError> {
        let raw = self.search_raw(text)?;
        Ok(canonicalize(self.normalize(text, raw)))
    }

    /// Release the automaton; safe to call when nothing is compiled
    fn dispose(&mut self);
}

/// Object-safe view of a [`MatcherAdapter`] used by the runner
///
/// The native result type is erased: `search_raw_discard` performs the raw
/// call and feeds its result to `black_box` so the timed work is kept.
pub trait DynMatcher {
    /// Display name
    fn name(&self) -> &str;

    /// Crate that provides the engine
    fn package_name(&self) -> &str;

    /// See [`MatcherAdapter::compile`]
    fn compile(&mut self, patterns: &[String]) -> Result<(), AdapterError>;

    /// See [`MatcherAdapter::search`]
    fn search(&self, text: &str) -> Result<Vec<Match>, AdapterError>;

    /// Raw search with the native result discarded
    fn search_raw_discard(&self, text: &str) -> Result<(), AdapterError>;

    /// See [`MatcherAdapter::dispose`]
    fn dispose(&mut self);
}

impl<T: MatcherAdapter> DynMatcher for T {
    fn name(&self) -> &str {
        MatcherAdapter::name(self)
    }

    fn package_name(&self) -> &str {
        MatcherAdapter::package_name(self)
    }

    fn compile(&mut self, patterns: &[String]) -> Result<(), AdapterError> {
        MatcherAdapter::compile(self, patterns)
    }

    fn search(&self, text: &str) -> Result<Vec<Match>, AdapterError> {
        MatcherAdapter::search(self, text)
    }

    #[inline]
    fn search_raw_discard(&self, text: &str) -> Result<(), AdapterError> {
        black_box(MatcherAdapter::search_raw(self, black_box(text))?);
        Ok(())
    }

    fn dispose(&mut self) {
        MatcherAdapter::dispose(self)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScanAdapter;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_match_constructors() {
        let m = Match::new(4, "hers");
        assert_eq!((m.start, m.end), (4, 8));
        assert_eq!(Match::ending_at(8, "hers"), m);
        assert!(m.is_valid_for("ahishers"));
        assert!(!m.is_valid_for("ahishe"));
    }

    #[test]
    fn test_canonicalize_sorts_and_dedups() {
        let matches = vec![
            Match::new(4, "hers"),
            Match::new(1, "his"),
            Match::new(4, "he"),
            Match::new(1, "his"),
        ];
        let canon = canonicalize(matches);
        assert_eq!(
            canon,
            vec![Match::new(1, "his"), Match::new(4, "he"), Match::new(4, "hers")]
        );
    }

    #[test]
    fn test_search_is_canonical() {
        let mut adapter = ScanAdapter::default();
        MatcherAdapter::compile(&mut adapter, &["ab".to_string(), "a".to_string()]).unwrap();
        let matches = MatcherAdapter::search(&adapter, "abab").unwrap();
        assert_eq!(
            matches,
            vec![
                Match::new(0, "a"),
                Match::new(0, "ab"),
                Match::new(2, "a"),
                Match::new(2, "ab"),
            ]
        );
    }

    #[test]
    fn test_not_compiled() {
        let adapter = ScanAdapter::default();
        assert_eq!(
            MatcherAdapter::search(&adapter, "x"),
            Err(AdapterError::not_compiled("scan"))
        );
    }

    #[test]
    fn test_dyn_dispatch() {
        let mut boxed: Box<dyn DynMatcher> = Box::new(ScanAdapter::default());
        boxed.compile(&["a".to_string()]).unwrap();
        assert!(boxed.search_raw_discard("aaa").is_ok());
        boxed.dispose();
        boxed.dispose();
        assert!(boxed.search_raw_discard("aaa").is_err());
    }

    proptest! {
        #[test]
        fn prop_canonicalize_sorted_and_unique(
            hits in prop::collection::vec(
                (0usize..64, prop::sample::select(vec!["a", "ab", "abc", "b"])),
                0..48,
            )
        ) {
            let matches: Vec<Match> = hits.into_iter().map(|(s, k)| Match::new(s, k)).collect();
            let canon = canonicalize(matches.clone());

            for pair in canon.windows(2) {
                prop_assert!((pair[0].start, pair[0].end) <= (pair[1].start, pair[1].end));
                prop_assert_ne!(&pair[0], &pair[1]);
            }
            for m in &matches {
                prop_assert!(canon.contains(m));
            }
        }
    }
}
