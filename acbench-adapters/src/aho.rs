//! aho-corasick Adapters
//!
//! Two views of the same engine. The standard automaton reports every
//! overlapping occurrence; the leftmost-longest automaton reports a
//! non-overlapping cover preferring the longest keyword at each start.
//! The divergence between them on nested keywords is expected.

use crate::registry::{AdapterDef, LoadResult};
use acbench_core::{AdapterError, Match, MatcherAdapter};
use aho_corasick::{AhoCorasick, MatchKind};

/// Standard semantics, every overlapping occurrence
#[derive(Default)]
pub struct AhoCorasickOverlapping {
    automaton: Option<AhoCorasick>,
    patterns: Vec<String>,
}

impl AhoCorasickOverlapping {
    /// Registry name
    pub const NAME: &'static str = "aho-corasick (overlapping)";
}

impl MatcherAdapter for AhoCorasickOverlapping {
    type Raw = Vec<aho_corasick::Match>;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn package_name(&self) -> &str {
        "aho-corasick"
    }

    fn compile(&mut self, patterns: &[String]) -> Result<(), AdapterError> {
        self.dispose();
        let automaton =
            AhoCorasick::new(patterns).map_err(|e| AdapterError::construction(Self::NAME, e))?;
        self.automaton = Some(automaton);
        self.patterns = patterns.to_vec();
        Ok(())
    }

    fn search_raw(&self, text: &str) -> Result<Self::Raw, AdapterError> {
        let automaton = self
            .automaton
            .as_ref()
            .ok_or_else(|| AdapterError::not_compiled(Self::NAME))?;
        Ok(automaton.find_overlapping_iter(text).collect())
    }

    fn normalize(&self, _text: &str, raw: Self::Raw) -> Vec<Match> {
        raw.into_iter()
            .filter(|m| !m.is_empty())
            .map(|m| Match {
                start: m.start(),
                end: m.end(),
                keyword: self.patterns[m.pattern().as_usize()].clone(),
            })
            .collect()
    }

    fn dispose(&mut self) {
        self.automaton = None;
        self.patterns.clear();
    }
}

/// Leftmost-longest semantics, reported as `(pattern index, inclusive end)`
#[derive(Default)]
pub struct AhoCorasickLeftmostLongest {
    automaton: Option<AhoCorasick>,
    patterns: Vec<String>,
}

impl AhoCorasickLeftmostLongest {
    /// Registry name
    pub const NAME: &'static str = "aho-corasick (leftmost-longest)";
}

impl MatcherAdapter for AhoCorasickLeftmostLongest {
    type Raw = Vec<(usize, usize)>;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn package_name(&self) -> &str {
        "aho-corasick"
    }

    fn compile(&mut self, patterns: &[String]) -> Result<(), AdapterError> {
        self.dispose();
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(patterns)
            .map_err(|e| AdapterError::construction(Self::NAME, e))?;
        self.automaton = Some(automaton);
        self.patterns = patterns.to_vec();
        Ok(())
    }

    fn search_raw(&self, text: &str) -> Result<Self::Raw, AdapterError> {
        let automaton = self
            .automaton
            .as_ref()
            .ok_or_else(|| AdapterError::not_compiled(Self::NAME))?;
        // Empty-pattern hits have no inclusive end
        Ok(automaton
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| (m.pattern().as_usize(), m.end() - 1))
            .collect())
    }

    fn normalize(&self, _text: &str, raw: Self::Raw) -> Vec<Match> {
        raw.into_iter()
            .map(|(idx, end_inclusive)| {
                let keyword = &self.patterns[idx];
                Match {
                    start: end_inclusive + 1 - keyword.len(),
                    end: end_inclusive + 1,
                    keyword: keyword.clone(),
                }
            })
            .collect()
    }

    fn dispose(&mut self) {
        self.automaton = None;
        self.patterns.clear();
    }
}

fn load_overlapping() -> LoadResult {
    Ok(Box::new(AhoCorasickOverlapping::default()))
}

fn load_leftmost_longest() -> LoadResult {
    Ok(Box::new(AhoCorasickLeftmostLongest::default()))
}

inventory::submit! {
    AdapterDef {
        name: AhoCorasickOverlapping::NAME,
        package_name: "aho-corasick",
        factory: load_overlapping,
    }
}

inventory::submit! {
    AdapterDef {
        name: AhoCorasickLeftmostLongest::NAME,
        package_name: "aho-corasick",
        factory: load_leftmost_longest,
    }
}

#[cfg(test)]
mod tests {
    use super::{AhoCorasickLeftmostLongest, AhoCorasickOverlapping};
    use acbench_core::{Match, MatcherAdapter};

    fn patterns(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_overlapping_reports_nested_keywords() {
        let mut adapter = AhoCorasickOverlapping::default();
        adapter
            .compile(&patterns(&["he", "she", "his", "hers"]))
            .unwrap();
        let matches = adapter.search("ahishers").unwrap();
        assert_eq!(
            matches,
            vec![
                Match::new(1, "his"),
                Match::new(3, "she"),
                Match::new(4, "he"),
                Match::new(4, "hers"),
            ]
        );
    }

    #[test]
    fn test_leftmost_longest_translates_inclusive_end() {
        let mut adapter = AhoCorasickLeftmostLongest::default();
        adapter
            .compile(&patterns(&["he", "she", "his", "hers"]))
            .unwrap();

        let raw = adapter.search_raw("ahishers").unwrap();
        assert_eq!(raw, vec![(2, 3), (3, 7)]);

        let matches = adapter.search("ahishers").unwrap();
        assert_eq!(matches, vec![Match::new(1, "his"), Match::new(4, "hers")]);
    }

    #[test]
    fn test_duplicate_patterns_deduplicated() {
        let mut adapter = AhoCorasickOverlapping::default();
        adapter.compile(&patterns(&["ab", "ab"])).unwrap();
        assert_eq!(adapter.search("xabx").unwrap(), vec![Match::new(1, "ab")]);
    }

    #[test]
    fn test_recompile_discards_previous_patterns() {
        let mut adapter = AhoCorasickLeftmostLongest::default();
        adapter.compile(&patterns(&["foo"])).unwrap();
        adapter.compile(&patterns(&["bar"])).unwrap();
        assert_eq!(adapter.search("foobar").unwrap(), vec![Match::new(3, "bar")]);
    }
}
