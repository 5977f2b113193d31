//! daachorse Adapters
//!
//! Double-array Aho-Corasick automata. Unlike `aho-corasick`, daachorse
//! refuses duplicate and empty patterns at build time, so these adapters are
//! the ones that exercise the construction-failure path on real pattern sets.

use crate::registry::{AdapterDef, LoadResult};
use acbench_core::{AdapterError, Match, MatcherAdapter};
use daachorse::{
    CharwiseDoubleArrayAhoCorasick, CharwiseDoubleArrayAhoCorasickBuilder, DoubleArrayAhoCorasick,
    MatchKind,
};
use std::collections::BTreeMap;

/// Bytewise automaton, overlapping matches keyed by end offset
#[derive(Default)]
pub struct DaachorseOverlapping {
    automaton: Option<DoubleArrayAhoCorasick<u32>>,
    patterns: Vec<String>,
}

impl DaachorseOverlapping {
    /// Registry name
    pub const NAME: &'static str = "daachorse (overlapping)";
}

impl MatcherAdapter for DaachorseOverlapping {
    /// Exclusive end offset to the values of every pattern ending there
    type Raw = BTreeMap<usize, Vec<u32>>;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn package_name(&self) -> &str {
        "daachorse"
    }

    fn compile(&mut self, patterns: &[String]) -> Result<(), AdapterError> {
        self.dispose();
        let automaton = DoubleArrayAhoCorasick::<u32>::new(patterns)
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
        let mut by_end: BTreeMap<usize, Vec<u32>> = BTreeMap::new();
        for m in automaton.find_overlapping_iter(text) {
            by_end.entry(m.end()).or_default().push(m.value());
        }
        Ok(by_end)
    }

    fn normalize(&self, _text: &str, raw: Self::Raw) -> Vec<Match> {
        raw.into_iter()
            .flat_map(|(end, values)| {
                values.into_iter().map(move |value| {
                    Match::ending_at(end, self.patterns[value as usize].as_str())
                })
            })
            .collect()
    }

    fn dispose(&mut self) {
        self.automaton = None;
        self.patterns.clear();
    }
}

/// Charwise automaton with leftmost-longest semantics
#[derive(Default)]
pub struct DaachorseCharwiseLeftmostLongest {
    automaton: Option<CharwiseDoubleArrayAhoCorasick<u32>>,
    patterns: Vec<String>,
}

impl DaachorseCharwiseLeftmostLongest {
    /// Registry name
    pub const NAME: &'static str = "daachorse (charwise leftmost-longest)";
}

impl MatcherAdapter for DaachorseCharwiseLeftmostLongest {
    type Raw = Vec<daachorse::Match<u32>>;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn package_name(&self) -> &str {
        "daachorse"
    }

    fn compile(&mut self, patterns: &[String]) -> Result<(), AdapterError> {
        self.dispose();
        let automaton: CharwiseDoubleArrayAhoCorasick<u32> =
            CharwiseDoubleArrayAhoCorasickBuilder::new()
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
        Ok(automaton.leftmost_find_iter(text).collect())
    }

    fn normalize(&self, _text: &str, raw: Self::Raw) -> Vec<Match> {
        raw.into_iter()
            .map(|m| Match {
                start: m.start(),
                end: m.end(),
                keyword: self.patterns[m.value() as usize].clone(),
            })
            .collect()
    }

    fn dispose(&mut self) {
        self.automaton = None;
        self.patterns.clear();
    }
}

fn load_overlapping() -> LoadResult {
    Ok(Box::new(DaachorseOverlapping::default()))
}

fn load_charwise_leftmost_longest() -> LoadResult {
    Ok(Box::new(DaachorseCharwiseLeftmostLongest::default()))
}

inventory::submit! {
    AdapterDef {
        name: DaachorseOverlapping::NAME,
        package_name: "daachorse",
        factory: load_overlapping,
    }
}

inventory::submit! {
    AdapterDef {
        name: DaachorseCharwiseLeftmostLongest::NAME,
        package_name: "daachorse",
        factory: load_charwise_leftmost_longest,
    }
}

#[cfg(test)]
mod tests {
    use super::{DaachorseCharwiseLeftmostLongest, DaachorseOverlapping};
    use acbench_core::{AdapterError, Match, MatcherAdapter};

    fn patterns(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_overlapping_expands_end_keyed_table() {
        let mut adapter = DaachorseOverlapping::default();
        adapter
            .compile(&patterns(&["he", "she", "his", "hers"]))
            .unwrap();

        let raw = adapter.search_raw("ahishers").unwrap();
        assert_eq!(raw.get(&6).map(Vec::len), Some(2));

        assert_eq!(
            adapter.search("ahishers").unwrap(),
            vec![
                Match::new(1, "his"),
                Match::new(3, "she"),
                Match::new(4, "he"),
                Match::new(4, "hers"),
            ]
        );
    }

    #[test]
    fn test_charwise_leftmost_longest() {
        let mut adapter = DaachorseCharwiseLeftmostLongest::default();
        adapter
            .compile(&patterns(&["he", "she", "his", "hers"]))
            .unwrap();
        assert_eq!(
            adapter.search("ahishers").unwrap(),
            vec![Match::new(1, "his"), Match::new(4, "hers")]
        );
    }

    #[test]
    fn test_charwise_byte_offsets() {
        let mut adapter = DaachorseCharwiseLeftmostLongest::default();
        adapter.compile(&patterns(&["世界", "世"])).unwrap();
        let text = "全世界中に";
        let matches = adapter.search(text).unwrap();
        assert_eq!(matches, vec![Match::new(3, "世界")]);
        assert!(matches[0].is_valid_for(text));
    }

    #[test]
    fn test_duplicate_patterns_rejected() {
        let mut overlapping = DaachorseOverlapping::default();
        let err = overlapping.compile(&patterns(&["ab", "ab"])).unwrap_err();
        assert!(matches!(err, AdapterError::Construction { .. }));

        let mut charwise = DaachorseCharwiseLeftmostLongest::default();
        assert!(charwise.compile(&patterns(&["ab", "ab"])).is_err());
        // a failed compile leaves nothing usable behind
        assert!(charwise.search("ab").is_err());
    }
}
