//! Keyword-set adapter
//!
//! The native call only answers which keywords occur in the text. Positions
//! are recovered afterwards by re-scanning the text with `memchr::memmem` for
//! every occurrence of each reported keyword, overlapping ones included.

use crate::registry::{AdapterDef, LoadResult};
use acbench_core::{AdapterError, Match, MatcherAdapter};
use aho_corasick::AhoCorasick;
use fxhash::FxHashSet;
use memchr::memmem;

/// Distinct keywords found, positions recovered by `memmem`
#[derive(Default)]
pub struct KeywordSet {
    automaton: Option<AhoCorasick>,
    patterns: Vec<String>,
}

impl KeywordSet {
    /// Registry name
    pub const NAME: &'static str = "aho-corasick (keyword set)";
}

impl MatcherAdapter for KeywordSet {
    type Raw = Vec<String>;

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

        let mut seen = FxHashSet::default();
        let mut keywords = Vec::new();
        for m in automaton.find_overlapping_iter(text) {
            let idx = m.pattern().as_usize();
            let keyword = &self.patterns[idx];
            if seen.insert(keyword.as_str()) {
                keywords.push(keyword.clone());
            }
        }
        Ok(keywords)
    }

    fn normalize(&self, text: &str, raw: Self::Raw) -> Vec<Match> {
        let haystack = text.as_bytes();
        let mut matches = Vec::new();
        for keyword in raw {
            if keyword.is_empty() {
                continue;
            }
            let finder = memmem::Finder::new(keyword.as_bytes());
            let mut from = 0;
            while let Some(pos) = finder.find(&haystack[from..]) {
                let start = from + pos;
                matches.push(Match::new(start, keyword.as_str()));
                from = start + 1;
            }
        }
        matches
    }

    fn dispose(&mut self) {
        self.automaton = None;
        self.patterns.clear();
    }
}

fn load_keyword_set() -> LoadResult {
    Ok(Box::new(KeywordSet::default()))
}

inventory::submit! {
    AdapterDef {
        name: KeywordSet::NAME,
        package_name: "aho-corasick",
        factory: load_keyword_set,
    }
}
