#![warn(missing_docs)]
//! acbench Adapters
//!
//! One [`MatcherAdapter`](acbench_core::MatcherAdapter) per engine variant:
//!
//! | Adapter | Native result |
//! |---|---|
//! | `aho-corasick (overlapping)` | engine matches with pattern ids |
//! | `aho-corasick (leftmost-longest)` | `(pattern index, inclusive end)` |
//! | `aho-corasick (keyword set)` | distinct keywords, positions re-scanned |
//! | `daachorse (overlapping)` | end offset → pattern values |
//! | `daachorse (charwise leftmost-longest)` | engine matches with values |
//!
//! The daachorse adapters need the default `daachorse` feature; without it
//! they stay registered but fail to load with `LoadError::Unavailable`.

mod aho;
#[cfg(feature = "daachorse")]
mod daac;
mod keyword_set;
mod registry;

pub use aho::{AhoCorasickLeftmostLongest, AhoCorasickOverlapping};
#[cfg(feature = "daachorse")]
pub use daac::{DaachorseCharwiseLeftmostLongest, DaachorseOverlapping};
pub use keyword_set::KeywordSet;
pub use registry::{
    AdapterDef, LoadResult, REGISTRY_ANCHOR, load_adapter, load_adapters, registered_adapters,
};

#[cfg(test)]
mod conformance {
    //! Contract checks every registered adapter must pass.

    use crate::load_adapters;
    use acbench_core::{AdapterError, DynMatcher, Match};
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn all() -> Vec<Box<dyn DynMatcher>> {
        load_adapters(None)
    }

    #[test]
    fn test_ahishers_minimum() {
        let patterns = words(&["he", "she", "his", "hers"]);
        for mut adapter in all() {
            adapter.compile(&patterns).unwrap();
            let matches = adapter.search("ahishers").unwrap();
            assert!(
                matches.contains(&Match::new(1, "his")),
                "{} missed his",
                adapter.name()
            );
            assert!(
                matches.contains(&Match::new(4, "hers")),
                "{} missed hers",
                adapter.name()
            );
            adapter.dispose();
        }
    }

    #[test]
    fn test_round_trip_offset() {
        let patterns = words(&["needle", "thread", "pin"]);
        let text = "a haystack with a needle inside";
        let offset = text.find("needle").unwrap();
        for mut adapter in all() {
            adapter.compile(&patterns).unwrap();
            let matches = adapter.search(text).unwrap();
            assert!(
                matches.iter().any(|m| m.start == offset && m.keyword == "needle"),
                "{} lost the needle",
                adapter.name()
            );
        }
    }

    #[test]
    fn test_invocation_order_enforced() {
        let patterns = words(&["x"]);
        for mut adapter in all() {
            let name = adapter.name().to_string();
            assert_eq!(
                adapter.search("x"),
                Err(AdapterError::not_compiled(&name))
            );
            adapter.compile(&patterns).unwrap();
            assert!(adapter.search_raw_discard("x").is_ok());
            adapter.dispose();
            adapter.dispose();
            assert!(adapter.search_raw_discard("x").is_err());
        }
    }

    #[test]
    fn test_no_matches() {
        let patterns = words(&["xyz"]);
        for mut adapter in all() {
            adapter.compile(&patterns).unwrap();
            assert!(adapter.search("abcabc").unwrap().is_empty());
            assert!(adapter.search("").unwrap().is_empty());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_sorted_and_valid(
            set in prop::collection::btree_set("[ab]{1,3}", 1..6),
            text in "[abc ]{0,64}",
        ) {
            let patterns: Vec<String> = set.into_iter().collect();
            for mut adapter in all() {
                adapter.compile(&patterns).unwrap();
                let matches = adapter.search(&text).unwrap();
                for pair in matches.windows(2) {
                    prop_assert!((pair[0].start, pair[0].end) <= (pair[1].start, pair[1].end));
                    prop_assert_ne!(&pair[0], &pair[1]);
                }
                for m in &matches {
                    prop_assert!(m.is_valid_for(&text), "{}: {:?}", adapter.name(), m);
                }
                adapter.dispose();
            }
        }
    }
}
