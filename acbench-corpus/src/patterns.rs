//! Pattern Sets
//!
//! Word lists are bundled at compile time from `data/`, one word per line.
//! The large set is derived deterministically from the others.

use fxhash::FxHashSet;

/// Upper bound on the derived pattern set
pub const MANY_PATTERNS_LIMIT: usize = 5000;

const FEW: &str = include_str!("../data/few.txt");
const MEDIUM: &str = include_str!("../data/medium.txt");
const EXTRA: &str = include_str!("../data/extra.txt");
const PREFIXES: &str = include_str!("../data/prefixes.txt");
const SUFFIXES: &str = include_str!("../data/suffixes.txt");

fn lines(raw: &'static str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// 20 very common English words
pub fn few_patterns() -> Vec<String> {
    lines(FEW)
}

/// About 500 common words
pub fn medium_patterns() -> Vec<String> {
    lines(MEDIUM)
}

/// Technical vocabulary disjoint from the medium set
pub fn extra_words() -> Vec<String> {
    lines(EXTRA)
}

/// Word-forming prefixes used to derive new patterns
pub fn prefixes() -> Vec<String> {
    lines(PREFIXES)
}

/// Word-forming suffixes used to derive new patterns
pub fn suffixes() -> Vec<String> {
    lines(SUFFIXES)
}

/// Derive up to `limit` unique patterns of at least two bytes
///
/// Candidates are taken in a fixed order: medium words, extra words,
/// prefix + medium, medium + suffix, prefix + extra, extra + suffix.
/// The first `limit` unique candidates win.
pub fn generate_many_patterns(limit: usize) -> Vec<String> {
    let base = medium_patterns();
    let extra = extra_words();
    let prefixes = prefixes();
    let suffixes = suffixes();

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut result = Vec::with_capacity(limit);

    let mut add = |word: String| {
        if result.len() < limit && word.len() >= 2 && seen.insert(word.clone()) {
            result.push(word);
        }
    };

    base.iter().cloned().for_each(&mut add);
    extra.iter().cloned().for_each(&mut add);
    for p in &prefixes {
        base.iter().for_each(|w| add(format!("{p}{w}")));
    }
    for s in &suffixes {
        base.iter().for_each(|w| add(format!("{w}{s}")));
    }
    for p in &prefixes {
        extra.iter().for_each(|w| add(format!("{p}{w}")));
    }
    for s in &suffixes {
        extra.iter().for_each(|w| add(format!("{w}{s}")));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_lists() {
        assert_eq!(few_patterns().len(), 20);
        let medium = medium_patterns();
        assert!((450..=550).contains(&medium.len()));

        let unique: FxHashSet<&String> = medium.iter().collect();
        assert_eq!(unique.len(), medium.len());
    }

    #[test]
    fn test_many_patterns_unique_and_capped() {
        let many = generate_many_patterns(MANY_PATTERNS_LIMIT);
        assert_eq!(many.len(), MANY_PATTERNS_LIMIT);
        assert!(many.iter().all(|p| p.len() >= 2));

        let unique: FxHashSet<&String> = many.iter().collect();
        assert_eq!(unique.len(), many.len());
    }

    #[test]
    fn test_many_patterns_order() {
        let many = generate_many_patterns(MANY_PATTERNS_LIMIT);
        let medium = medium_patterns();
        assert_eq!(&many[..medium.len()], &medium[..]);
        assert_eq!(many[medium.len()], extra_words()[0]);
    }

    #[test]
    fn test_small_limit_is_prefix() {
        let small = generate_many_patterns(10);
        let large = generate_many_patterns(100);
        assert_eq!(small.len(), 10);
        assert_eq!(&large[..10], &small[..]);
    }
}
