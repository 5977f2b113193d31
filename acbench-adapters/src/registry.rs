//! Adapter Registry
//!
//! Adapters register themselves with `inventory::submit!` next to their
//! implementation. The loader instantiates every registered adapter whose
//! name passes the filter, logging and skipping those that fail to load.

use acbench_core::{DynMatcher, LoadError};
use regex::Regex;
use tracing::{info, warn};

/// Result of instantiating one adapter
pub type LoadResult = Result<Box<dyn DynMatcher>, LoadError>;

/// Registered adapter, collected at link time
#[derive(Debug, Clone)]
pub struct AdapterDef {
    /// Display name, unique across the registry
    pub name: &'static str,
    /// Crate that provides the engine
    pub package_name: &'static str,
    /// Instantiate a fresh, uncompiled adapter
    pub factory: fn() -> LoadResult,
}

impl AdapterDef {
    /// Instantiate the adapter
    pub fn load(&self) -> LoadResult {
        (self.factory)()
    }
}

inventory::collect!(AdapterDef);

/// Anchor to prevent LTO from stripping inventory entries
#[used]
#[doc(hidden)]
pub static REGISTRY_ANCHOR: fn() = || {
    for _ in inventory::iter::<AdapterDef> {}
};

/// Every registered adapter, sorted by name
pub fn registered_adapters() -> Vec<&'static AdapterDef> {
    let mut defs: Vec<&'static AdapterDef> = inventory::iter::<AdapterDef>.into_iter().collect();
    defs.sort_by_key(|def| def.name);
    defs
}

/// Instantiate a single adapter by exact name
pub fn load_adapter(name: &str) -> LoadResult {
    registered_adapters()
        .into_iter()
        .find(|def| def.name == name)
        .ok_or_else(|| LoadError::Unknown(name.to_string()))?
        .load()
}

/// Instantiate every registered adapter whose name matches `filter`
///
/// Adapters that fail to load are logged and skipped; the result may be
/// empty.
pub fn load_adapters(filter: Option<&Regex>) -> Vec<Box<dyn DynMatcher>> {
    let mut loaded = Vec::new();
    for def in registered_adapters() {
        if let Some(re) = filter {
            if !re.is_match(def.name) {
                continue;
            }
        }
        match def.load() {
            Ok(adapter) => {
                info!(adapter = def.name, package = def.package_name, "Loaded");
                loaded.push(adapter);
            }
            Err(err) => {
                warn!(adapter = def.name, error = %err, "Skipped");
            }
        }
    }
    loaded
}

#[cfg(not(feature = "daachorse"))]
mod unavailable {
    use super::{AdapterDef, LoadResult};
    use acbench_core::LoadError;

    fn unavailable(name: &str) -> LoadResult {
        Err(LoadError::Unavailable {
            name: name.to_string(),
            reason: "built without the `daachorse` feature".to_string(),
        })
    }

    fn load_overlapping() -> LoadResult {
        unavailable("daachorse (overlapping)")
    }

    fn load_charwise_leftmost_longest() -> LoadResult {
        unavailable("daachorse (charwise leftmost-longest)")
    }

    inventory::submit! {
        AdapterDef {
            name: "daachorse (overlapping)",
            package_name: "daachorse",
            factory: load_overlapping,
        }
    }

    inventory::submit! {
        AdapterDef {
            name: "daachorse (charwise leftmost-longest)",
            package_name: "daachorse",
            factory: load_charwise_leftmost_longest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_sorted_and_unique() {
        let names: Vec<&str> = registered_adapters().iter().map(|d| d.name).collect();
        assert_eq!(names.len(), 5);
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_filter_by_regex() {
        let re = Regex::new("^aho-corasick").unwrap();
        let adapters = load_adapters(Some(&re));
        assert_eq!(adapters.len(), 3);
        assert!(adapters.iter().all(|a| a.package_name() == "aho-corasick"));

        let none = Regex::new("no such engine").unwrap();
        assert!(load_adapters(Some(&none)).is_empty());
    }

    #[test]
    fn test_unknown_adapter() {
        assert_eq!(
            load_adapter("grep").err(),
            Some(LoadError::Unknown("grep".to_string()))
        );
    }

    #[cfg(not(feature = "daachorse"))]
    #[test]
    fn test_daachorse_unavailable_without_feature() {
        let err = load_adapter("daachorse (overlapping)").err();
        assert!(matches!(err, Some(LoadError::Unavailable { .. })));
        assert_eq!(load_adapters(None).len(), 3);
    }

    #[cfg(feature = "daachorse")]
    #[test]
    fn test_all_adapters_load() {
        assert_eq!(load_adapters(None).len(), 5);
    }
}
