//! Parse memoization.
//!
//! Maps an exact input string to the canonical semantic object parsed from
//! it. Entries are created on first successful parse and only ever removed
//! all at once.

use std::collections::HashMap;

use semtalk_model::SemanticObject;
use tracing::{debug, trace};

/// Hit/miss counters for a [`ParseCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an entry.
    pub hits: u64,
    /// Lookups that did not.
    pub misses: u64,
    /// Entries currently held.
    pub entries: usize,
}

/// Input string to semantic object memo table.
#[derive(Clone, Debug, Default)]
pub struct ParseCache {
    entries: HashMap<String, SemanticObject>,
    hits: u64,
    misses: u64,
}

impl ParseCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `input`, returning a copy of the cached object.
    ///
    /// The copy shares structure with the cached instance, but nothing the
    /// caller does to it is visible through the cache.
    pub fn get(&mut self, input: &str) -> Option<SemanticObject> {
        if let Some(object) = self.entries.get(input) {
            self.hits += 1;
            trace!(input, "parse cache hit");
            Some(object.clone())
        } else {
            self.misses += 1;
            None
        }
    }

    /// Stores the canonical object for `input`.
    pub fn insert(&mut self, input: &str, object: SemanticObject) {
        debug!(input, kind = object.kind_name(), "parse cache insert");
        self.entries.insert(input.to_string(), object);
    }

    /// Discards every entry. Counters are kept.
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "parse cache cleared");
        self.entries.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}
