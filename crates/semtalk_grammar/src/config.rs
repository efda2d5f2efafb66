//! Parser configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`Parser`](crate::Parser).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParserConfig {
    /// Name of the DDD (dialogue domain description) the parser serves.
    pub ddd_name: String,

    /// Domain name stamped on findout and raise plan items.
    pub domain_name: Option<String>,

    /// Memoize successful parses by input string.
    pub cache_enabled: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            ddd_name: String::new(),
            domain_name: None,
            cache_enabled: true,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration for the named DDD.
    #[must_use]
    pub fn new(ddd_name: impl Into<String>) -> Self {
        Self {
            ddd_name: ddd_name.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration for a DDD and the domain it belongs to.
    #[must_use]
    pub fn for_domain(ddd_name: impl Into<String>, domain_name: impl Into<String>) -> Self {
        Self {
            ddd_name: ddd_name.into(),
            domain_name: Some(domain_name.into()),
            cache_enabled: true,
        }
    }

    /// Creates a configuration with memoization turned off.
    ///
    /// Every call re-runs the full rule list.
    #[must_use]
    pub fn uncached() -> Self {
        Self {
            cache_enabled: false,
            ..Self::default()
        }
    }

    /// Builder method to set the DDD name.
    #[must_use]
    pub fn with_ddd_name(mut self, name: impl Into<String>) -> Self {
        self.ddd_name = name.into();
        self
    }

    /// Builder method to set the domain name.
    #[must_use]
    pub fn with_domain_name(mut self, name: impl Into<String>) -> Self {
        self.domain_name = Some(name.into());
        self
    }

    /// Builder method to enable/disable the parse cache.
    #[must_use]
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }
}
