//! The dispatch/cache engine.
//!
//! [`Parser::parse`] looks the input up in the cache, and on a miss tries
//! every production in priority order, keeping the first that succeeds. The
//! winning object is cached under the exact input string. Grammar errors
//! raised by a matching production abort the parse and are re-wrapped with
//! each enclosing input on the way out.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use semtalk_model::{Ontology, SemanticObject};
use tracing::{debug, trace};

use crate::cache::{CacheStats, ParseCache};
use crate::config::ParserConfig;
use crate::error::{GrammarError, GrammarErrorKind, Result};
use crate::grammar::parameters::{self, ParameterValue};
use crate::grammar::{RULES, Reject};

/// A parameter block, keyed by parameter name.
pub type Parameters = BTreeMap<String, ParameterValue>;

/// Parser for meta-language strings, bound to one ontology.
pub struct Parser {
    ontology: Arc<dyn Ontology + Send + Sync>,
    config: ParserConfig,
    cache: ParseCache,
}

impl Parser {
    /// Creates a parser over a shared ontology.
    #[must_use]
    pub fn new(ontology: Arc<dyn Ontology + Send + Sync>, config: ParserConfig) -> Self {
        Self {
            ontology,
            config,
            cache: ParseCache::new(),
        }
    }

    /// Creates a parser that owns its ontology, with default configuration.
    #[must_use]
    pub fn with_ontology(ontology: impl Ontology + Send + Sync + 'static) -> Self {
        Self::new(Arc::new(ontology), ParserConfig::default())
    }

    /// The bound ontology.
    #[must_use]
    pub fn ontology(&self) -> &dyn Ontology {
        self.ontology.as_ref()
    }

    /// Name of the bound ontology.
    #[must_use]
    pub fn ontology_name(&self) -> &str {
        self.ontology.name()
    }

    /// The parser's configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Cache counters.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Parses `input` into the semantic object it denotes.
    ///
    /// Repeated calls with the same input return equal objects; each call
    /// returns its own copy.
    ///
    /// # Errors
    /// Returns a [`GrammarError`] if no production matches, if a matching
    /// production finds its arguments malformed, if a deprecated spelling is
    /// used, or if the ontology reports an inconsistency.
    pub fn parse(&mut self, input: &str) -> Result<SemanticObject> {
        if self.config.cache_enabled {
            if let Some(hit) = self.cache.get(input) {
                return Ok(hit);
            }
        }
        let object = self.dispatch(input).map_err(|err| err.within(input))?;
        if self.config.cache_enabled {
            self.cache.insert(input, object.clone());
        }
        Ok(object)
    }

    /// Parses a `key=value, ...` parameter block. Surrounding braces are
    /// optional.
    ///
    /// # Errors
    /// Returns a [`GrammarError`] naming the key for an unsupported key or a
    /// value its grammar rejects.
    pub fn parse_parameters(&mut self, input: &str) -> Result<Parameters> {
        parameters::parse_block(self, input).map_err(|err| err.within(input))
    }

    /// Discards every cached parse. Objects already returned are unaffected.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Runs the rule list over `input`, bypassing the cache.
    pub(crate) fn dispatch(&mut self, input: &str) -> Result<SemanticObject> {
        let outcome = RULES.iter().find_map(|(name, rule)| match rule(self, input) {
            Err(Reject::NoMatch) => None,
            outcome => Some((*name, outcome)),
        });
        match outcome {
            Some((name, Ok(object))) => {
                trace!(rule = name, input, ddd = %self.config.ddd_name, "rule matched");
                Ok(object)
            }
            Some((name, Err(Reject::Grammar(err)))) => {
                debug!(rule = name, input, %err, "rule failed");
                Err(err)
            }
            // find_map never yields NoMatch
            Some((_, Err(Reject::NoMatch))) | None => {
                Err(GrammarError::new(GrammarErrorKind::NoRuleMatched {
                    ontology: self.ontology.describe(),
                }))
            }
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("ontology", &self.ontology.describe())
            .field("config", &self.config)
            .field("cache", &self.cache.stats())
            .finish()
    }
}
