//! semtalk - Parser for a dialogue-domain meta-language
//!
//! This crate re-exports both layers of the semtalk system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: semtalk_grammar — Dispatch/cache engine, grammar families, parameters
//! Layer 0: semtalk_model   — Semantic objects, ontology binding, collections
//! ```

pub use semtalk_grammar as grammar;
pub use semtalk_model as model;

pub use semtalk_grammar::{GrammarError, Parser, ParserConfig};
pub use semtalk_model::{Ontology, SemanticObject, SimpleOntology};
