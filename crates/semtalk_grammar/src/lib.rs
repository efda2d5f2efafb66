//! Parser for the semtalk dialogue meta-language.
//!
//! This crate provides:
//! - [`Parser`] - The dispatch/cache engine: `parse`, `parse_parameters` and
//!   `clear`
//! - [`ParserConfig`] - Domain naming and cache settings
//! - [`GrammarError`] - Fatal parse errors with a trail of nested inputs
//! - [`ParameterValue`] - Typed values of `key=value` parameter blocks
//!
//! # Example
//!
//! ```
//! use semtalk_grammar::Parser;
//! use semtalk_model::{SemanticObject, SimpleOntology, Sort};
//!
//! let ontology = SimpleOntology::new("travel").with_predicate("price", Sort::Real);
//! let mut parser = Parser::with_ontology(ontology);
//!
//! let object = parser.parse("ask(?X.price(X))").unwrap();
//! assert!(matches!(object, SemanticObject::Move(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod config;
pub mod error;
mod grammar;
pub mod parser;
pub mod scan;

pub use cache::{CacheStats, ParseCache};
pub use config::ParserConfig;
pub use error::{GrammarError, GrammarErrorKind, ParseContext, Result};
pub use grammar::parameters::{GraphicalType, ParameterValue, QuestionSource, SortOrder};
pub use parser::{Parameters, Parser};
