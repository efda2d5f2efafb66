//! Semantic objects, ontology binding, and persistent collections for semtalk.
//!
//! This crate provides:
//! - [`SemanticObject`] - The closed catalogue of everything a meta-language
//!   string can denote
//! - [`Proposition`], [`Question`], [`Goal`], [`PlanItem`], [`Move`] and
//!   [`IcmMove`] - The dialogue-level value types
//! - [`Ontology`] - The capability set the parser needs from a domain, with
//!   an in-memory [`SimpleOntology`]
//! - [`OntologyError`] - Errors reported by an ontology
//! - Persistent collections ([`SemVec`], [`SemSet`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod collections;
pub mod error;
pub mod goal;
pub mod individual;
pub mod moves;
pub mod ontology;
pub mod plan_item;
pub mod polarity;
pub mod proposition;
pub mod question;
pub mod semantic;
pub mod sort;

pub use collections::{SemSet, SemVec};
pub use error::{OntologyError, Result};
pub use goal::Goal;
pub use individual::{Individual, IndividualValue};
pub use moves::{IcmContent, IcmKind, IcmMove, IcmPolarity, Move, MoveContent, RealizationData};
pub use ontology::{Action, Ontology, Predicate, SimpleOntology};
pub use plan_item::{PlanItem, Preconfirmation, ServiceActionOptions};
pub use polarity::{Polarity, Speaker, UnknownSpeaker};
pub use proposition::{Proposition, PropositionSet};
pub use question::{ImplicationLambda, LambdaAbstraction, Question};
pub use semantic::{ActionStatus, SemanticObject, ServiceActionOutcome};
pub use sort::Sort;
