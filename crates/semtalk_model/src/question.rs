//! Questions and the lambda abstractions they are built from.

use std::sync::Arc;

use crate::ontology::Predicate;
use crate::proposition::{Proposition, PropositionSet};
use crate::semantic::SemanticObject;

/// `X.implies(A, p(X))`: which value of `p` follows from `A`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImplicationLambda {
    /// Name of the owning ontology.
    pub ontology_name: String,
    /// The antecedent proposition.
    pub antecedent: Arc<Proposition>,
    /// The predicate of the abstracted consequent.
    pub consequent_predicate: Predicate,
}

/// A proposition with one free variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LambdaAbstraction {
    /// `X.price(X)`.
    Predicate(Predicate),
    /// `X.goal(X)`.
    Goal,
    /// `X.implies(A, p(X))`.
    Implication(ImplicationLambda),
}

/// A question, written with a leading `?`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Question {
    /// `?dest_city(paris)`.
    YesNo(Arc<Proposition>),
    /// `?X.price(X)` or `?X.goal(X)`.
    Wh(LambdaAbstraction),
    /// `?set(p(a), q(b))`.
    Alt(PropositionSet),
    /// `?X.implies(A, p(X))`.
    Consequent(ImplicationLambda),
    /// `?know_answer(?X.price(X))`: wraps the embedded issue.
    KnowledgePrecondition(Arc<SemanticObject>),
}

impl Question {
    /// The predicate asked about, for wh-questions on a predicate.
    #[must_use]
    pub fn wh_predicate(&self) -> Option<&Predicate> {
        match self {
            Self::Wh(LambdaAbstraction::Predicate(predicate)) => Some(predicate),
            _ => None,
        }
    }

    /// A short name for the variant, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::YesNo(_) => "yes/no question",
            Self::Wh(_) => "wh-question",
            Self::Alt(_) => "alternative question",
            Self::Consequent(_) => "consequent question",
            Self::KnowledgePrecondition(_) => "knowledge precondition question",
        }
    }
}
