//! The closed catalogue of semantic objects the parser produces.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::{SemSet, SemVec};
use crate::goal::Goal;
use crate::individual::Individual;
use crate::moves::{IcmMove, Move};
use crate::ontology::{Action, Predicate};
use crate::plan_item::PlanItem;
use crate::proposition::{Proposition, PropositionSet};
use crate::question::{LambdaAbstraction, Question};

/// Completion status of an action. Only `done` exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionStatus {
    /// `done`
    Done,
}

/// How a service action ended.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ServiceActionOutcome {
    /// `SuccessfulServiceAction()`
    Successful,
    /// `FailedServiceAction(reason)`
    Failed {
        /// Failure reason token.
        reason: String,
    },
}

impl ServiceActionOutcome {
    /// Returns true for [`ServiceActionOutcome::Successful`].
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Successful)
    }
}

/// Anything a meta-language string can denote.
///
/// Children are held behind `Arc` or in persistent collections, so cloning
/// a parsed object shares structure with the original.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SemanticObject {
    /// A dialogue move.
    Move(Move),
    /// An ICM move.
    Icm(IcmMove),
    /// A proposition.
    Proposition(Proposition),
    /// A question.
    Question(Question),
    /// A plan item.
    PlanItem(PlanItem),
    /// A goal.
    Goal(Goal),
    /// A lambda abstraction such as `X.price(X)`.
    Lambda(LambdaAbstraction),
    /// An individual.
    Individual(Individual),
    /// A bare predicate.
    Predicate(Predicate),
    /// A bare action.
    Action(Action),
    /// `done`
    ActionStatus(ActionStatus),
    /// `SuccessfulServiceAction()` or `FailedServiceAction(..)`.
    ServiceOutcome(ServiceActionOutcome),
    /// `{a, b}`
    Set(SemSet<SemanticObject>),
    /// `[a, b]`
    Sequence(SemVec<SemanticObject>),
    /// `yes`
    Yes,
    /// `no`
    No,
    /// A quoted string, without its quotes.
    Text(Arc<str>),
}

impl SemanticObject {
    /// A short name for the variant, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::Icm(_) => "ICM move",
            Self::Proposition(p) => p.kind_name(),
            Self::Question(q) => q.kind_name(),
            Self::PlanItem(_) => "plan item",
            Self::Goal(_) => "goal",
            Self::Lambda(_) => "lambda abstraction",
            Self::Individual(_) => "individual",
            Self::Predicate(_) => "predicate",
            Self::Action(_) => "action",
            Self::ActionStatus(_) => "action status",
            Self::ServiceOutcome(_) => "service action outcome",
            Self::Set(_) => "set",
            Self::Sequence(_) => "sequence",
            Self::Yes => "yes",
            Self::No => "no",
            Self::Text(_) => "string",
        }
    }

    /// The wrapped proposition, if any.
    #[must_use]
    pub const fn as_proposition(&self) -> Option<&Proposition> {
        match self {
            Self::Proposition(p) => Some(p),
            _ => None,
        }
    }

    /// The wrapped question, if any.
    #[must_use]
    pub const fn as_question(&self) -> Option<&Question> {
        match self {
            Self::Question(q) => Some(q),
            _ => None,
        }
    }

    /// The wrapped move, if any.
    #[must_use]
    pub const fn as_move(&self) -> Option<&Move> {
        match self {
            Self::Move(m) => Some(m),
            _ => None,
        }
    }

    /// The wrapped quoted string, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Returns true for `yes` and `no`.
    #[must_use]
    pub const fn is_yes_no(&self) -> bool {
        matches!(self, Self::Yes | Self::No)
    }
}

impl From<Proposition> for SemanticObject {
    fn from(p: Proposition) -> Self {
        Self::Proposition(p)
    }
}

impl From<PropositionSet> for SemanticObject {
    fn from(set: PropositionSet) -> Self {
        Self::Proposition(Proposition::Set(set))
    }
}

impl From<Question> for SemanticObject {
    fn from(q: Question) -> Self {
        Self::Question(q)
    }
}

impl From<Move> for SemanticObject {
    fn from(m: Move) -> Self {
        Self::Move(m)
    }
}

impl From<IcmMove> for SemanticObject {
    fn from(icm: IcmMove) -> Self {
        Self::Icm(icm)
    }
}

impl From<PlanItem> for SemanticObject {
    fn from(item: PlanItem) -> Self {
        Self::PlanItem(item)
    }
}

impl From<Goal> for SemanticObject {
    fn from(goal: Goal) -> Self {
        Self::Goal(goal)
    }
}

impl From<Individual> for SemanticObject {
    fn from(individual: Individual) -> Self {
        Self::Individual(individual)
    }
}

impl fmt::Display for SemanticObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual(i) => write!(f, "{i}"),
            Self::Predicate(p) => write!(f, "{p}"),
            Self::Action(a) => write!(f, "{a}"),
            Self::Yes => f.write_str("yes"),
            Self::No => f.write_str("no"),
            Self::Text(s) => write!(f, "{s:?}"),
            other => f.write_str(other.kind_name()),
        }
    }
}
