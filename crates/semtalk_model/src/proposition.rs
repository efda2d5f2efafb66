//! Propositions.

use std::sync::Arc;

use crate::collections::{SemSet, SemVec};
use crate::error::{OntologyError, Result};
use crate::goal::Goal;
use crate::individual::Individual;
use crate::ontology::{Action, Predicate};
use crate::polarity::{Polarity, Speaker};
use crate::semantic::{ActionStatus, SemanticObject, ServiceActionOutcome};

/// An ordered set of alternative propositions, written `set(p(a), q(b))`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropositionSet {
    /// The alternatives, in the order written.
    pub propositions: SemVec<Proposition>,
    /// Polarity of the whole set.
    pub polarity: Polarity,
}

impl PropositionSet {
    /// Creates a proposition set.
    #[must_use]
    pub fn new(propositions: impl Into<SemVec<Proposition>>, polarity: Polarity) -> Self {
        Self {
            propositions: propositions.into(),
            polarity,
        }
    }
}

/// A logical proposition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Proposition {
    /// Predicate application: `dest_city(paris)`, `~need_visa`.
    Predicate {
        /// The applied predicate.
        predicate: Predicate,
        /// The argument; absent for boolean predicates.
        individual: Option<Individual>,
        /// Polarity.
        polarity: Polarity,
    },
    /// `goal(perform(buy))`.
    Goal {
        /// The goal.
        goal: Arc<Goal>,
        /// Polarity.
        polarity: Polarity,
    },
    /// `preconfirmed(buy, [dest_city(paris)])`.
    Preconfirmation {
        /// Name of the owning ontology.
        ontology_name: String,
        /// The service action being preconfirmed.
        service_action: String,
        /// Argument propositions, in order.
        arguments: SemVec<Proposition>,
        /// Polarity.
        polarity: Polarity,
    },
    /// `prereported(buy, [dest_city(paris)])`.
    Prereport {
        /// Name of the owning ontology.
        ontology_name: String,
        /// The service action being prereported.
        service_action: String,
        /// Argument propositions; order is not significant.
        arguments: SemSet<Proposition>,
    },
    /// `service_action_started(buy)`.
    ServiceActionStarted {
        /// Name of the owning ontology.
        ontology_name: String,
        /// The service action.
        service_action: String,
    },
    /// `service_action_terminated(buy)`.
    ServiceActionTerminated {
        /// Name of the owning ontology.
        ontology_name: String,
        /// The service action.
        service_action: String,
    },
    /// `ServiceResultProposition(buy, [..], SuccessfulServiceAction())`.
    ServiceResult {
        /// Name of the owning ontology.
        ontology_name: String,
        /// The service action.
        service_action: String,
        /// Argument propositions, in order.
        arguments: SemVec<Proposition>,
        /// How the action ended.
        result: ServiceActionOutcome,
    },
    /// `rejected(set(..), reason)`.
    Rejected {
        /// The rejected combination.
        combination: Arc<SemanticObject>,
        /// Optional reason token.
        reason: Option<String>,
        /// Polarity.
        polarity: Polarity,
    },
    /// `set(..)`.
    Set(PropositionSet),
    /// `und(USR, dest_city(paris))`.
    Understanding {
        /// Whose utterance was understood; `None` when written `None`.
        speaker: Option<Speaker>,
        /// What was understood.
        content: Arc<SemanticObject>,
        /// Polarity.
        polarity: Polarity,
    },
    /// `resolved(?X.price(X))`.
    Resolvedness {
        /// The resolved issue.
        issue: Arc<SemanticObject>,
    },
    /// `know_answer(?X.price(X))`.
    KnowledgePrecondition {
        /// The embedded question.
        question: Arc<SemanticObject>,
        /// Polarity.
        polarity: Polarity,
    },
    /// `action_status(buy, done)`.
    ActionStatus {
        /// The action.
        action: Action,
        /// Its status.
        status: ActionStatus,
    },
    /// `implies(p(a), q(b))`.
    Implication {
        /// The antecedent.
        antecedent: Arc<Proposition>,
        /// The consequent.
        consequent: Arc<Proposition>,
    },
}

impl Proposition {
    /// Creates a predicate proposition, checking that the individual's sort
    /// matches the predicate's.
    ///
    /// # Errors
    /// Returns [`OntologyError::SortMismatch`] if the sorts differ.
    pub fn predicate(
        predicate: Predicate,
        individual: Option<Individual>,
        polarity: Polarity,
    ) -> Result<Self> {
        if let Some(individual) = &individual {
            if individual.sort != predicate.sort {
                return Err(OntologyError::SortMismatch {
                    predicate: predicate.name.clone(),
                    predicate_sort: predicate.sort.clone(),
                    individual: individual.to_string(),
                    individual_sort: individual.sort.clone(),
                });
            }
        }
        Ok(Self::Predicate {
            predicate,
            individual,
            polarity,
        })
    }

    /// Returns this proposition's polarity. Variants without a polarity
    /// marker are positive.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        match self {
            Self::Predicate { polarity, .. }
            | Self::Goal { polarity, .. }
            | Self::Preconfirmation { polarity, .. }
            | Self::Rejected { polarity, .. }
            | Self::Understanding { polarity, .. }
            | Self::KnowledgePrecondition { polarity, .. } => *polarity,
            Self::Set(set) => set.polarity,
            Self::Prereport { .. }
            | Self::ServiceActionStarted { .. }
            | Self::ServiceActionTerminated { .. }
            | Self::ServiceResult { .. }
            | Self::Resolvedness { .. }
            | Self::ActionStatus { .. }
            | Self::Implication { .. } => Polarity::Pos,
        }
    }

    /// Returns true unless the proposition is negated.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.polarity().is_positive()
    }

    /// The applied predicate, for predicate propositions.
    #[must_use]
    pub fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            Self::Predicate { predicate, .. } => Some(predicate),
            _ => None,
        }
    }

    /// A short name for the variant, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Predicate { .. } => "predicate proposition",
            Self::Goal { .. } => "goal proposition",
            Self::Preconfirmation { .. } => "preconfirmation proposition",
            Self::Prereport { .. } => "prereport proposition",
            Self::ServiceActionStarted { .. } => "service action started proposition",
            Self::ServiceActionTerminated { .. } => "service action terminated proposition",
            Self::ServiceResult { .. } => "service result proposition",
            Self::Rejected { .. } => "rejected proposition",
            Self::Set(_) => "proposition set",
            Self::Understanding { .. } => "understanding proposition",
            Self::Resolvedness { .. } => "resolvedness proposition",
            Self::KnowledgePrecondition { .. } => "knowledge precondition proposition",
            Self::ActionStatus { .. } => "action status proposition",
            Self::Implication { .. } => "implication proposition",
        }
    }
}
