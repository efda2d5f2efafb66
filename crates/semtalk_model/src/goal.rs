//! Dialogue goals.

use crate::ontology::Action;
use crate::polarity::Speaker;
use crate::question::Question;

/// A goal a plan can pursue.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Goal {
    /// `resolve(Q)` (system) or `resolve_user(Q)` (user).
    Resolve {
        /// The issue to resolve.
        question: Question,
        /// Who owns the issue.
        speaker: Speaker,
    },
    /// `perform(buy)`.
    Perform(Action),
    /// `handle(confirm_booking)`.
    Handle {
        /// Name of the owning ontology.
        ontology_name: String,
        /// The service action to handle.
        service_action: String,
    },
}

impl Goal {
    /// The question of a resolve goal.
    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Resolve { question, .. } => Some(question),
            _ => None,
        }
    }
}
