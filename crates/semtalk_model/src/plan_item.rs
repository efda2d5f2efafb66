//! Plan items: the procedural steps of a dialogue plan.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::SemVec;
use crate::goal::Goal;
use crate::ontology::Action;
use crate::proposition::Proposition;
use crate::question::Question;
use crate::semantic::SemanticObject;

/// How a service action is confirmed before it is invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Preconfirmation {
    /// Ask the user whether to proceed.
    Interrogative,
    /// Tell the user the action is about to happen.
    Assertive,
}

/// Options of an `invoke_service_action` plan item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceActionOptions {
    /// Preconfirmation style; none by default.
    pub preconfirm: Option<Preconfirmation>,
    /// Confirm after the action; off by default.
    pub postconfirm: bool,
    /// Downdate the plan once the action is invoked; on by default.
    pub downdate_plan: bool,
}

impl Default for ServiceActionOptions {
    fn default() -> Self {
        Self {
            preconfirm: None,
            postconfirm: false,
            downdate_plan: true,
        }
    }
}

/// A single plan step.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlanItem {
    /// `findout(Q)`
    Findout {
        /// The configured domain name, if any.
        domain_name: Option<String>,
        /// The question to find out.
        question: Question,
    },
    /// `raise(Q)`
    Raise {
        /// The configured domain name, if any.
        domain_name: Option<String>,
        /// The question to raise.
        question: Question,
    },
    /// `bind(Q)`
    Bind(Question),
    /// `respond(Q)`
    Respond(Question),
    /// `consultDB(Q)`
    ConsultDb(Question),
    /// `do(action)`
    Do(Action),
    /// `jumpto(goal)`
    JumpTo(Goal),
    /// `if C then A else B`; either branch may be empty.
    IfThenElse {
        /// The condition.
        condition: Proposition,
        /// Items run when the condition holds.
        consequent: SemVec<SemanticObject>,
        /// Items run otherwise.
        alternative: SemVec<SemanticObject>,
    },
    /// `forget_all`
    ForgetAll,
    /// `forget(P)`
    Forget(Arc<SemanticObject>),
    /// `forget_issue(Q)`
    ForgetIssue(Arc<SemanticObject>),
    /// `assume(P)`
    Assume(Proposition),
    /// `assume_shared(P)`
    AssumeShared(Proposition),
    /// `assume_issue(Q)`
    AssumeIssue(Arc<SemanticObject>),
    /// `signal_action_completion`
    GoalPerformed,
    /// `signal_action_failure(reason)`
    GoalAborted {
        /// Failure reason, verbatim.
        reason: String,
    },
    /// `log("message")`
    Log {
        /// The message, without quotes.
        message: String,
    },
    /// `invoke_service_query(Q)`
    InvokeServiceQuery {
        /// The issue to query.
        issue: Arc<SemanticObject>,
        /// Minimum number of results.
        min_results: u32,
        /// Maximum number of results.
        max_results: u32,
    },
    /// `invoke_service_action(name, {..})`
    InvokeServiceAction {
        /// Name of the owning ontology.
        ontology_name: String,
        /// The service action.
        service_action: String,
        /// Confirmation options.
        options: ServiceActionOptions,
    },
}

impl PlanItem {
    /// The question of a question-raising plan item.
    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Findout { question, .. }
            | Self::Raise { question, .. }
            | Self::Bind(question)
            | Self::Respond(question)
            | Self::ConsultDb(question) => Some(question),
            _ => None,
        }
    }

    /// The keyword this plan item is written with.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Findout { .. } => "findout",
            Self::Raise { .. } => "raise",
            Self::Bind(_) => "bind",
            Self::Respond(_) => "respond",
            Self::ConsultDb(_) => "consultDB",
            Self::Do(_) => "do",
            Self::JumpTo(_) => "jumpto",
            Self::IfThenElse { .. } => "if_then_else",
            Self::ForgetAll => "forget_all",
            Self::Forget(_) => "forget",
            Self::ForgetIssue(_) => "forget_issue",
            Self::Assume(_) => "assume",
            Self::AssumeShared(_) => "assume_shared",
            Self::AssumeIssue(_) => "assume_issue",
            Self::GoalPerformed => "signal_action_completion",
            Self::GoalAborted { .. } => "signal_action_failure",
            Self::Log { .. } => "log",
            Self::InvokeServiceQuery { .. } => "invoke_service_query",
            Self::InvokeServiceAction { .. } => "invoke_service_action",
        }
    }
}
