//! Grammar families and the fixed rule priority list.
//!
//! A rule is a plain function from an input string to a semantic object. It
//! answers [`Reject::NoMatch`] when the input does not have its surface shape,
//! and once the shape matches it either succeeds or fails with a
//! [`GrammarError`]. The dispatch engine tries [`RULES`] in order and keeps
//! the first success.

pub(crate) mod moves;
pub mod parameters;
pub(crate) mod plan;
pub(crate) mod proposition;
pub(crate) mod value;

use semtalk_model::{OntologyError, SemanticObject};

use crate::error::{GrammarError, GrammarErrorKind};
use crate::parser::Parser;

/// Why a rule produced no object.
#[derive(Debug)]
pub(crate) enum Reject {
    /// The input does not have this rule's shape; try the next rule.
    NoMatch,
    /// The shape matched but the input is malformed.
    Grammar(GrammarError),
}

impl From<GrammarError> for Reject {
    fn from(err: GrammarError) -> Self {
        Self::Grammar(err)
    }
}

impl From<OntologyError> for Reject {
    fn from(err: OntologyError) -> Self {
        Self::Grammar(err.into())
    }
}

/// Outcome of a single rule.
pub(crate) type RuleResult<T> = std::result::Result<T, Reject>;

/// A top-level grammar production.
pub(crate) type Rule = fn(&mut Parser, &str) -> RuleResult<SemanticObject>;

/// Fails the current rule with a grammar error.
pub(crate) fn fail<T>(kind: GrammarErrorKind) -> RuleResult<T> {
    Err(Reject::Grammar(GrammarError::new(kind)))
}

/// Every production, in priority order.
pub(crate) static RULES: &[(&str, Rule)] = &[
    // Moves
    ("decorated_move", moves::decorated_move),
    ("basic_move", moves::basic_move),
    ("request_move", moves::request_move),
    ("ask_move", moves::ask_move),
    ("answer_move", moves::answer_move),
    ("report_move", moves::report_move),
    ("prereport_move", moves::prereport_move),
    ("decorated_icm", moves::decorated_icm),
    ("icm", moves::icm_move),
    // Plan items and goals
    ("findout", plan::findout),
    ("do", plan::do_item),
    ("raise", plan::raise),
    ("bind", plan::bind),
    ("respond", plan::respond),
    ("consult_db", plan::consult_db),
    ("if_then_else", plan::if_then_else),
    ("jumpto", plan::jumpto),
    ("forget_all", plan::forget_all),
    ("forget", plan::forget),
    ("assume", plan::assume),
    ("assume_shared", plan::assume_shared),
    ("signal_action_completion", plan::signal_action_completion),
    ("signal_action_failure", plan::signal_action_failure),
    ("goal", plan::goal_rule),
    ("assume_issue", plan::assume_issue),
    ("log", plan::log),
    ("forget_issue", plan::forget_issue),
    ("invoke_service_query", plan::invoke_service_query),
    ("dev_query", plan::dev_query),
    ("invoke_service_action", plan::invoke_service_action),
    ("dev_perform", plan::dev_perform),
    // Propositions and questions
    ("question", proposition::question_rule),
    ("lambda_goal", proposition::lambda_goal),
    ("lambda_predicate", proposition::lambda_predicate),
    ("lambda_implication", proposition::lambda_implication),
    ("service_result", proposition::service_result),
    ("successful_service_action", proposition::successful_service_action),
    ("failed_service_action", proposition::failed_service_action),
    ("action_status", proposition::action_status),
    ("proposition", proposition::proposition_rule),
    // Values
    ("yes_no", value::yes_no),
    ("proposition_set", value::proposition_set_rule),
    ("predicate", value::predicate_rule),
    ("action", value::action_rule),
    ("individual", value::individual_rule),
    ("string", value::string),
    // Containers
    ("set", value::set),
    ("sequence", value::sequence),
];
