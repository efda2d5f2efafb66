//! Plan-item and goal grammar.

use std::sync::Arc;

use semtalk_model::{
    Goal, PlanItem, Preconfirmation, SemVec, SemanticObject, ServiceActionOptions, Speaker,
};
use tracing::debug;

use super::{Reject, RuleResult, fail, parameters, proposition, value};
use crate::error::GrammarErrorKind;
use crate::parser::Parser;
use crate::scan::{self, IfThenElseShape};

fn call<'a>(input: &'a str, keyword: &str) -> RuleResult<&'a str> {
    scan::call(input, keyword).ok_or(Reject::NoMatch)
}

// ============================================================================
// Question-taking plan items
// ============================================================================

pub(crate) fn findout(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let question = proposition::question(parser, call(input, "findout")?)?;
    Ok(PlanItem::Findout {
        domain_name: parser.config().domain_name.clone(),
        question,
    }
    .into())
}

pub(crate) fn raise(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let question = proposition::question(parser, call(input, "raise")?)?;
    Ok(PlanItem::Raise {
        domain_name: parser.config().domain_name.clone(),
        question,
    }
    .into())
}

pub(crate) fn bind(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let question = proposition::question(parser, call(input, "bind")?)?;
    Ok(PlanItem::Bind(question).into())
}

pub(crate) fn respond(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let question = proposition::question(parser, call(input, "respond")?)?;
    Ok(PlanItem::Respond(question).into())
}

pub(crate) fn consult_db(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let question = proposition::question(parser, call(input, "consultDB")?)?;
    Ok(PlanItem::ConsultDb(question).into())
}

// ============================================================================
// Control
// ============================================================================

/// `do(action)`.
pub(crate) fn do_item(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = call(input, "do")?;
    if !scan::is_word(inner) {
        return Err(Reject::NoMatch);
    }
    let action = value::action(parser, inner)?;
    Ok(PlanItem::Do(action).into())
}

/// `if <condition> then <consequent> else <alternative>`.
pub(crate) fn if_then_else(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let shape = IfThenElseShape::scan(input).ok_or(Reject::NoMatch)?;
    let condition = proposition::proposition(parser, shape.condition)?;
    let consequent = branch(parser, shape.consequent)?;
    let alternative = branch(parser, shape.alternative)?;
    Ok(PlanItem::IfThenElse {
        condition,
        consequent,
        alternative,
    }
    .into())
}

fn branch(parser: &mut Parser, text: &str) -> RuleResult<SemVec<SemanticObject>> {
    let text = text.trim();
    if text.is_empty() {
        Ok(SemVec::new())
    } else {
        Ok(SemVec::new().push_back(parser.parse(text)?))
    }
}

pub(crate) fn jumpto(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let target = goal(parser, call(input, "jumpto")?)?;
    Ok(PlanItem::JumpTo(target).into())
}

pub(crate) fn forget_all(_parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    match input {
        "forget_all" => Ok(PlanItem::ForgetAll.into()),
        _ => Err(Reject::NoMatch),
    }
}

pub(crate) fn forget(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let fact = parser.parse(call(input, "forget")?)?;
    Ok(PlanItem::Forget(Arc::new(fact)).into())
}

pub(crate) fn forget_issue(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let issue = parser.parse(call(input, "forget_issue")?)?;
    Ok(PlanItem::ForgetIssue(Arc::new(issue)).into())
}

pub(crate) fn assume(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let fact = proposition::proposition(parser, call(input, "assume")?)?;
    Ok(PlanItem::Assume(fact).into())
}

pub(crate) fn assume_shared(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let fact = proposition::proposition(parser, call(input, "assume_shared")?)?;
    Ok(PlanItem::AssumeShared(fact).into())
}

pub(crate) fn assume_issue(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let issue = parser.parse(call(input, "assume_issue")?)?;
    Ok(PlanItem::AssumeIssue(Arc::new(issue)).into())
}

pub(crate) fn signal_action_completion(
    _parser: &mut Parser,
    input: &str,
) -> RuleResult<SemanticObject> {
    match input {
        "signal_action_completion" => Ok(PlanItem::GoalPerformed.into()),
        _ => Err(Reject::NoMatch),
    }
}

pub(crate) fn signal_action_failure(
    _parser: &mut Parser,
    input: &str,
) -> RuleResult<SemanticObject> {
    let reason = call(input, "signal_action_failure")?;
    if reason.is_empty() {
        return Err(Reject::NoMatch);
    }
    Ok(PlanItem::GoalAborted {
        reason: reason.to_string(),
    }
    .into())
}

/// `log("message")`.
pub(crate) fn log(_parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let message = scan::double_quoted(call(input, "log")?).ok_or(Reject::NoMatch)?;
    if message.is_empty() {
        return Err(Reject::NoMatch);
    }
    Ok(PlanItem::Log {
        message: message.to_string(),
    }
    .into())
}

// ============================================================================
// Service invocation
// ============================================================================

pub(crate) fn invoke_service_query(
    parser: &mut Parser,
    input: &str,
) -> RuleResult<SemanticObject> {
    service_query(parser, call(input, "invoke_service_query")?)
}

/// Deprecated spelling of `invoke_service_query`.
pub(crate) fn dev_query(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = call(input, "dev_query")?;
    debug!(input, "deprecated spelling dev_query, use invoke_service_query");
    service_query(parser, inner)
}

fn service_query(parser: &mut Parser, inner: &str) -> RuleResult<SemanticObject> {
    if inner.is_empty() || inner.contains(',') {
        return Err(Reject::NoMatch);
    }
    let issue = parser.parse(inner)?;
    Ok(PlanItem::InvokeServiceQuery {
        issue: Arc::new(issue),
        min_results: 1,
        max_results: 1,
    }
    .into())
}

pub(crate) fn invoke_service_action(
    parser: &mut Parser,
    input: &str,
) -> RuleResult<SemanticObject> {
    service_action(parser, call(input, "invoke_service_action")?)
}

/// Deprecated spelling of `invoke_service_action`.
pub(crate) fn dev_perform(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = call(input, "dev_perform")?;
    debug!(input, "deprecated spelling dev_perform, use invoke_service_action");
    service_action(parser, inner)
}

/// `<name>, {key=value, ...}`.
fn service_action(parser: &mut Parser, inner: &str) -> RuleResult<SemanticObject> {
    let (name, block) = scan::split_first_top_level(inner, ',').ok_or(Reject::NoMatch)?;
    let entries = scan::braced(block).ok_or(Reject::NoMatch)?;
    if !scan::is_word(name) {
        return Err(Reject::NoMatch);
    }
    let options = service_action_options(entries)?;
    Ok(PlanItem::InvokeServiceAction {
        ontology_name: parser.ontology_name().to_string(),
        service_action: name.to_string(),
        options,
    }
    .into())
}

type OptionField = fn(&mut ServiceActionOptions, &str) -> Option<()>;

static SERVICE_ACTION_FIELDS: &[(&str, OptionField)] = &[
    ("preconfirm", set_preconfirm),
    ("postconfirm", set_postconfirm),
    ("downdate_plan", set_downdate_plan),
];

fn set_preconfirm(options: &mut ServiceActionOptions, value: &str) -> Option<()> {
    options.preconfirm = Some(match value {
        "interrogative" => Preconfirmation::Interrogative,
        "assertive" => Preconfirmation::Assertive,
        _ => return None,
    });
    Some(())
}

fn set_postconfirm(options: &mut ServiceActionOptions, value: &str) -> Option<()> {
    options.postconfirm = parameters::boolean(value)?;
    Some(())
}

fn set_downdate_plan(options: &mut ServiceActionOptions, value: &str) -> Option<()> {
    options.downdate_plan = parameters::boolean(value)?;
    Some(())
}

fn service_action_options(entries: &str) -> RuleResult<ServiceActionOptions> {
    let mut options = ServiceActionOptions::default();
    for entry in scan::split_top_level(entries, ',') {
        let Some((key, value)) = scan::split_pair(entry) else {
            return fail(GrammarErrorKind::MalformedParameter {
                text: entry.to_string(),
            });
        };
        let Some((_, apply)) = SERVICE_ACTION_FIELDS.iter().find(|(name, _)| *name == key) else {
            return fail(GrammarErrorKind::UnsupportedParameter {
                key: key.to_string(),
                value: value.to_string(),
            });
        };
        if apply(&mut options, value).is_none() {
            return fail(GrammarErrorKind::InvalidParameter {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(options)
}

// ============================================================================
// Goals
// ============================================================================

pub(crate) fn goal_rule(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    goal(parser, input).map(SemanticObject::Goal)
}

/// `resolve(Q)`, `resolve_user(Q)`, `perform(A)` or `handle(name)`.
pub(crate) fn goal(parser: &mut Parser, input: &str) -> RuleResult<Goal> {
    if let Some(inner) = scan::call(input, "resolve") {
        let question = proposition::question(parser, inner)?;
        return Ok(Goal::Resolve {
            question,
            speaker: Speaker::Sys,
        });
    }
    if let Some(inner) = scan::call(input, "resolve_user") {
        let question = proposition::question(parser, inner)?;
        return Ok(Goal::Resolve {
            question,
            speaker: Speaker::Usr,
        });
    }
    if let Some(inner) = scan::call(input, "perform") {
        return Ok(Goal::Perform(value::action(parser, inner)?));
    }
    if let Some(inner) = scan::call(input, "handle") {
        if !inner.is_empty() {
            return Ok(Goal::Handle {
                ontology_name: parser.ontology_name().to_string(),
                service_action: inner.to_string(),
            });
        }
    }
    Err(Reject::NoMatch)
}
