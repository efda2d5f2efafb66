//! Proposition, question and lambda-abstraction grammar.

use std::sync::Arc;

use semtalk_model::{
    ActionStatus, ImplicationLambda, LambdaAbstraction, Polarity, Proposition, Question,
    SemSet, SemVec, SemanticObject, ServiceActionOutcome, Speaker,
};
use tracing::debug;

use super::{Reject, RuleResult, fail, plan, value};
use crate::error::{GrammarError, GrammarErrorKind};
use crate::parser::Parser;
use crate::scan;

// ============================================================================
// Questions
// ============================================================================

pub(crate) fn question_rule(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    question(parser, input).map(SemanticObject::Question)
}

/// `?<content>`. The content is parsed once and classified by what it is.
pub(crate) fn question(parser: &mut Parser, input: &str) -> RuleResult<Question> {
    let inner = input.strip_prefix('?').ok_or(Reject::NoMatch)?;
    let content = parser.parse(inner)?;
    classify(content).ok_or(Reject::NoMatch)
}

fn classify(content: SemanticObject) -> Option<Question> {
    match content {
        SemanticObject::Proposition(Proposition::KnowledgePrecondition { question, .. }) => {
            Some(Question::KnowledgePrecondition(question))
        }
        SemanticObject::Proposition(Proposition::Set(set)) => Some(Question::Alt(set)),
        SemanticObject::Proposition(proposition) => Some(Question::YesNo(Arc::new(proposition))),
        SemanticObject::Lambda(LambdaAbstraction::Implication(lambda)) => {
            Some(Question::Consequent(lambda))
        }
        SemanticObject::Lambda(lambda) => Some(Question::Wh(lambda)),
        SemanticObject::Predicate(predicate) if predicate.sort.is_boolean() => {
            Some(Question::YesNo(Arc::new(Proposition::Predicate {
                predicate,
                individual: None,
                polarity: Polarity::Pos,
            })))
        }
        _ => None,
    }
}

// ============================================================================
// Lambda abstractions
// ============================================================================

pub(crate) fn lambda_goal(_parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    match input {
        "X.goal(X)" => Ok(SemanticObject::Lambda(LambdaAbstraction::Goal)),
        _ => Err(Reject::NoMatch),
    }
}

/// `X.<predicate>(X)`.
pub(crate) fn lambda_predicate(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let name = input
        .strip_prefix("X.")
        .and_then(|rest| rest.strip_suffix("(X)"))
        .ok_or(Reject::NoMatch)?;
    if name == "action" {
        debug!(input, "deprecated spelling ?X.action(X)");
        return Err(GrammarError::deprecated(
            "?X.action(X)".to_string(),
            "?X.goal(X)".to_string(),
            "question",
        )
        .into());
    }
    if !scan::is_word(name) {
        return Err(Reject::NoMatch);
    }
    let predicate = parser.ontology().predicate(name)?;
    Ok(SemanticObject::Lambda(LambdaAbstraction::Predicate(predicate)))
}

/// `X.implies(<antecedent>, <predicate>(X))`.
pub(crate) fn lambda_implication(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = scan::call(input, "X.implies").ok_or(Reject::NoMatch)?;
    let (antecedent, consequent) =
        scan::split_last_top_level(inner, ',').ok_or(Reject::NoMatch)?;
    let name = consequent.strip_suffix("(X)").ok_or(Reject::NoMatch)?;
    if !scan::is_word(name) {
        return Err(Reject::NoMatch);
    }
    let antecedent = proposition(parser, antecedent)?;
    let consequent_predicate = parser.ontology().predicate(name)?;
    Ok(SemanticObject::Lambda(LambdaAbstraction::Implication(
        ImplicationLambda {
            ontology_name: parser.ontology_name().to_string(),
            antecedent: Arc::new(antecedent),
            consequent_predicate,
        },
    )))
}

// ============================================================================
// Service results and action status
// ============================================================================

/// `ServiceResultProposition(<action>, [props], <outcome>)`.
pub(crate) fn service_result(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = scan::call(input, "ServiceResultProposition").ok_or(Reject::NoMatch)?;
    let [service_action, list, outcome] = scan::split_top_level(inner, ',')[..] else {
        return Err(Reject::NoMatch);
    };
    if !scan::is_word(service_action) {
        return Err(Reject::NoMatch);
    }
    let arguments = proposition_list(parser, list)?;
    let result = match parser.parse(outcome)? {
        SemanticObject::ServiceOutcome(result) => result,
        other => {
            return Err(
                GrammarError::unexpected("service action outcome", other.kind_name()).into(),
            );
        }
    };
    Ok(Proposition::ServiceResult {
        ontology_name: parser.ontology_name().to_string(),
        service_action: service_action.to_string(),
        arguments,
        result,
    }
    .into())
}

pub(crate) fn successful_service_action(
    _parser: &mut Parser,
    input: &str,
) -> RuleResult<SemanticObject> {
    match input {
        "SuccessfulServiceAction()" => Ok(SemanticObject::ServiceOutcome(
            ServiceActionOutcome::Successful,
        )),
        _ => Err(Reject::NoMatch),
    }
}

pub(crate) fn failed_service_action(
    _parser: &mut Parser,
    input: &str,
) -> RuleResult<SemanticObject> {
    let reason = scan::call(input, "FailedServiceAction").ok_or(Reject::NoMatch)?;
    if !scan::is_word(reason) {
        return Err(Reject::NoMatch);
    }
    Ok(SemanticObject::ServiceOutcome(ServiceActionOutcome::Failed {
        reason: reason.to_string(),
    }))
}

pub(crate) fn action_status(_parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    status(input).map(SemanticObject::ActionStatus)
}

fn status(input: &str) -> RuleResult<ActionStatus> {
    match input {
        "done" => Ok(ActionStatus::Done),
        _ => Err(Reject::NoMatch),
    }
}

// ============================================================================
// Propositions
// ============================================================================

type PropositionForm = fn(&mut Parser, &str) -> RuleResult<Proposition>;

static PROPOSITION_FORMS: &[PropositionForm] = &[
    service_action_terminated,
    service_action_started,
    preconfirmed,
    prereported,
    goal_proposition,
    rejected,
    implication,
    predicate_application,
    understanding,
    resolvedness,
    knowledge_precondition,
    action_status_proposition,
];

pub(crate) fn proposition_rule(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    proposition(parser, input).map(SemanticObject::Proposition)
}

/// Any proposition form. Diagnoses the deprecated `action(..)` and
/// `issue(..)` spellings when nothing else matches.
pub(crate) fn proposition(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    for form in PROPOSITION_FORMS {
        match form(parser, input) {
            Err(Reject::NoMatch) => {}
            outcome => return outcome,
        }
    }
    check_deprecated(input)?;
    Err(Reject::NoMatch)
}

fn check_deprecated(input: &str) -> RuleResult<()> {
    if let Some(action) = scan::call(input, "action").filter(|a| scan::is_word(a)) {
        debug!(input, "deprecated action proposition");
        return Err(GrammarError::deprecated(
            input.to_string(),
            format!("goal(perform({action}))"),
            "proposition",
        )
        .into());
    }
    if let Some(issue) = scan::call(input, "issue").filter(|i| !i.is_empty()) {
        debug!(input, "deprecated issue proposition");
        return Err(GrammarError::deprecated(
            input.to_string(),
            format!("goal(resolve({issue}))"),
            "proposition",
        )
        .into());
    }
    Ok(())
}

/// `[p(a), q(b)]`. Square brackets are required.
pub(crate) fn proposition_list(parser: &mut Parser, input: &str) -> RuleResult<SemVec<Proposition>> {
    let Some(inner) = scan::bracketed(input.trim()) else {
        return fail(GrammarErrorKind::ExpectedBrackets {
            found: input.to_string(),
        });
    };
    let mut propositions = Vec::new();
    for item in scan::split_top_level(inner, ',') {
        propositions.push(proposition(parser, item)?);
    }
    Ok(propositions.into())
}

fn service_action_terminated(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let service_action = scan::call(input, "service_action_terminated")
        .filter(|s| !s.is_empty())
        .ok_or(Reject::NoMatch)?;
    debug!(input, "deprecated service_action_terminated proposition");
    Ok(Proposition::ServiceActionTerminated {
        ontology_name: parser.ontology_name().to_string(),
        service_action: service_action.to_string(),
    })
}

fn service_action_started(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let service_action = scan::call(input, "service_action_started")
        .filter(|s| !s.is_empty())
        .ok_or(Reject::NoMatch)?;
    debug!(input, "deprecated service_action_started proposition");
    Ok(Proposition::ServiceActionStarted {
        ontology_name: parser.ontology_name().to_string(),
        service_action: service_action.to_string(),
    })
}

/// Splits `<action>, [props]` and parses the list.
fn action_and_arguments<'a>(
    parser: &mut Parser,
    inner: &'a str,
) -> RuleResult<(&'a str, SemVec<Proposition>)> {
    let (service_action, list) = scan::split_first_top_level(inner, ',').ok_or(Reject::NoMatch)?;
    if !scan::is_word(service_action) {
        return Err(Reject::NoMatch);
    }
    Ok((service_action, proposition_list(parser, list)?))
}

fn preconfirmed(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let (polarity, rest) = scan::polarity(input);
    let inner = scan::call(rest, "preconfirmed").ok_or(Reject::NoMatch)?;
    let (service_action, arguments) = action_and_arguments(parser, inner)?;
    Ok(Proposition::Preconfirmation {
        ontology_name: parser.ontology_name().to_string(),
        service_action: service_action.to_string(),
        arguments,
        polarity,
    })
}

fn prereported(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let inner = scan::call(input, "prereported").ok_or(Reject::NoMatch)?;
    let (service_action, arguments) = action_and_arguments(parser, inner)?;
    Ok(Proposition::Prereport {
        ontology_name: parser.ontology_name().to_string(),
        service_action: service_action.to_string(),
        arguments: arguments.into_iter().collect::<SemSet<_>>(),
    })
}

fn goal_proposition(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let (polarity, rest) = scan::polarity(input);
    let inner = scan::call(rest, "goal").ok_or(Reject::NoMatch)?;
    let goal = plan::goal(parser, inner)?;
    Ok(Proposition::Goal {
        goal: Arc::new(goal),
        polarity,
    })
}

/// `rejected(<combination>[, <reason>])`.
fn rejected(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let inner = scan::call(input, "rejected").ok_or(Reject::NoMatch)?;
    let (combination, reason) = match scan::split_first_top_level(inner, ',') {
        Some((combination, reason)) => (combination, Some(reason).filter(|r| !r.is_empty())),
        None => (inner, None),
    };
    if combination.is_empty() {
        return Err(Reject::NoMatch);
    }
    let combination = parser.parse(combination)?;
    Ok(Proposition::Rejected {
        combination: Arc::new(combination),
        reason: reason.map(str::to_string),
        polarity: Polarity::Pos,
    })
}

fn implication(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let inner = scan::call(input, "implies").ok_or(Reject::NoMatch)?;
    let [antecedent, consequent] = scan::split_top_level(inner, ',')[..] else {
        return Err(Reject::NoMatch);
    };
    let antecedent = proposition(parser, antecedent)?;
    let consequent = proposition(parser, consequent)?;
    Ok(Proposition::Implication {
        antecedent: Arc::new(antecedent),
        consequent: Arc::new(consequent),
    })
}

/// `[~]name(arg)`, `[~]name()` and `~name`.
///
/// The bare positive `name` is left to the predicate value rule.
fn predicate_application(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let (polarity, rest) = scan::polarity(input);
    let (name, argument) = match rest.find('(') {
        Some(open) => {
            let name = &rest[..open];
            (name, scan::call(rest, name).ok_or(Reject::NoMatch)?)
        }
        None if polarity == Polarity::Neg => (rest, ""),
        None => return Err(Reject::NoMatch),
    };
    if !scan::is_word(name) || !parser.ontology().has_predicate(name) {
        return Err(Reject::NoMatch);
    }
    let predicate = parser.ontology().predicate(name)?;
    let individual = if argument.is_empty() {
        if !predicate.sort.is_boolean() {
            return Err(Reject::NoMatch);
        }
        None
    } else {
        Some(value::individual(parser, argument)?)
    };
    Ok(Proposition::predicate(predicate, individual, polarity)?)
}

/// `[~]und(USR|SYS|MODEL|None, <content>)`.
fn understanding(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let (polarity, rest) = scan::polarity(input);
    let inner = scan::call(rest, "und").ok_or(Reject::NoMatch)?;
    let (speaker, content) = scan::split_first_top_level(inner, ',').ok_or(Reject::NoMatch)?;
    let speaker = match speaker {
        "None" => None,
        token => Some(token.parse::<Speaker>().map_err(|_| Reject::NoMatch)?),
    };
    if content.is_empty() {
        return Err(Reject::NoMatch);
    }
    let content = parser.parse(content)?;
    Ok(Proposition::Understanding {
        speaker,
        content: Arc::new(content),
        polarity,
    })
}

fn resolvedness(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let inner = scan::call(input, "resolved")
        .filter(|i| !i.is_empty())
        .ok_or(Reject::NoMatch)?;
    let issue = parser.parse(inner)?;
    Ok(Proposition::Resolvedness {
        issue: Arc::new(issue),
    })
}

fn knowledge_precondition(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let (polarity, rest) = scan::polarity(input);
    let inner = scan::call(rest, "know_answer")
        .filter(|i| !i.is_empty())
        .ok_or(Reject::NoMatch)?;
    let question = parser.parse(inner)?;
    Ok(Proposition::KnowledgePrecondition {
        question: Arc::new(question),
        polarity,
    })
}

/// `action_status(<action>, done)`.
fn action_status_proposition(parser: &mut Parser, input: &str) -> RuleResult<Proposition> {
    let inner = scan::call(input, "action_status").ok_or(Reject::NoMatch)?;
    let [action, status_name] = scan::split_top_level(inner, ',')[..] else {
        return Err(Reject::NoMatch);
    };
    let action = value::action(parser, action)?;
    let status = status(status_name)?;
    Ok(Proposition::ActionStatus { action, status })
}
