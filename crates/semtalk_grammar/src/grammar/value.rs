//! Scalar values, proposition sets and container literals.

use std::sync::Arc;

use semtalk_model::{
    Action, Individual, IndividualValue, Polarity, Predicate, PropositionSet, SemSet, SemVec,
    SemanticObject, Sort,
};

use super::{Reject, RuleResult, proposition};
use crate::parser::Parser;
use crate::scan;

pub(crate) fn yes_no(_parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    match input {
        "yes" => Ok(SemanticObject::Yes),
        "no" => Ok(SemanticObject::No),
        _ => Err(Reject::NoMatch),
    }
}

// ============================================================================
// Proposition sets
// ============================================================================

pub(crate) fn proposition_set_rule(
    parser: &mut Parser,
    input: &str,
) -> RuleResult<SemanticObject> {
    proposition_set(parser, input).map(SemanticObject::from)
}

/// `[~]set([p, q])`. The inner brackets may be left out.
pub(crate) fn proposition_set(parser: &mut Parser, input: &str) -> RuleResult<PropositionSet> {
    let (polarity, rest) = scan::polarity(input);
    let inner = scan::call(rest, "set").ok_or(Reject::NoMatch)?;
    let items = scan::bracketed(inner).unwrap_or(inner);
    if items.trim().is_empty() {
        return Err(Reject::NoMatch);
    }
    let mut propositions = Vec::new();
    for item in scan::split_top_level(items, ',') {
        propositions.push(proposition::proposition(parser, item)?);
    }
    Ok(PropositionSet::new(propositions, polarity))
}

// ============================================================================
// Ontology-backed values
// ============================================================================

pub(crate) fn predicate_rule(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    predicate(parser, input).map(SemanticObject::Predicate)
}

/// A bare predicate name.
pub(crate) fn predicate(parser: &mut Parser, input: &str) -> RuleResult<Predicate> {
    if !scan::is_word(input) {
        return Err(Reject::NoMatch);
    }
    parser
        .ontology()
        .predicate(input)
        .map_err(|_| Reject::NoMatch)
}

pub(crate) fn action_rule(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    action(parser, input).map(SemanticObject::Action)
}

/// A bare action name.
pub(crate) fn action(parser: &mut Parser, input: &str) -> RuleResult<Action> {
    if !scan::is_word(input) {
        return Err(Reject::NoMatch);
    }
    parser
        .ontology()
        .create_action(input)
        .map_err(|_| Reject::NoMatch)
}

pub(crate) fn individual_rule(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    individual(parser, input).map(SemanticObject::Individual)
}

/// `[~]<value>`: a real, an integer, a quoted string, an enumerated name,
/// `person_name(..)` or `datetime(..)`, tried in that order.
pub(crate) fn individual(parser: &mut Parser, input: &str) -> RuleResult<Individual> {
    let (polarity, body) = scan::polarity(input);
    let value = individual_value(parser, body).ok_or(Reject::NoMatch)?;
    let individual = parser.ontology().create_individual(value)?;
    Ok(match polarity {
        Polarity::Pos => individual,
        Polarity::Neg => individual.negate(),
    })
}

fn individual_value(parser: &Parser, body: &str) -> Option<IndividualValue> {
    let ontology = parser.ontology();
    if scan::is_decimal(body) {
        return body.parse().ok().map(IndividualValue::Real);
    }
    if scan::is_digits(body) {
        return body.parse().ok().map(IndividualValue::Integer);
    }
    if let Some(text) = scan::unquote(body) {
        // Without a string sort, quoted text is left to the string rule.
        return ontology
            .has_sort(&Sort::String)
            .then(|| IndividualValue::String(text.to_string()));
    }
    if let Ok(sort) = ontology.individual_sort(body) {
        if !sort.is_string() && !sort.is_real() {
            return Some(IndividualValue::Enumerated(body.to_string()));
        }
    }
    if let Some(name) = scan::call(body, "person_name").filter(|n| !n.is_empty()) {
        return Some(IndividualValue::PersonName(name.to_string()));
    }
    if let Some(stamp) = scan::call(body, "datetime").filter(|d| !d.is_empty()) {
        return Some(IndividualValue::DateTime(stamp.to_string()));
    }
    None
}

// ============================================================================
// Literals and containers
// ============================================================================

/// A quoted string that is not an individual.
pub(crate) fn string(_parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let text = scan::unquote(input).ok_or(Reject::NoMatch)?;
    Ok(SemanticObject::Text(Arc::from(text)))
}

/// `{a, b, ...}`.
pub(crate) fn set(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = scan::braced(input).ok_or(Reject::NoMatch)?;
    let mut elements = SemSet::new();
    for item in scan::split_top_level(inner, ',') {
        elements = elements.insert(parser.parse(item)?);
    }
    Ok(SemanticObject::Set(elements))
}

/// `[a, b, ...]`.
pub(crate) fn sequence(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = scan::bracketed(input).ok_or(Reject::NoMatch)?;
    let mut elements = Vec::new();
    for item in scan::split_top_level(inner, ',') {
        elements.push(parser.parse(item)?);
    }
    Ok(SemanticObject::Sequence(SemVec::from(elements)))
}
