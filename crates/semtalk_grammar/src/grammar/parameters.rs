//! The `key=value, ...` parameter sub-grammar.
//!
//! Each key selects its own value grammar from a static table. Keys outside
//! the table, and values their grammar rejects, are grammar errors.

use semtalk_model::{Predicate, PropositionSet, Question, SemVec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Reject, RuleResult, proposition, value};
use crate::error::{GrammarError, GrammarErrorKind, Result};
use crate::parser::{Parameters, Parser};
use crate::scan;

/// How a question's answers are presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GraphicalType {
    /// `list`
    List,
    /// `text`
    Text,
}

/// Where a question's alternatives come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuestionSource {
    /// `service`
    Service,
    /// `domain`
    Domain,
}

/// Ordering of presented alternatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortOrder {
    /// `alphabetic`
    Alphabetic,
}

/// A parsed parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterValue {
    /// Raw text, kept as written.
    Text(String),
    /// `true` or `false`, any case.
    Boolean(bool),
    /// A non-negative integer.
    Integer(u64),
    /// `list` or `text`.
    GraphicalType(GraphicalType),
    /// `service` or `domain`.
    Source(QuestionSource),
    /// `alphabetic`.
    SortOrder(SortOrder),
    /// `set(..)`.
    Alternatives(PropositionSet),
    /// A question.
    Question(Question),
    /// A bracketed list of questions.
    Questions(SemVec<Question>),
    /// A bracketed list of predicate names.
    Predicates(SemVec<Predicate>),
}

impl ParameterValue {
    /// The boolean value, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value, if this is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

/// Reads `true` or `false`, ignoring case.
pub(crate) fn boolean(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// ============================================================================
// Value grammars
// ============================================================================

type ValueGrammar = fn(&mut Parser, &str) -> RuleResult<ParameterValue>;

static VALUE_GRAMMARS: &[(&str, ValueGrammar)] = &[
    ("graphical_type", graphical_type),
    ("source", source),
    ("incremental", boolean_value),
    ("verbalize", boolean_value),
    ("allow_goal_accommodation", boolean_value),
    ("always_ground", boolean_value),
    ("alts", alternatives),
    ("service_query", question),
    ("default", question),
    ("device", text),
    ("format", text),
    ("label_questions", questions),
    ("related_information", questions),
    ("background", predicates),
    ("ask_features", predicates),
    ("sort_order", sort_order),
    ("max_spoken_alts", integer),
    ("max_reported_hit_count", integer),
];

fn graphical_type(_parser: &mut Parser, value: &str) -> RuleResult<ParameterValue> {
    match value {
        "list" => Ok(ParameterValue::GraphicalType(GraphicalType::List)),
        "text" => Ok(ParameterValue::GraphicalType(GraphicalType::Text)),
        _ => Err(Reject::NoMatch),
    }
}

fn source(_parser: &mut Parser, value: &str) -> RuleResult<ParameterValue> {
    match value {
        "service" => Ok(ParameterValue::Source(QuestionSource::Service)),
        "domain" => Ok(ParameterValue::Source(QuestionSource::Domain)),
        _ => Err(Reject::NoMatch),
    }
}

fn sort_order(_parser: &mut Parser, value: &str) -> RuleResult<ParameterValue> {
    match value {
        "alphabetic" => Ok(ParameterValue::SortOrder(SortOrder::Alphabetic)),
        _ => Err(Reject::NoMatch),
    }
}

fn boolean_value(_parser: &mut Parser, value: &str) -> RuleResult<ParameterValue> {
    boolean(value)
        .map(ParameterValue::Boolean)
        .ok_or(Reject::NoMatch)
}

fn integer(_parser: &mut Parser, value: &str) -> RuleResult<ParameterValue> {
    if !scan::is_digits(value) {
        return Err(Reject::NoMatch);
    }
    value
        .parse()
        .map(ParameterValue::Integer)
        .map_err(|_| Reject::NoMatch)
}

fn text(_parser: &mut Parser, value: &str) -> RuleResult<ParameterValue> {
    Ok(ParameterValue::Text(value.to_string()))
}

fn alternatives(parser: &mut Parser, input: &str) -> RuleResult<ParameterValue> {
    value::proposition_set(parser, input).map(ParameterValue::Alternatives)
}

fn question(parser: &mut Parser, value: &str) -> RuleResult<ParameterValue> {
    proposition::question(parser, value).map(ParameterValue::Question)
}

fn questions(parser: &mut Parser, value: &str) -> RuleResult<ParameterValue> {
    let inner = scan::bracketed(value).ok_or(Reject::NoMatch)?;
    let mut found = Vec::new();
    for item in scan::split_top_level(inner, ',') {
        found.push(proposition::question(parser, item)?);
    }
    Ok(ParameterValue::Questions(found.into()))
}

fn predicates(parser: &mut Parser, input: &str) -> RuleResult<ParameterValue> {
    let inner = scan::bracketed(input).ok_or(Reject::NoMatch)?;
    let mut found = Vec::new();
    for item in scan::split_top_level(inner, ',') {
        found.push(value::predicate(parser, item)?);
    }
    Ok(ParameterValue::Predicates(found.into()))
}

// ============================================================================
// Blocks
// ============================================================================

/// Parses `key=value, ...`, with or without surrounding braces.
pub(crate) fn parse_block(parser: &mut Parser, input: &str) -> Result<Parameters> {
    let trimmed = input.trim();
    let body = scan::braced(trimmed).unwrap_or(trimmed);
    let mut parameters = Parameters::new();
    for entry in scan::split_top_level(body, ',') {
        let (key, value) = scan::split_pair(entry).ok_or_else(|| {
            GrammarError::new(GrammarErrorKind::MalformedParameter {
                text: entry.to_string(),
            })
        })?;
        let parsed = parameter(parser, key, value)?;
        parameters.insert(key.to_string(), parsed);
    }
    Ok(parameters)
}

fn parameter(parser: &mut Parser, key: &str, value: &str) -> Result<ParameterValue> {
    let Some((_, grammar)) = VALUE_GRAMMARS.iter().find(|(name, _)| *name == key) else {
        return Err(GrammarError::new(GrammarErrorKind::UnsupportedParameter {
            key: key.to_string(),
            value: value.to_string(),
        }));
    };
    match grammar(parser, value) {
        Ok(parsed) => Ok(parsed),
        Err(Reject::NoMatch) => Err(GrammarError::new(GrammarErrorKind::InvalidParameter {
            key: key.to_string(),
            value: value.to_string(),
        })),
        Err(Reject::Grammar(err)) => Err(err.within(&format!("{key}={value}"))),
    }
}
