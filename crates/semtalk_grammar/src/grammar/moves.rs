//! Move and ICM grammar, including realization-data decoration.

use std::sync::Arc;

use semtalk_model::{
    IcmContent, IcmKind, IcmMove, IcmPolarity, Move, MoveContent, RealizationData,
    SemanticObject, Speaker,
};
use tracing::trace;

use super::{Reject, RuleResult, fail, proposition, value};
use crate::error::GrammarErrorKind;
use crate::parser::Parser;
use crate::scan::{self, IcmShape};

// ============================================================================
// Decorated moves
// ============================================================================

/// `Move(<move>, key=value, ...)`.
///
/// The move boundary is found by parsing growing prefixes of the inner text.
/// Only prefixes followed by the end of the text or a comma are candidates,
/// and the first that parses to a move or an ICM move wins.
pub(crate) fn decorated_move(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let Some(inner) = scan::call(input, "Move") else {
        return Err(Reject::NoMatch);
    };
    let (found, rest) = probe_move(parser, inner).ok_or(Reject::NoMatch)?;
    let rest = rest.strip_prefix(',').unwrap_or(rest).trim();
    if rest.is_empty() {
        return Ok(found);
    }
    let data = realization_data(rest)?;
    Ok(match found {
        SemanticObject::Icm(mut icm) => {
            icm.set_realization_data(data);
            SemanticObject::Icm(icm)
        }
        SemanticObject::Move(mut found) => {
            found.set_realization_data(data);
            SemanticObject::Move(found)
        }
        other => other,
    })
}

/// Returns the first candidate prefix that parses to a move or an ICM move,
/// along with the text after it.
fn probe_move<'a>(parser: &mut Parser, inner: &'a str) -> Option<(SemanticObject, &'a str)> {
    let cuts = inner
        .match_indices(',')
        .map(|(at, _)| at)
        .chain(std::iter::once(inner.len()));
    for cut in cuts {
        let prefix = &inner[..cut];
        if prefix.trim().is_empty() {
            continue;
        }
        match parser.dispatch(prefix) {
            Ok(found @ (SemanticObject::Move(_) | SemanticObject::Icm(_))) => {
                return Some((found, &inner[cut..]));
            }
            Ok(other) => trace!(prefix, kind = other.kind_name(), "prefix is not a move"),
            Err(err) => trace!(prefix, %err, "prefix does not parse"),
        }
    }
    None
}

/// `ICMMove(<icm>, key=value, ...)`.
pub(crate) fn decorated_icm(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let Some(inner) = scan::call(input, "ICMMove") else {
        return Err(Reject::NoMatch);
    };
    let (head, rest) = scan::split_first_top_level(inner, ',').unwrap_or((inner.trim(), ""));
    let mut found = icm(parser, head)?;
    if !rest.is_empty() {
        found.set_realization_data(realization_data(rest)?);
    }
    Ok(SemanticObject::Icm(found))
}

type RealizationField = fn(&mut RealizationData, &str) -> Option<()>;

static REALIZATION_FIELDS: &[(&str, RealizationField)] = &[
    ("speaker", set_speaker),
    ("perception_confidence", set_perception_confidence),
    ("understanding_confidence", set_understanding_confidence),
    ("utterance", set_utterance),
    ("ddd_name", set_ddd_name),
];

fn set_speaker(data: &mut RealizationData, value: &str) -> Option<()> {
    data.speaker = Some(value.parse().ok()?);
    Some(())
}

fn set_perception_confidence(data: &mut RealizationData, value: &str) -> Option<()> {
    data.perception_confidence = Some(value.parse().ok()?);
    Some(())
}

fn set_understanding_confidence(data: &mut RealizationData, value: &str) -> Option<()> {
    data.understanding_confidence = Some(value.parse().ok()?);
    Some(())
}

fn set_utterance(data: &mut RealizationData, value: &str) -> Option<()> {
    data.utterance = Some(scan::unquote(value)?.to_string());
    Some(())
}

fn set_ddd_name(data: &mut RealizationData, value: &str) -> Option<()> {
    data.ddd_name = Some(scan::unquote(value)?.to_string());
    Some(())
}

fn realization_data(block: &str) -> RuleResult<RealizationData> {
    let mut data = RealizationData::default();
    for entry in scan::split_top_level(block, ',') {
        let Some((key, value)) = scan::split_pair(entry) else {
            return fail(GrammarErrorKind::MalformedParameter {
                text: entry.to_string(),
            });
        };
        let Some((_, apply)) = REALIZATION_FIELDS.iter().find(|(name, _)| *name == key) else {
            return fail(GrammarErrorKind::UnsupportedRealizationData {
                key: key.to_string(),
            });
        };
        if apply(&mut data, value).is_none() {
            return fail(GrammarErrorKind::InvalidRealizationData {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(data)
}

// ============================================================================
// Moves
// ============================================================================

/// The zero-argument moves.
pub(crate) fn basic_move(_parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let content = match input {
        "greet" => MoveContent::Greet,
        "mute" => MoveContent::Mute,
        "unmute" => MoveContent::Unmute,
        "quit" => MoveContent::Quit,
        "thank_you" => MoveContent::ThankYou,
        "thank_you_response" => MoveContent::ThankYouResponse,
        _ => return Err(Reject::NoMatch),
    };
    Ok(Move::new(content).into())
}

pub(crate) fn request_move(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = scan::call(input, "request").ok_or(Reject::NoMatch)?;
    let action = value::action(parser, inner)?;
    Ok(Move::new(MoveContent::Request(action)).into())
}

pub(crate) fn ask_move(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = scan::call(input, "ask").ok_or(Reject::NoMatch)?;
    let question = proposition::question(parser, inner)?;
    Ok(Move::new(MoveContent::Ask(question)).into())
}

pub(crate) fn answer_move(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = scan::call(input, "answer").ok_or(Reject::NoMatch)?;
    let answer = parser.parse(inner)?;
    Ok(Move::new(MoveContent::Answer(Arc::new(answer))).into())
}

pub(crate) fn report_move(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = scan::call(input, "report").ok_or(Reject::NoMatch)?;
    let content = parser.parse(inner)?;
    Ok(Move::new(MoveContent::Report(Arc::new(content))).into())
}

/// `prereport(action, [props])`.
pub(crate) fn prereport_move(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    let inner = scan::call(input, "prereport").ok_or(Reject::NoMatch)?;
    let (service_action, list) = scan::split_first_top_level(inner, ',').ok_or(Reject::NoMatch)?;
    if !scan::is_word(service_action) {
        return Err(Reject::NoMatch);
    }
    let arguments = proposition::proposition_list(parser, list)?;
    Ok(Move::new(MoveContent::Prereport {
        ontology_name: parser.ontology_name().to_string(),
        service_action: service_action.to_string(),
        arguments,
    })
    .into())
}

// ============================================================================
// ICM
// ============================================================================

pub(crate) fn icm_move(parser: &mut Parser, input: &str) -> RuleResult<SemanticObject> {
    icm(parser, input).map(SemanticObject::Icm)
}

/// `icm:<type>[*<polarity>][:<content>]`.
pub(crate) fn icm(parser: &mut Parser, input: &str) -> RuleResult<IcmMove> {
    let shape = IcmShape::scan(input).ok_or(Reject::NoMatch)?;
    let kind = IcmKind::from_token(shape.kind).ok_or(Reject::NoMatch)?;
    if shape.content == Some("") {
        return Err(Reject::NoMatch);
    }

    match kind {
        IcmKind::Reraise | IcmKind::Accommodate | IcmKind::Resume => {
            if shape.polarity.is_some() {
                return Err(Reject::NoMatch);
            }
            let found = IcmMove::new(kind, None);
            match shape.content {
                Some(content) => {
                    let content = parser.parse(content)?;
                    Ok(found.with_content(IcmContent::Semantic(Arc::new(content))))
                }
                None => Ok(found),
            }
        }
        IcmKind::LoadPlan => {
            if shape.polarity.is_some() || shape.content.is_some() {
                return Err(Reject::NoMatch);
            }
            Ok(IcmMove::new(kind, None))
        }
        IcmKind::Perception | IcmKind::Acceptance => {
            let polarity = icm_polarity(shape.polarity)?;
            let content = match shape.content {
                None => IcmContent::None,
                Some("issue") => IcmContent::Issue,
                Some(content) => match scan::double_quoted(content) {
                    Some(text) if kind == IcmKind::Perception => {
                        IcmContent::Text(text.to_string())
                    }
                    _ => IcmContent::Semantic(Arc::new(parser.parse(content)?)),
                },
            };
            Ok(IcmMove::new(kind, Some(polarity)).with_content(content))
        }
        IcmKind::Semantic | IcmKind::Understanding => {
            let polarity = icm_polarity(shape.polarity)?;
            let found = IcmMove::new(kind, Some(polarity));
            let Some(content) = shape.content else {
                return Ok(found);
            };
            let (speaker, content) = split_content_speaker(content);
            let content = parser.parse(content)?;
            Ok(found
                .with_content(IcmContent::Semantic(Arc::new(content)))
                .with_content_speaker(speaker))
        }
    }
}

fn icm_polarity(token: Option<&str>) -> RuleResult<IcmPolarity> {
    token
        .and_then(IcmPolarity::from_token)
        .ok_or(Reject::NoMatch)
}

/// Splits an optional `SPEAKER*` qualifier off understanding-ICM content.
fn split_content_speaker(content: &str) -> (Option<Speaker>, &str) {
    match content.split_once('*') {
        Some((speaker, rest)) => match speaker.parse::<Speaker>() {
            Ok(speaker) => (Some(speaker), rest),
            Err(_) => (None, content),
        },
        None => (None, content),
    }
}
