//! Integration tests for dialogue moves, ICM and realization data

use semtalk_grammar::GrammarErrorKind;
use semtalk_model::{
    IcmContent, IcmKind, IcmMove, IcmPolarity, Move, MoveContent, SemanticObject, Speaker,
};

use crate::common::parser;

fn dialogue_move(input: &str) -> Move {
    match parser().parse(input).unwrap() {
        SemanticObject::Move(found) => found,
        other => panic!("expected a move, got {other:?}"),
    }
}

fn icm(input: &str) -> IcmMove {
    match parser().parse(input).unwrap() {
        SemanticObject::Icm(found) => found,
        other => panic!("expected an ICM move, got {other:?}"),
    }
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn zero_argument_moves() {
    for (input, content) in [
        ("greet", MoveContent::Greet),
        ("mute", MoveContent::Mute),
        ("unmute", MoveContent::Unmute),
        ("quit", MoveContent::Quit),
        ("thank_you", MoveContent::ThankYou),
        ("thank_you_response", MoveContent::ThankYouResponse),
    ] {
        assert_eq!(dialogue_move(input).content, content, "{input}");
    }
}

#[test]
fn ask_move() {
    let found = dialogue_move("ask(?X.price(X))");
    let question = found.question().unwrap();
    assert_eq!(question.wh_predicate().map(|p| p.name.as_str()), Some("price"));
    assert!(found.realization.is_none());
}

#[test]
fn answer_and_report_moves() {
    let MoveContent::Answer(answer) = dialogue_move("answer(yes)").content else {
        panic!("expected an answer");
    };
    assert_eq!(*answer, SemanticObject::Yes);

    let MoveContent::Report(report) = dialogue_move(
        "report(ServiceResultProposition(buy, [dest_city(paris)], SuccessfulServiceAction()))",
    )
    .content
    else {
        panic!("expected a report");
    };
    assert!(matches!(*report, SemanticObject::Proposition(_)));
}

#[test]
fn request_move() {
    let MoveContent::Request(action) = dialogue_move("request(buy)").content else {
        panic!("expected a request");
    };
    assert_eq!(action.name, "buy");
    assert!(parser().parse("request(sell)").is_err());
}

#[test]
fn prereport_move() {
    let MoveContent::Prereport {
        service_action,
        arguments,
        ..
    } = dialogue_move("prereport(buy, [dest_city(paris), price(2.5)])").content
    else {
        panic!("expected a prereport");
    };
    assert_eq!(service_action, "buy");
    assert_eq!(arguments.len(), 2);
}

// =============================================================================
// Realization Data
// =============================================================================

#[test]
fn decorated_move_keeps_its_question() {
    let mut parser = parser();
    let SemanticObject::Move(found) = parser.parse("Move(ask(?X.price(X)), speaker=USR)").unwrap()
    else {
        panic!("expected a move");
    };
    let realization = found.realization.as_ref().unwrap();
    assert_eq!(realization.speaker, Some(Speaker::Usr));

    let SemanticObject::Question(plain) = parser.parse("?X.price(X)").unwrap() else {
        panic!("expected a question");
    };
    assert_eq!(found.question(), Some(&plain));
}

#[test]
fn decorated_move_with_all_fields() {
    let found = dialogue_move(
        "Move(answer(dest_city(paris)), speaker=SYS, perception_confidence=0.75, \
         understanding_confidence=0.5, utterance='to paris, please', ddd_name='travel')",
    );
    let realization = found.realization.unwrap();
    assert_eq!(realization.speaker, Some(Speaker::Sys));
    assert_eq!(realization.perception_confidence, Some(0.75));
    assert_eq!(realization.understanding_confidence, Some(0.5));
    assert_eq!(realization.utterance.as_deref(), Some("to paris, please"));
    assert_eq!(realization.ddd_name.as_deref(), Some("travel"));
}

#[test]
fn decorated_move_without_realization() {
    assert!(dialogue_move("Move(greet)").realization.is_none());
}

#[test]
fn decorated_move_prefix_with_commas() {
    let found = dialogue_move("Move(answer(set([dest_city(paris), dest_city(london)])), speaker=USR)");
    assert!(matches!(found.content, MoveContent::Answer(_)));
    assert!(found.realization.is_some());
}

#[test]
fn undecorated_cache_entry_is_unaffected() {
    let mut parser = parser();
    parser.parse("Move(greet, speaker=USR)").unwrap();
    let SemanticObject::Move(plain) = parser.parse("greet").unwrap() else {
        panic!("expected a move");
    };
    assert!(plain.realization.is_none());
}

#[test]
fn unknown_realization_key_is_an_error() {
    let err = parser().parse("Move(greet, mood=happy)").unwrap_err();
    assert!(matches!(
        err.kind,
        GrammarErrorKind::UnsupportedRealizationData { ref key } if key == "mood"
    ));
}

#[test]
fn bad_realization_value_is_an_error() {
    let err = parser()
        .parse("Move(greet, perception_confidence=high)")
        .unwrap_err();
    assert!(matches!(
        err.kind,
        GrammarErrorKind::InvalidRealizationData { .. }
    ));
}

#[test]
fn move_wrapper_around_icm() {
    let found = icm("Move(icm:per*pos, speaker=USR)");
    assert_eq!(found.kind, IcmKind::Perception);
    assert_eq!(found.polarity, Some(IcmPolarity::Pos));
    let realization = found.realization.unwrap();
    assert_eq!(realization.speaker, Some(Speaker::Usr));

    assert!(icm("Move(icm:acc*neg:issue)").realization.is_none());
}

#[test]
fn move_wrapper_needs_a_move() {
    assert!(parser().parse("Move(yes)").is_err());
    assert!(parser().parse("Move()").is_err());
}

// =============================================================================
// ICM
// =============================================================================

#[test]
fn perception_icm_without_content() {
    let found = icm("icm:per*pos");
    assert_eq!(found.kind, IcmKind::Perception);
    assert_eq!(found.polarity, Some(IcmPolarity::Pos));
    assert_eq!(found.content, IcmContent::None);
}

#[test]
fn perception_icm_with_string() {
    let found = icm("icm:per*pos:\"hello\"");
    assert_eq!(found.content, IcmContent::Text("hello".into()));
}

#[test]
fn acceptance_icm_on_issue() {
    let found = icm("icm:acc*neg:issue");
    assert_eq!(found.kind, IcmKind::Acceptance);
    assert_eq!(found.polarity, Some(IcmPolarity::Neg));
    assert_eq!(found.content, IcmContent::Issue);
}

#[test]
fn understanding_icm_with_speaker() {
    let found = icm("icm:und*int:SYS*dest_city(paris)");
    assert_eq!(found.kind, IcmKind::Understanding);
    assert_eq!(found.polarity, Some(IcmPolarity::Int));
    assert_eq!(found.content_speaker, Some(Speaker::Sys));
    let IcmContent::Semantic(content) = found.content else {
        panic!("expected semantic content");
    };
    assert!(matches!(*content, SemanticObject::Proposition(_)));
}

#[test]
fn understanding_icm_without_speaker() {
    let found = icm("icm:und*pos:dest_city(paris)");
    assert_eq!(found.content_speaker, None);
    assert!(matches!(found.content, IcmContent::Semantic(_)));
}

#[test]
fn semantic_icm() {
    let found = icm("icm:sem*neg");
    assert_eq!(found.kind, IcmKind::Semantic);
    assert_eq!(found.content, IcmContent::None);
}

#[test]
fn plan_icms() {
    assert_eq!(icm("icm:reraise").kind, IcmKind::Reraise);
    assert_eq!(icm("icm:accommodate").polarity, None);
    assert_eq!(icm("icm:loadplan").kind, IcmKind::LoadPlan);

    let found = icm("icm:reraise:?X.price(X)");
    assert!(matches!(found.content, IcmContent::Semantic(_)));
    assert!(matches!(
        icm("icm:resume:perform(buy)").content,
        IcmContent::Semantic(_)
    ));
}

#[test]
fn malformed_icms_fail() {
    let mut parser = parser();
    for input in ["icm:per", "icm:per*maybe", "icm:loadplan*pos", "icm:per*pos:", "icm:wave"] {
        assert!(parser.parse(input).is_err(), "{input}");
    }
}

#[test]
fn decorated_icm() {
    let found = icm("ICMMove(icm:acc*pos, speaker=SYS, utterance='okay')");
    assert_eq!(found.kind, IcmKind::Acceptance);
    let realization = found.realization.unwrap();
    assert_eq!(realization.speaker, Some(Speaker::Sys));
    assert_eq!(realization.utterance.as_deref(), Some("okay"));

    assert!(icm("ICMMove(icm:per*neg)").realization.is_none());
}
