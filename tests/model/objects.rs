//! Integration tests for semantic value types

use semtalk_model::{
    IcmKind, IcmPolarity, Move, MoveContent, Polarity, RealizationData, SemanticObject,
    ServiceActionOptions, ServiceActionOutcome, Speaker, UnknownSpeaker,
};

// =============================================================================
// Polarity and Speakers
// =============================================================================

#[test]
fn polarity_negation() {
    assert_eq!(Polarity::Pos.negate(), Polarity::Neg);
    assert_eq!(Polarity::Neg.negate(), Polarity::Pos);
    assert!(Polarity::Pos.is_positive());
}

#[test]
fn speaker_tokens() {
    for speaker in [Speaker::Usr, Speaker::Sys, Speaker::Model] {
        assert_eq!(speaker.to_string().parse::<Speaker>(), Ok(speaker));
    }
    assert_eq!(
        "usr".parse::<Speaker>(),
        Err(UnknownSpeaker("usr".to_string()))
    );
}

// =============================================================================
// ICM Tokens
// =============================================================================

#[test]
fn icm_kind_tokens() {
    assert_eq!(IcmKind::from_token("per"), Some(IcmKind::Perception));
    assert_eq!(IcmKind::from_token("loadplan"), Some(IcmKind::LoadPlan));
    assert_eq!(IcmKind::Understanding.to_string(), "und");
    assert_eq!(IcmKind::from_token("wave"), None);
}

#[test]
fn icm_polarity_tokens() {
    assert_eq!(IcmPolarity::from_token("int"), Some(IcmPolarity::Int));
    assert_eq!(IcmPolarity::from_token("maybe"), None);
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn realization_data_emptiness() {
    assert!(RealizationData::default().is_empty());
    let data = RealizationData {
        speaker: Some(Speaker::Usr),
        ..RealizationData::default()
    };
    assert!(!data.is_empty());
}

#[test]
fn decoration_does_not_change_content() {
    let plain = Move::new(MoveContent::Greet);
    let mut decorated = plain.clone();
    decorated.set_realization_data(RealizationData {
        utterance: Some("hello".into()),
        ..RealizationData::default()
    });
    assert_eq!(plain.content, decorated.content);
    assert_ne!(plain, decorated);
    assert_eq!(decorated.content.keyword(), "greet");
}

// =============================================================================
// Semantic Objects
// =============================================================================

#[test]
fn kind_names() {
    assert_eq!(SemanticObject::Yes.kind_name(), "yes");
    assert_eq!(SemanticObject::Text("a".into()).kind_name(), "string");
    assert_eq!(
        SemanticObject::ServiceOutcome(ServiceActionOutcome::Successful).kind_name(),
        "service action outcome"
    );
    assert_eq!(
        SemanticObject::Move(Move::new(MoveContent::Quit)).kind_name(),
        "move"
    );
}

#[test]
fn service_action_option_defaults() {
    let options = ServiceActionOptions::default();
    assert!(!options.postconfirm);
    assert!(options.downdate_plan);
    assert_eq!(options.preconfirm, None);
}
