//! Dialogue moves and ICM (interactive communication management) moves.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::SemVec;
use crate::ontology::Action;
use crate::polarity::Speaker;
use crate::proposition::Proposition;
use crate::question::Question;
use crate::semantic::SemanticObject;

// ============================================================================
// Realization data
// ============================================================================

/// Surface-level information attached to a move after it is recognised.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RealizationData {
    /// Who made the move.
    pub speaker: Option<Speaker>,
    /// ASR confidence, 0.0 to 1.0.
    pub perception_confidence: Option<f64>,
    /// NLU confidence, 0.0 to 1.0.
    pub understanding_confidence: Option<f64>,
    /// The surface utterance.
    pub utterance: Option<String>,
    /// Name of the DDD that produced the move.
    pub ddd_name: Option<String>,
}

impl RealizationData {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.speaker.is_none()
            && self.perception_confidence.is_none()
            && self.understanding_confidence.is_none()
            && self.utterance.is_none()
            && self.ddd_name.is_none()
    }
}

fn confidence_bits(value: Option<f64>) -> Option<u64> {
    value.map(f64::to_bits)
}

impl PartialEq for RealizationData {
    fn eq(&self, other: &Self) -> bool {
        self.speaker == other.speaker
            && confidence_bits(self.perception_confidence)
                == confidence_bits(other.perception_confidence)
            && confidence_bits(self.understanding_confidence)
                == confidence_bits(other.understanding_confidence)
            && self.utterance == other.utterance
            && self.ddd_name == other.ddd_name
    }
}

impl Eq for RealizationData {}

impl Hash for RealizationData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.speaker.hash(state);
        confidence_bits(self.perception_confidence).hash(state);
        confidence_bits(self.understanding_confidence).hash(state);
        self.utterance.hash(state);
        self.ddd_name.hash(state);
    }
}

// ============================================================================
// Moves
// ============================================================================

/// What a non-ICM move does.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveContent {
    /// `greet`
    Greet,
    /// `mute`
    Mute,
    /// `unmute`
    Unmute,
    /// `quit`
    Quit,
    /// `thank_you`
    ThankYou,
    /// `thank_you_response`
    ThankYouResponse,
    /// `ask(Q)`
    Ask(Question),
    /// `answer(A)`
    Answer(Arc<SemanticObject>),
    /// `report(P)`
    Report(Arc<SemanticObject>),
    /// `prereport(action, [props])`
    Prereport {
        /// Name of the owning ontology.
        ontology_name: String,
        /// The service action.
        service_action: String,
        /// Argument propositions, in order.
        arguments: SemVec<Proposition>,
    },
    /// `request(action)`
    Request(Action),
}

impl MoveContent {
    /// The keyword this move is written with.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Greet => "greet",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::Quit => "quit",
            Self::ThankYou => "thank_you",
            Self::ThankYouResponse => "thank_you_response",
            Self::Ask(_) => "ask",
            Self::Answer(_) => "answer",
            Self::Report(_) => "report",
            Self::Prereport { .. } => "prereport",
            Self::Request(_) => "request",
        }
    }
}

/// A dialogue move, optionally decorated with realization data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// What the move does.
    pub content: MoveContent,
    /// Surface decoration, if any.
    pub realization: Option<RealizationData>,
}

impl Move {
    /// Creates an undecorated move.
    #[must_use]
    pub const fn new(content: MoveContent) -> Self {
        Self {
            content,
            realization: None,
        }
    }

    /// Attaches realization data, replacing any already present.
    pub fn set_realization_data(&mut self, data: RealizationData) {
        self.realization = Some(data);
    }

    /// The embedded question of an `ask` move.
    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        match &self.content {
            MoveContent::Ask(question) => Some(question),
            _ => None,
        }
    }
}

// ============================================================================
// ICM moves
// ============================================================================

/// The ICM family, written after `icm:`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IcmKind {
    /// `reraise`
    Reraise,
    /// `accommodate`
    Accommodate,
    /// `resume`
    Resume,
    /// `loadplan`
    LoadPlan,
    /// `per`
    Perception,
    /// `acc`
    Acceptance,
    /// `sem`
    Semantic,
    /// `und`
    Understanding,
}

impl IcmKind {
    /// The surface token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reraise => "reraise",
            Self::Accommodate => "accommodate",
            Self::Resume => "resume",
            Self::LoadPlan => "loadplan",
            Self::Perception => "per",
            Self::Acceptance => "acc",
            Self::Semantic => "sem",
            Self::Understanding => "und",
        }
    }

    /// Parses a surface token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "reraise" => Self::Reraise,
            "accommodate" => Self::Accommodate,
            "resume" => Self::Resume,
            "loadplan" => Self::LoadPlan,
            "per" => Self::Perception,
            "acc" => Self::Acceptance,
            "sem" => Self::Semantic,
            "und" => Self::Understanding,
            _ => return None,
        })
    }
}

impl fmt::Display for IcmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ICM polarity, written after `*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IcmPolarity {
    /// `pos`
    Pos,
    /// `neg`
    Neg,
    /// `int` (interrogative)
    Int,
}

impl IcmPolarity {
    /// Parses a surface token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "pos" => Some(Self::Pos),
            "neg" => Some(Self::Neg),
            "int" => Some(Self::Int),
            _ => None,
        }
    }
}

/// The content slot of an ICM move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum IcmContent {
    /// No content.
    #[default]
    None,
    /// The literal token `issue`.
    Issue,
    /// A quoted perception string.
    Text(String),
    /// A parsed semantic object.
    Semantic(Arc<SemanticObject>),
}

/// An ICM move such as `icm:per*pos:"hello"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IcmMove {
    /// The ICM family.
    pub kind: IcmKind,
    /// Polarity; absent for reraise, accommodate, resume and loadplan.
    pub polarity: Option<IcmPolarity>,
    /// Content.
    pub content: IcmContent,
    /// Speaker qualifier of understanding ICMs (`SYS*content`).
    pub content_speaker: Option<Speaker>,
    /// Surface decoration, if any.
    pub realization: Option<RealizationData>,
}

impl IcmMove {
    /// Creates an ICM move without content.
    #[must_use]
    pub const fn new(kind: IcmKind, polarity: Option<IcmPolarity>) -> Self {
        Self {
            kind,
            polarity,
            content: IcmContent::None,
            content_speaker: None,
            realization: None,
        }
    }

    /// Builder method to set the content.
    #[must_use]
    pub fn with_content(mut self, content: IcmContent) -> Self {
        self.content = content;
        self
    }

    /// Builder method to set the content speaker.
    #[must_use]
    pub const fn with_content_speaker(mut self, speaker: Option<Speaker>) -> Self {
        self.content_speaker = speaker;
        self
    }

    /// Attaches realization data, replacing any already present.
    pub fn set_realization_data(&mut self, data: RealizationData) {
        self.realization = Some(data);
    }
}
