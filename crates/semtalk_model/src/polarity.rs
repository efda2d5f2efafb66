//! Polarity and speaker markers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Positive or negative polarity of a proposition or individual.
///
/// Surfaced in text as a leading `~` for [`Polarity::Neg`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Affirmed.
    #[default]
    Pos,
    /// Negated.
    Neg,
}

impl Polarity {
    /// Returns the opposite polarity.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Pos => Self::Neg,
            Self::Neg => Self::Pos,
        }
    }

    /// Returns true if this is [`Polarity::Pos`].
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Pos)
    }

    /// The surface prefix for this polarity: `~` or nothing.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Pos => "",
            Self::Neg => "~",
        }
    }
}

/// A dialogue participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Speaker {
    /// The human user.
    Usr,
    /// The dialogue system.
    Sys,
    /// The language model component.
    Model,
}

impl Speaker {
    /// The surface token for this speaker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usr => "USR",
            Self::Sys => "SYS",
            Self::Model => "MODEL",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not a known speaker.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown speaker '{0}'")]
pub struct UnknownSpeaker(pub String);

impl FromStr for Speaker {
    type Err = UnknownSpeaker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USR" => Ok(Self::Usr),
            "SYS" => Ok(Self::Sys),
            "MODEL" => Ok(Self::Model),
            other => Err(UnknownSpeaker(other.to_string())),
        }
    }
}
