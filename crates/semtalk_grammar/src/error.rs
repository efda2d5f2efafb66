//! Grammar errors.
//!
//! A [`GrammarError`] is fatal for the current `parse()` call. As it
//! propagates out of nested parses each enclosing input is pushed onto its
//! [`ParseContext`], so the top-level message names the outermost string
//! while the inner strings remain available as a trail.

use std::fmt;

use semtalk_model::OntologyError;
use thiserror::Error;

/// The grammar's fatal error type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub struct GrammarError {
    /// What went wrong.
    pub kind: GrammarErrorKind,
    /// Where it went wrong.
    pub context: ParseContext,
}

impl GrammarError {
    /// Creates an error without context.
    #[must_use]
    pub fn new(kind: GrammarErrorKind) -> Self {
        Self {
            kind,
            context: ParseContext::default(),
        }
    }

    /// Records that the error surfaced while parsing `input`.
    ///
    /// Called once per enclosing parse, innermost first.
    #[must_use]
    pub fn within(mut self, input: &str) -> Self {
        self.context = self.context.with_frame(input);
        self
    }

    /// The outermost input that failed, if recorded.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.context.input.as_deref()
    }

    /// Creates a deprecated-spelling error.
    #[must_use]
    pub fn deprecated(found: String, suggestion: String, what: &'static str) -> Self {
        Self::new(GrammarErrorKind::Deprecated {
            found,
            suggestion,
            what,
        })
    }

    /// Creates an unexpected-content error.
    #[must_use]
    pub fn unexpected(expected: &'static str, found: &'static str) -> Self {
        Self::new(GrammarErrorKind::UnexpectedContent { expected, found })
    }
}

impl From<OntologyError> for GrammarError {
    fn from(err: OntologyError) -> Self {
        Self::new(GrammarErrorKind::Ontology(err))
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.input {
            Some(input) => write!(f, "failed to parse '{input}': {}", self.kind)?,
            None => write!(f, "{}", self.kind)?,
        }
        write!(f, "{}", self.context)
    }
}

/// Categorized grammar error kinds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GrammarErrorKind {
    /// Every rule declined the input.
    #[error("no rule matched (ontology={ontology})")]
    NoRuleMatched {
        /// Description of the ontology in use.
        ontology: String,
    },

    /// A deprecated spelling was used.
    #[error("'{found}' is not a valid {what}. Perhaps you mean '{suggestion}'.")]
    Deprecated {
        /// The offending text.
        found: String,
        /// The corrected spelling.
        suggestion: String,
        /// What the text was meant to be.
        what: &'static str,
    },

    /// The ontology reported an inconsistency.
    #[error(transparent)]
    Ontology(#[from] OntologyError),

    /// A parameter key has no value grammar.
    #[error("unsupported parameter '{key}' (value '{value}')")]
    UnsupportedParameter {
        /// The key.
        key: String,
        /// The raw value.
        value: String,
    },

    /// A parameter value was rejected by its key's grammar.
    #[error("failed to parse parameter {key}={value}")]
    InvalidParameter {
        /// The key.
        key: String,
        /// The raw value.
        value: String,
    },

    /// A parameter block entry is not of the form `key=value`.
    #[error("expected key=value but found '{text}'")]
    MalformedParameter {
        /// The offending entry.
        text: String,
    },

    /// A realization-data key is not supported.
    #[error("unsupported realization attribute '{key}'")]
    UnsupportedRealizationData {
        /// The key.
        key: String,
    },

    /// A realization-data value could not be read.
    #[error("invalid value for realization attribute {key}: '{value}'")]
    InvalidRealizationData {
        /// The key.
        key: String,
        /// The raw value.
        value: String,
    },

    /// A list argument was not wrapped in square brackets.
    #[error("expected a bracketed list but found '{found}'")]
    ExpectedBrackets {
        /// The offending text.
        found: String,
    },

    /// A sub-expression parsed, but to the wrong kind of object.
    #[error("expected {expected} but found {found}")]
    UnexpectedContent {
        /// What the enclosing form requires.
        expected: &'static str,
        /// What was parsed instead.
        found: &'static str,
    },
}

/// The trail of inputs an error passed through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseContext {
    /// The outermost input.
    pub input: Option<String>,
    /// Enclosing inputs, innermost first.
    pub stack: Vec<String>,
}

impl ParseContext {
    /// Adds a frame. The newest frame becomes the reported input.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let frame = frame.into();
        self.input = Some(frame.clone());
        self.stack.push(frame);
        self
    }
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The last frame is the reported input itself.
        let inner = self.stack.len().saturating_sub(1);
        for frame in &self.stack[..inner] {
            write!(f, "\n  in '{frame}'")?;
        }
        Ok(())
    }
}

/// Result type for grammar operations.
pub type Result<T> = std::result::Result<T, GrammarError>;
