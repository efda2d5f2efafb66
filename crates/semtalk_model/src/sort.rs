//! Sort descriptors for predicates and individuals.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sort (type) of a predicate or individual.
///
/// Built-in sorts have fixed names; every other sort is a domain-defined
/// enumeration such as `city` or `currency`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sort {
    /// Truth-valued predicates (`need_visa`), which take no argument.
    Boolean,
    /// Whole numbers.
    Integer,
    /// Floating point numbers.
    Real,
    /// Free text.
    String,
    /// Person names, written `person_name(..)`.
    PersonName,
    /// Date and time, written `datetime(..)`.
    DateTime,
    /// The sort of domain (service) actions.
    Domain,
    /// A domain-defined enumerated sort.
    Custom(String),
}

impl Sort {
    /// Creates a domain-defined enumerated sort.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Returns true for the boolean sort.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }

    /// Returns true for the string sort.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Returns true for the real sort.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real)
    }

    /// Returns the canonical name of this sort.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::String => "string",
            Self::PersonName => "person_name",
            Self::DateTime => "datetime",
            Self::Domain => "domain",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Debug for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sort({})", self.name())
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
