//! Individuals: typed values belonging to a sort.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::polarity::Polarity;
use crate::sort::Sort;

/// The raw value of an individual, before the ontology assigns it a sort.
#[derive(Clone)]
pub enum IndividualValue {
    /// A whole number, written `42`.
    Integer(i64),
    /// A real number, written `3.14` or `.5`.
    Real(f64),
    /// A quoted string, stored without its quotes.
    String(String),
    /// A person name, written `person_name(John)`.
    PersonName(String),
    /// A date and time, written `datetime(2020-01-01T10:00)`.
    DateTime(String),
    /// A member of a domain-defined enumerated sort, written bare.
    Enumerated(String),
}

impl IndividualValue {
    /// The built-in sort implied by the value's shape, if any.
    ///
    /// Enumerated values have no implied sort; the ontology decides.
    #[must_use]
    pub const fn implied_sort(&self) -> Option<Sort> {
        match self {
            Self::Integer(_) => Some(Sort::Integer),
            Self::Real(_) => Some(Sort::Real),
            Self::String(_) => Some(Sort::String),
            Self::PersonName(_) => Some(Sort::PersonName),
            Self::DateTime(_) => Some(Sort::DateTime),
            Self::Enumerated(_) => None,
        }
    }
}

impl PartialEq for IndividualValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b))
            | (Self::PersonName(a), Self::PersonName(b))
            | (Self::DateTime(a), Self::DateTime(b))
            | (Self::Enumerated(a), Self::Enumerated(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for IndividualValue {}

impl Hash for IndividualValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Integer(n) => n.hash(state),
            Self::Real(n) => n.to_bits().hash(state),
            Self::String(s)
            | Self::PersonName(s)
            | Self::DateTime(s)
            | Self::Enumerated(s) => s.hash(state),
        }
    }
}

impl fmt::Debug for IndividualValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for IndividualValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::PersonName(s) => write!(f, "person_name({s})"),
            Self::DateTime(s) => write!(f, "datetime({s})"),
            Self::Enumerated(s) => f.write_str(s),
        }
    }
}

/// A value of some sort, created by an ontology.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Individual {
    /// Name of the ontology that created this individual.
    pub ontology_name: String,
    /// The raw value.
    pub value: IndividualValue,
    /// The sort the ontology assigned.
    pub sort: Sort,
    /// Polarity; a `~` prefix in text negates the individual.
    pub polarity: Polarity,
}

impl Individual {
    /// Creates a positive individual.
    #[must_use]
    pub fn new(ontology_name: impl Into<String>, value: IndividualValue, sort: Sort) -> Self {
        Self {
            ontology_name: ontology_name.into(),
            value,
            sort,
            polarity: Polarity::Pos,
        }
    }

    /// Returns the same individual with the opposite polarity.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.polarity = self.polarity.negate();
        self
    }

    /// Returns true unless this individual was negated.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.polarity.is_positive()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.polarity.prefix(), self.value)
    }
}
