//! The ontology binding: predicates, actions, and individual construction.
//!
//! The parser never defines domain vocabulary itself. It asks an
//! [`Ontology`] whether a name is a predicate, what sort a bare value has,
//! and to construct typed individuals and actions. [`SimpleOntology`] is an
//! in-memory implementation built with `with_*` methods.

use std::collections::{HashMap, HashSet};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{OntologyError, Result};
use crate::individual::{Individual, IndividualValue};
use crate::sort::Sort;

/// A named predicate of some sort, e.g. `price` of sort `real`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Predicate {
    /// Name of the owning ontology.
    pub ontology_name: String,
    /// Predicate name.
    pub name: String,
    /// Sort of the individuals this predicate applies to.
    pub sort: Sort,
}

impl Predicate {
    /// Creates a predicate.
    #[must_use]
    pub fn new(ontology_name: impl Into<String>, name: impl Into<String>, sort: Sort) -> Self {
        Self {
            ontology_name: ontology_name.into(),
            name: name.into(),
            sort,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named domain action, e.g. `buy`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Action {
    /// Name of the owning ontology.
    pub ontology_name: String,
    /// Action name.
    pub name: String,
}

impl Action {
    /// Creates an action.
    #[must_use]
    pub fn new(ontology_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ontology_name: ontology_name.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The capability set the parser needs from a domain ontology.
pub trait Ontology {
    /// The ontology's name.
    fn name(&self) -> &str;

    /// Returns true if a predicate with this name exists.
    fn has_predicate(&self, name: &str) -> bool;

    /// Looks up a predicate by name.
    ///
    /// # Errors
    /// Returns [`OntologyError::UnknownPredicate`] if no such predicate exists.
    fn predicate(&self, name: &str) -> Result<Predicate>;

    /// Returns the sort of a bare (enumerated) individual.
    ///
    /// # Errors
    /// Returns [`OntologyError::UnknownIndividual`] if the value is not an
    /// individual of any sort.
    fn individual_sort(&self, value: &str) -> Result<Sort>;

    /// Returns true if some predicate or individual of the ontology has
    /// this sort.
    fn has_sort(&self, sort: &Sort) -> bool;

    /// Creates a typed individual from a raw value.
    ///
    /// # Errors
    /// Returns an error if the value cannot be given a sort.
    fn create_individual(&self, value: IndividualValue) -> Result<Individual>;

    /// Creates an action by name.
    ///
    /// # Errors
    /// Returns [`OntologyError::UnknownAction`] if no such action exists.
    fn create_action(&self, name: &str) -> Result<Action>;

    /// A short human-readable description, used in parse diagnostics.
    fn describe(&self) -> String {
        format!("Ontology({})", self.name())
    }
}

/// An in-memory ontology.
#[derive(Clone, Debug, Default)]
pub struct SimpleOntology {
    name: String,
    predicates: HashMap<String, Sort>,
    individuals: HashMap<String, Sort>,
    actions: HashSet<String>,
}

impl SimpleOntology {
    /// Creates an empty ontology with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder method to declare a predicate.
    #[must_use]
    pub fn with_predicate(mut self, name: impl Into<String>, sort: Sort) -> Self {
        self.predicates.insert(name.into(), sort);
        self
    }

    /// Builder method to declare an enumerated individual.
    #[must_use]
    pub fn with_individual(mut self, name: impl Into<String>, sort: Sort) -> Self {
        self.individuals.insert(name.into(), sort);
        self
    }

    /// Builder method to declare an action.
    #[must_use]
    pub fn with_action(mut self, name: impl Into<String>) -> Self {
        self.actions.insert(name.into());
        self
    }

    /// Number of declared predicates.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }
}

impl Ontology for SimpleOntology {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_predicate(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    fn predicate(&self, name: &str) -> Result<Predicate> {
        self.predicates
            .get(name)
            .map(|sort| Predicate::new(&self.name, name, sort.clone()))
            .ok_or_else(|| OntologyError::UnknownPredicate {
                name: name.to_string(),
                ontology: self.name.clone(),
            })
    }

    fn individual_sort(&self, value: &str) -> Result<Sort> {
        self.individuals
            .get(value)
            .cloned()
            .ok_or_else(|| OntologyError::UnknownIndividual {
                value: value.to_string(),
                ontology: self.name.clone(),
            })
    }

    fn has_sort(&self, sort: &Sort) -> bool {
        self.predicates
            .values()
            .chain(self.individuals.values())
            .any(|declared| declared == sort)
    }

    fn create_individual(&self, value: IndividualValue) -> Result<Individual> {
        let sort = match &value {
            IndividualValue::Enumerated(name) => self.individual_sort(name)?,
            other => other
                .implied_sort()
                .ok_or_else(|| OntologyError::UnknownIndividual {
                    value: other.to_string(),
                    ontology: self.name.clone(),
                })?,
        };
        // Free text is only an individual where some predicate takes it.
        if sort.is_string() && !self.has_sort(&sort) {
            return Err(OntologyError::MissingSort {
                sort,
                ontology: self.name.clone(),
            });
        }
        Ok(Individual::new(&self.name, value, sort))
    }

    fn create_action(&self, name: &str) -> Result<Action> {
        if self.actions.contains(name) {
            Ok(Action::new(&self.name, name))
        } else {
            Err(OntologyError::UnknownAction {
                name: name.to_string(),
                ontology: self.name.clone(),
            })
        }
    }
}
