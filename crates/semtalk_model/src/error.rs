//! Error types reported by an ontology.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::sort::Sort;

/// An inconsistency reported by an [`Ontology`](crate::Ontology) while
/// resolving names or constructing values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OntologyError {
    /// No predicate with this name exists.
    #[error("unknown predicate '{name}' in ontology {ontology}")]
    UnknownPredicate {
        /// The predicate name that was looked up.
        name: String,
        /// The ontology that was asked.
        ontology: String,
    },

    /// The value does not denote an individual of any sort.
    #[error("'{value}' is not an individual in ontology {ontology}")]
    UnknownIndividual {
        /// The value that was looked up.
        value: String,
        /// The ontology that was asked.
        ontology: String,
    },

    /// No action with this name exists.
    #[error("unknown action '{name}' in ontology {ontology}")]
    UnknownAction {
        /// The action name that was looked up.
        name: String,
        /// The ontology that was asked.
        ontology: String,
    },

    /// The ontology has no sort that accepts this kind of value.
    #[error("ontology {ontology} has no {sort} sort")]
    MissingSort {
        /// The sort that would be required.
        sort: Sort,
        /// The ontology that was asked.
        ontology: String,
    },

    /// A predicate was applied to an individual of a different sort.
    #[error(
        "sortal mismatch between predicate {predicate} (sort {predicate_sort}) and individual {individual} (sort {individual_sort})"
    )]
    SortMismatch {
        /// The predicate name.
        predicate: String,
        /// The predicate's sort.
        predicate_sort: Sort,
        /// The individual, as written.
        individual: String,
        /// The individual's sort.
        individual_sort: Sort,
    },
}

/// Result alias for ontology operations.
pub type Result<T> = std::result::Result<T, OntologyError>;
