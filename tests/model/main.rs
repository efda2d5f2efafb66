//! Integration tests for Layer 0: Model
//!
//! Tests for the semantic object model: persistent collections, the
//! ontology seam, and the value types the grammar produces.

mod objects;
mod ontology;
