//! Integration tests for the dispatch/cache engine
//!
//! Tests determinism, cache coherence, error reporting and thread sharing.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::thread;

use semtalk_grammar::{GrammarErrorKind, Parser, ParserConfig};
use semtalk_model::{OntologyError, RealizationData, SemanticObject, Speaker};

use crate::common::{CountingOntology, parser, travel};

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_parses_are_equal() {
    let mut parser = parser();
    for input in [
        "ask(?X.price(X))",
        "{yes, no}",
        "if dest_city(paris) then do(buy) else ",
        "icm:und*int:SYS*dest_city(paris)",
    ] {
        let first = parser.parse(input).unwrap();
        let second = parser.parse(input).unwrap();
        assert_eq!(first, second, "{input}");
    }
}

#[test]
fn returned_objects_are_independent_copies() {
    let mut parser = parser();
    let SemanticObject::Move(mut first) = parser.parse("greet").unwrap() else {
        panic!("expected a move");
    };
    first.set_realization_data(RealizationData {
        speaker: Some(Speaker::Usr),
        ..RealizationData::default()
    });

    let SemanticObject::Move(second) = parser.parse("greet").unwrap() else {
        panic!("expected a move");
    };
    assert!(second.realization.is_none());
    assert_ne!(first, second);
}

// =============================================================================
// Cache Coherence
// =============================================================================

#[test]
fn cache_hit_skips_the_ontology() {
    let (ontology, calls) = CountingOntology::new(travel());
    let mut parser = Parser::with_ontology(ontology);

    parser.parse("dest_city(paris)").unwrap();
    let after_first = calls.load(Ordering::SeqCst);
    assert!(after_first > 0);

    parser.parse("dest_city(paris)").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), after_first);
}

#[test]
fn clear_forces_a_full_reparse() {
    let (ontology, calls) = CountingOntology::new(travel());
    let mut parser = Parser::with_ontology(ontology);

    let first = parser.parse("dest_city(paris)").unwrap();
    let after_first = calls.load(Ordering::SeqCst);

    parser.clear();
    let second = parser.parse("dest_city(paris)").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), after_first * 2);
    assert_eq!(first, second);
}

#[test]
fn uncached_parser_always_reparses() {
    let (ontology, calls) = CountingOntology::new(travel());
    let mut parser = Parser::new(Arc::new(ontology), ParserConfig::uncached());

    parser.parse("dest_city(paris)").unwrap();
    let after_first = calls.load(Ordering::SeqCst);
    parser.parse("dest_city(paris)").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), after_first * 2);
}

#[test]
fn cache_stats_count_hits_and_misses() {
    let mut parser = parser();
    parser.parse("yes").unwrap();
    parser.parse("yes").unwrap();
    parser.parse("no").unwrap();

    let stats = parser.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.entries, 2);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unparseable_input_names_input_and_ontology() {
    let err = parser().parse("colour(red)").unwrap_err();
    assert!(matches!(err.kind, GrammarErrorKind::NoRuleMatched { .. }));
    let msg = err.to_string();
    assert!(msg.contains("'colour(red)'"));
    assert!(msg.contains("Ontology(travel)"));
}

#[test]
fn nested_failure_reports_outermost_input() {
    let err = parser().parse("answer(dest_city(rome))").unwrap_err();
    assert_eq!(err.input(), Some("answer(dest_city(rome))"));
    assert_eq!(
        err.context.stack,
        vec!["dest_city(rome)", "answer(dest_city(rome))"]
    );
    assert!(err.to_string().contains("in 'dest_city(rome)'"));
}

#[test]
fn sortal_mismatch_is_an_ontology_error() {
    let err = parser().parse("dest_city(42)").unwrap_err();
    assert!(matches!(
        err.kind,
        GrammarErrorKind::Ontology(OntologyError::SortMismatch { .. })
    ));
}

#[test]
fn failure_leaves_parser_usable() {
    let mut parser = parser();
    assert!(parser.parse("%%").is_err());
    assert_eq!(parser.parse("yes").unwrap(), SemanticObject::Yes);
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn parser_can_be_shared_behind_a_mutex() {
    let shared = Arc::new(Mutex::new(parser()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut parser = shared.lock().unwrap();
                parser.parse("ask(?X.price(X))").unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(shared.lock().unwrap().cache_stats().hits, 3);
}
