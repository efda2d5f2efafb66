//! Integration tests for the ontology seam

use semtalk_model::{
    IndividualValue, Ontology, OntologyError, Polarity, Proposition, SimpleOntology, Sort,
};

fn travel() -> SimpleOntology {
    SimpleOntology::new("travel")
        .with_predicate("price", Sort::Real)
        .with_predicate("dest_city", Sort::custom("city"))
        .with_individual("paris", Sort::custom("city"))
        .with_action("buy")
}

// =============================================================================
// Lookups
// =============================================================================

#[test]
fn predicate_lookup() {
    let ontology = travel();
    assert!(ontology.has_predicate("price"));
    let price = ontology.predicate("price").unwrap();
    assert_eq!(price.sort, Sort::Real);
    assert_eq!(price.ontology_name, "travel");
    assert_eq!(ontology.predicate_count(), 2);
}

#[test]
fn unknown_names() {
    let ontology = travel();
    assert!(matches!(
        ontology.predicate("colour"),
        Err(OntologyError::UnknownPredicate { ref name, .. }) if name == "colour"
    ));
    assert!(matches!(
        ontology.individual_sort("rome"),
        Err(OntologyError::UnknownIndividual { .. })
    ));
    assert!(matches!(
        ontology.create_action("sell"),
        Err(OntologyError::UnknownAction { .. })
    ));
}

#[test]
fn declared_sorts() {
    let ontology = travel();
    assert!(ontology.has_sort(&Sort::Real));
    assert!(ontology.has_sort(&Sort::custom("city")));
    assert!(!ontology.has_sort(&Sort::String));
}

#[test]
fn describe_names_the_ontology() {
    assert_eq!(travel().describe(), "Ontology(travel)");
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn enumerated_individual_gets_its_declared_sort() {
    let paris = travel()
        .create_individual(IndividualValue::Enumerated("paris".into()))
        .unwrap();
    assert_eq!(paris.sort, Sort::custom("city"));
    assert_eq!(paris.ontology_name, "travel");
}

#[test]
fn string_individual_without_string_sort() {
    let err = travel()
        .create_individual(IndividualValue::String("hello".into()))
        .unwrap_err();
    assert!(matches!(
        err,
        OntologyError::MissingSort { sort: Sort::String, .. }
    ));
}

#[test]
fn predicate_proposition_checks_sorts() {
    let ontology = travel();
    let price = ontology.predicate("price").unwrap();
    let paris = ontology
        .create_individual(IndividualValue::Enumerated("paris".into()))
        .unwrap();

    let err = Proposition::predicate(price, Some(paris.clone()), Polarity::Pos).unwrap_err();
    assert!(matches!(err, OntologyError::SortMismatch { .. }));
    assert!(err.to_string().contains("sortal mismatch"));

    let dest_city = ontology.predicate("dest_city").unwrap();
    let ok = Proposition::predicate(dest_city, Some(paris), Polarity::Neg).unwrap();
    assert_eq!(ok.polarity(), Polarity::Neg);
}
