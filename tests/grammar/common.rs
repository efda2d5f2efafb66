//! Shared fixtures: a small travel ontology and a call-counting wrapper.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use semtalk_grammar::{Parser, ParserConfig};
use semtalk_model::{
    Action, Individual, IndividualValue, Ontology, Predicate, SimpleOntology, Sort,
};

pub fn travel() -> SimpleOntology {
    let city = Sort::custom("city");
    SimpleOntology::new("travel")
        .with_predicate("price", Sort::Real)
        .with_predicate("passengers", Sort::Integer)
        .with_predicate("dest_city", city.clone())
        .with_predicate("dept_city", city.clone())
        .with_predicate("need_visa", Sort::Boolean)
        .with_predicate("comment", Sort::String)
        .with_predicate("traveller", Sort::PersonName)
        .with_predicate("departure", Sort::DateTime)
        .with_predicate("booking", Sort::custom("booking"))
        .with_individual("paris", city.clone())
        .with_individual("london", city)
        .with_action("buy")
        .with_action("booking")
}

pub fn parser() -> Parser {
    Parser::with_ontology(travel())
}

pub fn domain_parser(domain: &str) -> Parser {
    Parser::new(
        Arc::new(travel()),
        ParserConfig::for_domain("travel_ddd", domain),
    )
}

/// Forwards to a [`SimpleOntology`], counting every call.
pub struct CountingOntology {
    inner: SimpleOntology,
    calls: Arc<AtomicUsize>,
}

impl CountingOntology {
    pub fn new(inner: SimpleOntology) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let ontology = Self {
            inner,
            calls: Arc::clone(&calls),
        };
        (ontology, calls)
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Ontology for CountingOntology {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn has_predicate(&self, name: &str) -> bool {
        self.tick();
        self.inner.has_predicate(name)
    }

    fn predicate(&self, name: &str) -> semtalk_model::Result<Predicate> {
        self.tick();
        self.inner.predicate(name)
    }

    fn individual_sort(&self, value: &str) -> semtalk_model::Result<Sort> {
        self.tick();
        self.inner.individual_sort(value)
    }

    fn has_sort(&self, sort: &Sort) -> bool {
        self.tick();
        self.inner.has_sort(sort)
    }

    fn create_individual(&self, value: IndividualValue) -> semtalk_model::Result<Individual> {
        self.tick();
        self.inner.create_individual(value)
    }

    fn create_action(&self, name: &str) -> semtalk_model::Result<Action> {
        self.tick();
        self.inner.create_action(name)
    }
}
