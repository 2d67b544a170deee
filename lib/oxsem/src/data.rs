//! A-Box data: facts, literals and assertion taxonomies.

use crate::entity::{Fact, OntologyClass, OntologyProperty};
use crate::events;
use crate::taxonomy::{Taxonomy, TaxonomyEntry};
use oxterm::{vocab::owl, vocab::rdf, Literal, Resource, Term};
use rustc_hash::FxHashMap;

/// The A-Box side of an ontology: registered facts and literals, and the
/// taxonomies asserting their class memberships and relationships.
#[derive(Debug, Clone, Default)]
pub struct OntologyData {
    facts: FxHashMap<u64, Fact>,
    literals: FxHashMap<u64, Literal>,
    class_type: Taxonomy,
    same_as: Taxonomy,
    different_from: Taxonomy,
    assertions: Taxonomy,
    annotations: Taxonomy,
}

impl OntologyData {
    /// Creates new empty data.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of registered facts.
    #[inline]
    pub fn facts_count(&self) -> usize {
        self.facts.len()
    }

    /// The number of registered literals.
    #[inline]
    pub fn literals_count(&self) -> usize {
        self.literals.len()
    }

    /// Registers a fact. Returns `true` if it was not already registered.
    pub fn add_fact(&mut self, fact: Fact) -> bool {
        self.facts.insert(fact.fingerprint(), fact).is_none()
    }

    /// Registers a literal. Returns `true` if it was not already registered.
    pub fn add_literal(&mut self, literal: Literal) -> bool {
        self.literals
            .insert(literal.fingerprint(), literal)
            .is_none()
    }

    /// Returns the registered fact identified by the given resource.
    pub fn fact(&self, resource: &Resource) -> Option<&Fact> {
        self.fact_by_fingerprint(resource.fingerprint())
    }

    /// Returns the registered fact with the given fingerprint.
    pub fn fact_by_fingerprint(&self, fingerprint: u64) -> Option<&Fact> {
        self.facts.get(&fingerprint)
    }

    /// Checks if the given fact is registered.
    pub fn contains_fact(&self, fact: &Fact) -> bool {
        self.facts.contains_key(&fact.fingerprint())
    }

    /// Checks if the given literal is registered.
    pub fn contains_literal(&self, literal: &Literal) -> bool {
        self.literals.contains_key(&literal.fingerprint())
    }

    /// Returns all the registered facts.
    pub fn iter_facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.values()
    }

    /// Returns all the registered literals.
    pub fn iter_literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.values()
    }

    /// Asserts that a fact is a member of a class.
    pub fn add_class_type(&mut self, fact: &Fact, class: &OntologyClass) -> &mut Self {
        if self.check_registered(fact) {
            self.class_type.add_entry(TaxonomyEntry::new(
                fact.resource().clone(),
                rdf::TYPE.clone(),
                class.resource().clone(),
            ));
        }
        self
    }

    /// Asserts that two facts denote the same individual. One direction is
    /// stored; reasoning treats the relation as symmetric.
    pub fn add_same_as(&mut self, a: &Fact, b: &Fact) -> &mut Self {
        if self.check_registered(a) && self.check_registered(b) {
            self.same_as.add_entry(TaxonomyEntry::new(
                a.resource().clone(),
                owl::SAME_AS.clone(),
                b.resource().clone(),
            ));
        }
        self
    }

    /// Asserts that two facts denote different individuals. One direction is
    /// stored; reasoning treats the relation as symmetric.
    pub fn add_different_from(&mut self, a: &Fact, b: &Fact) -> &mut Self {
        if self.check_registered(a) && self.check_registered(b) {
            self.different_from.add_entry(TaxonomyEntry::new(
                a.resource().clone(),
                owl::DIFFERENT_FROM.clone(),
                b.resource().clone(),
            ));
        }
        self
    }

    /// Asserts an object-property relationship between two facts.
    pub fn add_assertion(
        &mut self,
        subject: &Fact,
        property: &OntologyProperty,
        object: &Fact,
    ) -> &mut Self {
        if !property.is_object() {
            events::warn(format!(
                "property {} is not an object property, the assertion has been dropped",
                property
            ));
            return self;
        }
        if self.check_registered(subject) && self.check_registered(object) {
            self.assertions.add_entry(TaxonomyEntry::new(
                subject.resource().clone(),
                property.resource().clone(),
                object.resource().clone(),
            ));
        }
        self
    }

    /// Asserts a datatype-property relationship between a fact and a literal.
    pub fn add_literal_assertion(
        &mut self,
        subject: &Fact,
        property: &OntologyProperty,
        literal: Literal,
    ) -> &mut Self {
        if !property.is_datatype() {
            events::warn(format!(
                "property {} is not a datatype property, the assertion has been dropped",
                property
            ));
            return self;
        }
        if self.check_registered(subject) {
            self.add_literal(literal.clone());
            self.assertions.add_entry(TaxonomyEntry::new(
                subject.resource().clone(),
                property.resource().clone(),
                literal,
            ));
        }
        self
    }

    /// Adds an object-property relationship materialized by reasoning, for
    /// callers wanting to persist derived assertions.
    pub fn add_inferred_assertion(
        &mut self,
        subject: &Fact,
        property: &OntologyProperty,
        object: &Fact,
    ) -> &mut Self {
        if property.is_object() && self.check_registered(subject) && self.check_registered(object) {
            self.assertions.add_entry(TaxonomyEntry::new_inferred(
                subject.resource().clone(),
                property.resource().clone(),
                object.resource().clone(),
            ));
        }
        self
    }

    /// Annotates a fact.
    pub fn add_annotation(
        &mut self,
        fact: &Fact,
        predicate: Resource,
        value: impl Into<Term>,
    ) -> &mut Self {
        if self.check_registered(fact) {
            self.annotations.add_entry(TaxonomyEntry::new(
                fact.resource().clone(),
                predicate,
                value,
            ));
        }
        self
    }

    /// The classType taxonomy.
    #[inline]
    pub fn class_type(&self) -> &Taxonomy {
        &self.class_type
    }

    /// The sameAs taxonomy.
    #[inline]
    pub fn same_as(&self) -> &Taxonomy {
        &self.same_as
    }

    /// The differentFrom taxonomy.
    #[inline]
    pub fn different_from(&self) -> &Taxonomy {
        &self.different_from
    }

    /// The assertions taxonomy; the asserted property is the entry
    /// predicate.
    #[inline]
    pub fn assertions(&self) -> &Taxonomy {
        &self.assertions
    }

    /// The fact annotations taxonomy.
    #[inline]
    pub fn annotations(&self) -> &Taxonomy {
        &self.annotations
    }

    /// Returns fresh data with the facts, literals and entries of both.
    pub fn union_with(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for fact in other.iter_facts() {
            result.add_fact(fact.clone());
        }
        for literal in other.iter_literals() {
            result.add_literal(literal.clone());
        }
        result.class_type = self.class_type.union_with(&other.class_type);
        result.same_as = self.same_as.union_with(&other.same_as);
        result.different_from = self.different_from.union_with(&other.different_from);
        result.assertions = self.assertions.union_with(&other.assertions);
        result.annotations = self.annotations.union_with(&other.annotations);
        result
    }

    /// Returns fresh data with the facts, literals and entries present in
    /// both.
    pub fn intersection_with(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for fact in self.iter_facts() {
            if other.contains_fact(fact) {
                result.add_fact(fact.clone());
            }
        }
        for literal in self.iter_literals() {
            if other.contains_literal(literal) {
                result.add_literal(literal.clone());
            }
        }
        result.class_type = self.class_type.intersection_with(&other.class_type);
        result.same_as = self.same_as.intersection_with(&other.same_as);
        result.different_from = self.different_from.intersection_with(&other.different_from);
        result.assertions = self.assertions.intersection_with(&other.assertions);
        result.annotations = self.annotations.intersection_with(&other.annotations);
        result
    }

    /// Returns fresh data with the facts, literals and entries of this data
    /// that are not present in `other`.
    ///
    /// Like [`Taxonomy::difference_with`], the result starts as the union of
    /// empty data with this one before the subtraction.
    pub fn difference_with(&self, other: &Self) -> Self {
        let mut result = Self::new().union_with(self);
        for fact in other.iter_facts() {
            result.facts.remove(&fact.fingerprint());
        }
        for literal in other.iter_literals() {
            result.literals.remove(&literal.fingerprint());
        }
        result.class_type = self.class_type.difference_with(&other.class_type);
        result.same_as = self.same_as.difference_with(&other.same_as);
        result.different_from = self.different_from.difference_with(&other.different_from);
        result.assertions = self.assertions.difference_with(&other.assertions);
        result.annotations = self.annotations.difference_with(&other.annotations);
        result
    }

    fn check_registered(&self, fact: &Fact) -> bool {
        if self.contains_fact(fact) {
            true
        } else {
            events::warn(format!(
                "fact {} is not registered in the data, the relation has been dropped",
                fact
            ));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::OntologyProperty;

    fn fact(name: &str) -> Fact {
        Fact::new(Resource::new_unchecked(format!("http://example.com/{name}")))
    }

    #[test]
    fn assertion_kind_guards() {
        let mut data = OntologyData::new();
        let a = fact("a");
        let b = fact("b");
        data.add_fact(a.clone());
        data.add_fact(b.clone());

        let age = OntologyProperty::new_datatype(Resource::new_unchecked(
            "http://example.com/age",
        ));
        data.add_assertion(&a, &age, &b);
        assert!(data.assertions().is_empty());

        let knows = OntologyProperty::new_object(Resource::new_unchecked(
            "http://example.com/knows",
        ));
        data.add_assertion(&a, &knows, &b);
        assert_eq!(data.assertions().len(), 1);

        data.add_literal_assertion(&a, &age, Literal::new_simple_literal("42"));
        assert_eq!(data.assertions().len(), 2);
        assert_eq!(data.literals_count(), 1);
    }

    #[test]
    fn inferred_assertions_are_marked() {
        let mut data = OntologyData::new();
        let a = fact("a");
        let b = fact("b");
        data.add_fact(a.clone());
        data.add_fact(b.clone());
        let knows =
            OntologyProperty::new_object(Resource::new_unchecked("http://example.com/knows"));
        data.add_inferred_assertion(&a, &knows, &b);
        assert!(data.assertions().iter().all(TaxonomyEntry::is_inferred));
    }
}
