//! Ontology decoder from RDF graphs.
//!
//! Decoding is a fixed multi-pass pipeline over per-predicate triple
//! selections. Unresolvable or malformed axioms are skipped with a warning
//! raised through the process-wide event channel; decoding never aborts on
//! them.

use crate::entity::{
    ClassKind, Fact, OntologyClass, OntologyProperty, Restriction, RestrictionConstraint,
};
use crate::error::SemanticsError;
use crate::events;
use crate::ontology::Ontology;
use oxterm::vocab::{self, owl, rdf, rdfs};
use oxterm::{Graph, Resource, Term, Triple};
use oxsdatatypes::Integer;
use rustc_hash::{FxHashMap, FxHashSet};
use std::str::FromStr;

pub(crate) struct OntologyParser<'a> {
    graph: &'a Graph,
    /// rdf:type triples prefetched by object fingerprint.
    types: FxHashMap<u64, Vec<&'a Triple>>,
}

impl<'a> OntologyParser<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let mut types: FxHashMap<u64, Vec<&'a Triple>> = FxHashMap::default();
        for triple in graph.triples_for_predicate(&rdf::TYPE) {
            types
                .entry(triple.object.fingerprint())
                .or_default()
                .push(triple);
        }
        Self { graph, types }
    }

    pub fn parse(&self) -> Result<Ontology, SemanticsError> {
        let mut ontology = Ontology::new(self.ontology_name());
        ontology.class_model_mut().expand();
        ontology.property_model_mut().expand();

        self.parse_properties(&mut ontology);
        self.parse_classes(&mut ontology);
        self.parse_composites(&mut ontology);
        self.parse_facts(&mut ontology);
        self.refine_restrictions(&mut ontology);
        self.parse_domains_and_ranges(&mut ontology);
        self.parse_property_relations(&mut ontology);
        self.parse_class_relations(&mut ontology);
        self.parse_fact_relations(&mut ontology);
        self.parse_assertions(&mut ontology);
        self.parse_annotations(&mut ontology);

        ontology.class_model_mut().unexpand();
        ontology.property_model_mut().unexpand();
        Ok(ontology)
    }

    fn typed(&self, class: &Resource) -> impl Iterator<Item = &'a Triple> + '_ {
        self.types
            .get(&class.fingerprint())
            .into_iter()
            .flatten()
            .copied()
    }

    fn ontology_name(&self) -> Resource {
        if let Some(triple) = self.typed(&owl::ONTOLOGY).next() {
            return triple.subject.clone();
        }
        if let Some(name) = self.graph.name() {
            return name.clone();
        }
        Resource::new_blank()
    }

    fn parse_properties(&self, ontology: &mut Ontology) {
        let model = ontology.property_model_mut();
        for triple in self.typed(&owl::ANNOTATION_PROPERTY) {
            if vocab::is_reserved(&triple.subject) {
                continue;
            }
            model.add_property(OntologyProperty::new_annotation(triple.subject.clone()));
        }
        for triple in self.typed(&owl::DATATYPE_PROPERTY) {
            if vocab::is_reserved(&triple.subject) {
                continue;
            }
            model.add_property(OntologyProperty::new_datatype(triple.subject.clone()));
        }
        for triple in self.typed(&owl::OBJECT_PROPERTY) {
            if vocab::is_reserved(&triple.subject) {
                continue;
            }
            model.add_property(OntologyProperty::new_object(triple.subject.clone()));
        }

        // a property declared only through an object-property characteristic
        // is promoted to an object property
        for class in [
            &*owl::SYMMETRIC_PROPERTY,
            &*owl::TRANSITIVE_PROPERTY,
            &*owl::INVERSE_FUNCTIONAL_PROPERTY,
        ] {
            for triple in self.typed(class) {
                if vocab::is_reserved(&triple.subject) {
                    continue;
                }
                if model.property(&triple.subject).is_none() {
                    model.add_property(OntologyProperty::new_object(triple.subject.clone()));
                }
            }
        }

        for triple in self.typed(&owl::SYMMETRIC_PROPERTY) {
            if let Some(property) = model.property_mut(&triple.subject) {
                if !property.set_symmetric(true) {
                    events::warn(format!(
                        "property {} is not an object property, the owl:SymmetricProperty typing has been ignored",
                        triple.subject
                    ));
                }
            }
        }
        for triple in self.typed(&owl::TRANSITIVE_PROPERTY) {
            if let Some(property) = model.property_mut(&triple.subject) {
                if !property.set_transitive(true) {
                    events::warn(format!(
                        "property {} is not an object property, the owl:TransitiveProperty typing has been ignored",
                        triple.subject
                    ));
                }
            }
        }
        for triple in self.typed(&owl::INVERSE_FUNCTIONAL_PROPERTY) {
            if let Some(property) = model.property_mut(&triple.subject) {
                if !property.set_inverse_functional(true) {
                    events::warn(format!(
                        "property {} is not an object property, the owl:InverseFunctionalProperty typing has been ignored",
                        triple.subject
                    ));
                }
            }
        }
        for triple in self.typed(&owl::FUNCTIONAL_PROPERTY) {
            if let Some(property) = model.property_mut(&triple.subject) {
                if property.is_annotation() {
                    events::warn(format!(
                        "property {} is an annotation property, the owl:FunctionalProperty typing has been ignored",
                        triple.subject
                    ));
                } else {
                    property.set_functional(true);
                }
            }
        }
        for triple in self.typed(&owl::DEPRECATED_PROPERTY) {
            if let Some(property) = model.property_mut(&triple.subject) {
                property.set_deprecated(true);
            }
        }
    }

    fn parse_classes(&self, ontology: &mut Ontology) {
        for triple in self.typed(&owl::CLASS) {
            if vocab::is_reserved(&triple.subject) {
                continue;
            }
            ontology
                .class_model_mut()
                .add_class(OntologyClass::new(triple.subject.clone()));
        }
        for triple in self.typed(&rdfs::CLASS) {
            if vocab::is_reserved(&triple.subject) {
                continue;
            }
            ontology
                .class_model_mut()
                .add_class(OntologyClass::new_rdfs(triple.subject.clone()));
        }
        for triple in self.typed(&owl::DEPRECATED_CLASS) {
            if vocab::is_reserved(&triple.subject) {
                continue;
            }
            let model = ontology.class_model_mut();
            model.add_class(OntologyClass::new(triple.subject.clone()));
            if let Some(class) = model.class_mut(&triple.subject) {
                class.set_deprecated(true);
            }
        }
        for triple in self.typed(&owl::RESTRICTION) {
            self.parse_restriction_declaration(ontology, &triple.subject);
        }
        for triple in self.typed(&owl::DATA_RANGE) {
            if vocab::is_reserved(&triple.subject) {
                continue;
            }
            let model = ontology.class_model_mut();
            if !model.add_class(OntologyClass::new_data_range(triple.subject.clone())) {
                if let Some(class) = model.class_mut(&triple.subject) {
                    if matches!(class.kind(), ClassKind::Owl | ClassKind::Rdfs) {
                        class.reclassify(ClassKind::DataRange);
                    }
                }
            }
        }
    }

    fn parse_restriction_declaration(&self, ontology: &mut Ontology, subject: &Resource) {
        let Some(Term::Resource(on_property)) = self
            .graph
            .object_for_subject_predicate(subject, &owl::ON_PROPERTY)
        else {
            events::warn(format!(
                "restriction {} has no owl:onProperty, the restriction has been skipped",
                subject
            ));
            return;
        };
        if vocab::is_reserved(on_property) {
            events::warn(format!(
                "restriction {} is on the reserved property {}, the restriction has been skipped",
                subject, on_property
            ));
            return;
        }
        match ontology.property_model().property(on_property) {
            None => {
                events::warn(format!(
                    "restriction {} is on the undeclared property {}, the restriction has been skipped",
                    subject, on_property
                ));
            }
            Some(property) if property.is_annotation() => {
                events::warn(format!(
                    "restriction {} is on the annotation property {}, the restriction has been skipped",
                    subject, on_property
                ));
            }
            Some(_) => {
                let model = ontology.class_model_mut();
                if !model.add_class(OntologyClass::new_restriction(
                    subject.clone(),
                    on_property.clone(),
                )) {
                    if let Some(class) = model.class_mut(subject) {
                        if matches!(class.kind(), ClassKind::Owl | ClassKind::Rdfs) {
                            class.reclassify(ClassKind::Restriction(Restriction::new(
                                on_property.clone(),
                            )));
                        }
                    }
                }
            }
        }
    }

    fn parse_composites(&self, ontology: &mut Ontology) {
        for triple in self.graph.triples_for_predicate(&owl::UNION_OF) {
            self.parse_composition(ontology, triple, true);
        }
        for triple in self.graph.triples_for_predicate(&owl::INTERSECTION_OF) {
            self.parse_composition(ontology, triple, false);
        }
        for triple in self.graph.triples_for_predicate(&owl::COMPLEMENT_OF) {
            let subject = &triple.subject;
            if ontology.class_model().class(subject).is_none() {
                events::warn(format!(
                    "complement class {} is not declared, the axiom has been skipped",
                    subject
                ));
                continue;
            }
            let Some(of) = triple.object.as_resource() else {
                events::warn(format!(
                    "complement of class {} is not a resource, the axiom has been skipped",
                    subject
                ));
                continue;
            };
            if ontology.class_model().class(of).is_none() {
                events::warn(format!(
                    "class {} complements the undefined class {}, the axiom has been skipped",
                    subject, of
                ));
                continue;
            }
            if let Some(class) = ontology.class_model_mut().class_mut(subject) {
                class.reclassify(ClassKind::Complement { of: of.clone() });
            }
        }
        for triple in self.graph.triples_for_predicate(&owl::ONE_OF) {
            self.parse_one_of(ontology, triple);
        }
    }

    fn parse_composition(&self, ontology: &mut Ontology, triple: &Triple, union: bool) {
        let subject = &triple.subject;
        if ontology.class_model().class(subject).is_none() {
            events::warn(format!(
                "composite class {} is not declared, the axiom has been skipped",
                subject
            ));
            return;
        }
        if let Some(class) = ontology.class_model_mut().class_mut(subject) {
            class.reclassify(if union {
                ClassKind::Union
            } else {
                ClassKind::Intersection
            });
        }
        let Some(composite) = ontology.class_model().class(subject).cloned() else {
            return;
        };
        for item in self.rdf_list_items(&triple.object) {
            let Some(resource) = item.as_resource() else {
                events::warn(format!(
                    "composite class {} lists the literal member {}, the member has been skipped",
                    subject, item
                ));
                continue;
            };
            let Some(member) = ontology.class_model().class(resource).cloned() else {
                events::warn(format!(
                    "composite class {} lists the undefined member {}, the member has been skipped",
                    subject, resource
                ));
                continue;
            };
            let model = ontology.class_model_mut();
            if union {
                model.add_union_member(&composite, &member);
            } else {
                model.add_intersection_member(&composite, &member);
            }
        }
    }

    fn parse_one_of(&self, ontology: &mut Ontology, triple: &Triple) {
        let subject = &triple.subject;
        let Some(class) = ontology.class_model().class(subject) else {
            events::warn(format!(
                "enumerated class {} is not declared, the axiom has been skipped",
                subject
            ));
            return;
        };
        let kind = class.kind().clone();
        let items = self.rdf_list_items(&triple.object);
        let Some(first) = items.first() else {
            return;
        };
        let literal_members = first.is_literal();
        match (&kind, literal_members) {
            // the first-declared variant is canonical
            (ClassKind::Enumerate, true) | (ClassKind::DataRange, false) => {
                events::warn(format!(
                    "class {} already enumerates the other member flavor, the oneOf list has been skipped",
                    subject
                ));
                return;
            }
            (ClassKind::Enumerate, false) | (ClassKind::DataRange, true) => (),
            (ClassKind::Owl | ClassKind::Rdfs, _) => {
                if let Some(class) = ontology.class_model_mut().class_mut(subject) {
                    class.reclassify(if literal_members {
                        ClassKind::DataRange
                    } else {
                        ClassKind::Enumerate
                    });
                }
            }
            _ => {
                events::warn(format!(
                    "class {} is not enumerable, the oneOf list has been skipped",
                    subject
                ));
                return;
            }
        }
        let Some(class) = ontology.class_model().class(subject).cloned() else {
            return;
        };
        for item in items {
            match item {
                Term::Resource(resource) if !literal_members => {
                    let fact = Fact::new(resource.clone());
                    ontology.data_mut().add_fact(fact);
                    ontology
                        .class_model_mut()
                        .add_one_of_member(&class, resource);
                }
                Term::Literal(literal) if literal_members => {
                    ontology.data_mut().add_literal(literal.clone());
                    ontology.class_model_mut().add_one_of_member(&class, literal);
                }
                other => {
                    events::warn(format!(
                        "enumerated class {} mixes member flavors, the member {} has been skipped",
                        subject, other
                    ));
                }
            }
        }
    }

    fn parse_facts(&self, ontology: &mut Ontology) {
        // every rdf:type to a user-defined class asserts a fact; built-in and
        // literal-compatible classes all live in the reserved namespaces
        for triples in self.types.values() {
            for triple in triples {
                let Some(object) = triple.object.as_resource() else {
                    continue;
                };
                if vocab::is_reserved(object) {
                    continue;
                }
                let Some(class) = ontology.class_model().class(object).cloned() else {
                    continue;
                };
                let fact = Fact::new(triple.subject.clone());
                let data = ontology.data_mut();
                data.add_fact(fact.clone());
                data.add_class_type(&fact, &class);
            }
        }
    }

    fn refine_restrictions(&self, ontology: &mut Ontology) {
        let restrictions: Vec<Resource> = ontology
            .class_model()
            .iter()
            .filter(|class| class.restriction().is_some())
            .map(|class| class.resource().clone())
            .collect();
        for resource in restrictions {
            let Some(constraint) = self.restriction_constraint(&resource, ontology) else {
                continue;
            };
            if let Some(restriction) = ontology
                .class_model_mut()
                .class_mut(&resource)
                .and_then(OntologyClass::restriction_mut)
            {
                if !restriction.refine(constraint) {
                    events::warn(format!(
                        "restriction {} is already refined, the refinement has been ignored",
                        resource
                    ));
                }
            }
        }
    }

    /// Probes the restriction constraints in a fixed order: cardinality,
    /// hasValue, allValuesFrom, someValuesFrom. The first match wins.
    fn restriction_constraint(
        &self,
        subject: &Resource,
        ontology: &Ontology,
    ) -> Option<RestrictionConstraint> {
        if let Some(exact) = self.cardinality_bound(subject, &owl::CARDINALITY) {
            return Some(RestrictionConstraint::Cardinality {
                min: exact,
                max: exact,
            });
        }
        let min = self.cardinality_bound(subject, &owl::MIN_CARDINALITY);
        let max = self.cardinality_bound(subject, &owl::MAX_CARDINALITY);
        if min.is_some() || max.is_some() {
            return Some(RestrictionConstraint::Cardinality {
                min: min.unwrap_or(0),
                max: max.unwrap_or(0),
            });
        }
        if let Some(value) = self
            .graph
            .object_for_subject_predicate(subject, &owl::HAS_VALUE)
        {
            return Some(RestrictionConstraint::HasValue(value.clone()));
        }
        if let Some(value) = self
            .graph
            .object_for_subject_predicate(subject, &owl::ALL_VALUES_FROM)
        {
            match value.as_resource() {
                Some(class) if ontology.class_model().class(class).is_some() => {
                    return Some(RestrictionConstraint::AllValuesFrom(class.clone()));
                }
                _ => events::warn(format!(
                    "restriction {} requires all values from an undefined class, the constraint has been skipped",
                    subject
                )),
            }
        }
        if let Some(value) = self
            .graph
            .object_for_subject_predicate(subject, &owl::SOME_VALUES_FROM)
        {
            match value.as_resource() {
                Some(class) if ontology.class_model().class(class).is_some() => {
                    return Some(RestrictionConstraint::SomeValuesFrom(class.clone()));
                }
                _ => events::warn(format!(
                    "restriction {} requires some values from an undefined class, the constraint has been skipped",
                    subject
                )),
            }
        }
        None
    }

    fn cardinality_bound(&self, subject: &Resource, predicate: &Resource) -> Option<u64> {
        let value = self.graph.object_for_subject_predicate(subject, predicate)?;
        let Some(literal) = value.as_literal() else {
            events::warn(format!(
                "cardinality of restriction {} is not a literal, the bound has been skipped",
                subject
            ));
            return None;
        };
        if !(literal.is_plain() || literal.is_numeric()) {
            events::warn(format!(
                "cardinality of restriction {} is not a numeric literal, the bound has been skipped",
                subject
            ));
            return None;
        }
        match Integer::from_str(literal.value().trim()) {
            Ok(parsed) => {
                let bound = u64::try_from(i64::from(parsed)).ok();
                if bound.is_none() {
                    events::warn(format!(
                        "cardinality of restriction {} is negative, the bound has been skipped",
                        subject
                    ));
                }
                bound
            }
            Err(_) => {
                events::warn(format!(
                    "cardinality of restriction {} does not parse as an integer, the bound has been skipped",
                    subject
                ));
                None
            }
        }
    }

    fn parse_domains_and_ranges(&self, ontology: &mut Ontology) {
        for triple in self.graph.triples_for_predicate(&rdfs::DOMAIN) {
            self.attach_domain_or_range(ontology, triple, true);
        }
        for triple in self.graph.triples_for_predicate(&rdfs::RANGE) {
            self.attach_domain_or_range(ontology, triple, false);
        }
    }

    fn attach_domain_or_range(&self, ontology: &mut Ontology, triple: &Triple, domain: bool) {
        let subject = &triple.subject;
        if vocab::is_reserved(subject) {
            return;
        }
        let relation = if domain { "domain" } else { "range" };
        let Some(class_resource) = triple.object.as_resource() else {
            events::warn(format!(
                "the {} of property {} is not a resource, the axiom has been skipped",
                relation, subject
            ));
            return;
        };
        if ontology.class_model().class(class_resource).is_none() {
            events::warn(format!(
                "the {} of property {} references the undefined class {}, the axiom has been skipped",
                relation, subject, class_resource
            ));
            return;
        }
        match ontology.property_model_mut().property_mut(subject) {
            Some(property) if !property.is_annotation() => {
                if domain {
                    property.set_domain(class_resource.clone());
                } else {
                    property.set_range(class_resource.clone());
                }
            }
            Some(_) => events::warn(format!(
                "property {} is an annotation property, its {} has been skipped",
                subject, relation
            )),
            None => events::warn(format!(
                "the {} of the undeclared property {} has been skipped",
                relation, subject
            )),
        }
    }

    fn parse_property_relations(&self, ontology: &mut Ontology) {
        for triple in self.graph.triples_for_predicate(&rdfs::SUB_PROPERTY_OF) {
            if let Some((child, parent)) = self.property_pair(ontology, triple) {
                ontology
                    .property_model_mut()
                    .add_sub_property_of(&child, &parent);
            }
        }
        for triple in self.graph.triples_for_predicate(&owl::EQUIVALENT_PROPERTY) {
            if let Some((a, b)) = self.property_pair(ontology, triple) {
                ontology.property_model_mut().add_equivalent_property(&a, &b);
            }
        }
        for triple in self.graph.triples_for_predicate(&owl::INVERSE_OF) {
            if let Some((a, b)) = self.property_pair(ontology, triple) {
                ontology.property_model_mut().add_inverse_of(&a, &b);
            }
        }
    }

    fn property_pair(
        &self,
        ontology: &Ontology,
        triple: &Triple,
    ) -> Option<(OntologyProperty, OntologyProperty)> {
        let Some(object) = triple.object.as_resource() else {
            events::warn(format!(
                "property relation {} has a literal object, the axiom has been skipped",
                triple
            ));
            return None;
        };
        let model = ontology.property_model();
        match (
            model.property(&triple.subject).cloned(),
            model.property(object).cloned(),
        ) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => {
                events::warn(format!(
                    "property relation {} references an undeclared property, the axiom has been skipped",
                    triple
                ));
                None
            }
        }
    }

    fn parse_class_relations(&self, ontology: &mut Ontology) {
        for triple in self.graph.triples_for_predicate(&rdfs::SUB_CLASS_OF) {
            if let Some((child, parent)) = self.class_pair(ontology, triple) {
                ontology.class_model_mut().add_sub_class_of(&child, &parent);
            }
        }
        for triple in self.graph.triples_for_predicate(&owl::EQUIVALENT_CLASS) {
            if let Some((a, b)) = self.class_pair(ontology, triple) {
                ontology.class_model_mut().add_equivalent_class(&a, &b);
            }
        }
        for triple in self.graph.triples_for_predicate(&owl::DISJOINT_WITH) {
            if let Some((a, b)) = self.class_pair(ontology, triple) {
                ontology.class_model_mut().add_disjoint_with(&a, &b);
            }
        }
    }

    fn class_pair(
        &self,
        ontology: &Ontology,
        triple: &Triple,
    ) -> Option<(OntologyClass, OntologyClass)> {
        let Some(object) = triple.object.as_resource() else {
            events::warn(format!(
                "class relation {} has a literal object, the axiom has been skipped",
                triple
            ));
            return None;
        };
        let model = ontology.class_model();
        match (
            model.class(&triple.subject).cloned(),
            model.class(object).cloned(),
        ) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => {
                events::warn(format!(
                    "class relation {} references an undefined class, the axiom has been dropped",
                    triple
                ));
                None
            }
        }
    }

    fn parse_fact_relations(&self, ontology: &mut Ontology) {
        for triple in self.graph.triples_for_predicate(&owl::SAME_AS) {
            self.parse_fact_pair(ontology, triple, true);
        }
        for triple in self.graph.triples_for_predicate(&owl::DIFFERENT_FROM) {
            self.parse_fact_pair(ontology, triple, false);
        }
    }

    fn parse_fact_pair(&self, ontology: &mut Ontology, triple: &Triple, same: bool) {
        let Some(object) = triple.object.as_resource() else {
            events::warn(format!(
                "fact relation {} has a literal object, the axiom has been skipped",
                triple
            ));
            return;
        };
        let a = Fact::new(triple.subject.clone());
        let b = Fact::new(object.clone());
        let data = ontology.data_mut();
        data.add_fact(a.clone());
        data.add_fact(b.clone());
        if same {
            data.add_same_as(&a, &b);
        } else {
            data.add_different_from(&a, &b);
        }
    }

    fn parse_assertions(&self, ontology: &mut Ontology) {
        let user_properties: Vec<OntologyProperty> = ontology
            .property_model()
            .iter()
            .filter(|property| {
                !property.is_annotation() && !vocab::is_reserved(property.resource())
            })
            .cloned()
            .collect();
        for property in user_properties {
            for triple in self.graph.triples_for_predicate(property.resource()) {
                match &triple.object {
                    Term::Literal(_) if property.is_object() => {
                        events::warn(format!(
                            "object property assertion {} has a literal object, the assertion has been dropped",
                            triple
                        ));
                    }
                    Term::Resource(_) if property.is_datatype() => {
                        events::warn(format!(
                            "datatype property assertion {} has a resource object, the assertion has been dropped",
                            triple
                        ));
                    }
                    Term::Resource(object) => {
                        let subject = Fact::new(triple.subject.clone());
                        let object = Fact::new(object.clone());
                        let data = ontology.data_mut();
                        data.add_fact(subject.clone());
                        data.add_fact(object.clone());
                        data.add_assertion(&subject, &property, &object);
                    }
                    Term::Literal(literal) => {
                        let subject = Fact::new(triple.subject.clone());
                        let data = ontology.data_mut();
                        data.add_fact(subject.clone());
                        data.add_literal_assertion(&subject, &property, literal.clone());
                    }
                }
            }
        }
    }

    fn parse_annotations(&self, ontology: &mut Ontology) {
        let structural = structural_predicates();
        let assertion_predicates: FxHashSet<u64> = ontology
            .property_model()
            .iter()
            .filter(|property| !property.is_annotation())
            .map(OntologyProperty::fingerprint)
            .collect();
        let skipped =
            |predicate: &Resource| -> bool {
                structural.contains(&predicate.fingerprint())
                    || assertion_predicates.contains(&predicate.fingerprint())
            };

        let name = ontology.name().clone();
        for triple in self.graph.triples_for_subject(&name) {
            if skipped(&triple.predicate) {
                continue;
            }
            ontology.add_annotation(triple.predicate.clone(), triple.object.clone());
        }

        let classes: Vec<OntologyClass> = ontology
            .class_model()
            .iter()
            .filter(|class| !vocab::is_reserved(class.resource()))
            .cloned()
            .collect();
        for class in classes {
            for triple in self.graph.triples_for_subject(class.resource()) {
                if skipped(&triple.predicate) {
                    continue;
                }
                ontology.class_model_mut().add_annotation(
                    &class,
                    triple.predicate.clone(),
                    triple.object.clone(),
                );
            }
        }

        let properties: Vec<OntologyProperty> = ontology
            .property_model()
            .iter()
            .filter(|property| !vocab::is_reserved(property.resource()))
            .cloned()
            .collect();
        for property in properties {
            // DC built-ins are not in the reserved namespaces but are not
            // user properties either
            if property.resource().as_str().starts_with(vocab::DC_NAMESPACE) {
                continue;
            }
            for triple in self.graph.triples_for_subject(property.resource()) {
                if skipped(&triple.predicate) {
                    continue;
                }
                ontology.property_model_mut().add_annotation(
                    &property,
                    triple.predicate.clone(),
                    triple.object.clone(),
                );
            }
        }

        let facts: Vec<Fact> = ontology.data().iter_facts().cloned().collect();
        for fact in facts {
            if vocab::is_reserved(fact.resource()) {
                continue;
            }
            for triple in self.graph.triples_for_subject(fact.resource()) {
                if skipped(&triple.predicate) {
                    continue;
                }
                ontology.data_mut().add_annotation(
                    &fact,
                    triple.predicate.clone(),
                    triple.object.clone(),
                );
            }
        }
    }

    fn rdf_list_items(&self, head: &Term) -> Vec<Term> {
        let mut items = Vec::new();
        let mut context = FxHashSet::default();
        let mut current = head.clone();
        loop {
            let Some(node) = current.as_resource().cloned() else {
                break;
            };
            if node == *rdf::NIL {
                break;
            }
            if !context.insert(node.fingerprint()) {
                events::warn(format!("RDF list node {node} is cyclic, the walk has been cut"));
                break;
            }
            match self.graph.object_for_subject_predicate(&node, &rdf::FIRST) {
                Some(first) => items.push(first.clone()),
                None => {
                    events::warn(format!(
                        "RDF list node {node} has no rdf:first, the walk has been cut"
                    ));
                    break;
                }
            }
            match self.graph.object_for_subject_predicate(&node, &rdf::REST) {
                Some(rest) => current = rest.clone(),
                None => {
                    events::warn(format!(
                        "RDF list node {node} has no rdf:rest, the walk has been cut"
                    ));
                    break;
                }
            }
        }
        items
    }
}

fn structural_predicates() -> FxHashSet<u64> {
    [
        &*rdf::TYPE,
        &*rdf::FIRST,
        &*rdf::REST,
        &*rdfs::SUB_CLASS_OF,
        &*rdfs::SUB_PROPERTY_OF,
        &*rdfs::DOMAIN,
        &*rdfs::RANGE,
        &*owl::ON_PROPERTY,
        &*owl::ONE_OF,
        &*owl::UNION_OF,
        &*owl::INTERSECTION_OF,
        &*owl::COMPLEMENT_OF,
        &*owl::ALL_VALUES_FROM,
        &*owl::SOME_VALUES_FROM,
        &*owl::HAS_VALUE,
        &*owl::CARDINALITY,
        &*owl::MIN_CARDINALITY,
        &*owl::MAX_CARDINALITY,
        &*owl::SAME_AS,
        &*owl::DIFFERENT_FROM,
        &*owl::EQUIVALENT_CLASS,
        &*owl::DISJOINT_WITH,
        &*owl::EQUIVALENT_PROPERTY,
        &*owl::INVERSE_OF,
    ]
    .iter()
    .map(|resource| resource.fingerprint())
    .collect()
}
