//! Membership computation for plain, restriction, composite, enumerated and
//! literal-compatible classes.

use super::{
    equivalent_class_set, equivalent_property_set, same_fact_set, sub_classes_of,
    sub_properties_of, VisitContext,
};
use crate::base;
use crate::class_model::ClassModel;
use crate::data::OntologyData;
use crate::entity::{ClassKind, Fact, OntologyClass, Restriction, RestrictionConstraint};
use crate::ontology::Ontology;
use crate::taxonomy::Taxonomy;
use oxterm::{vocab::rdfs, vocab::xsd, Resource, Term};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// Returns the facts (or, for datarange and literal-compatible classes, the
/// literals) belonging to `class`, dispatching on its kind.
pub fn members_of(class: &OntologyClass, ontology: &Ontology) -> OntologyData {
    members_of_with(class, ontology, &mut VisitContext::default())
}

fn members_of_with(
    class: &OntologyClass,
    ontology: &Ontology,
    context: &mut VisitContext,
) -> OntologyData {
    if !context.insert(class.fingerprint()) {
        // composite cycle, cut the branch
        return OntologyData::new();
    }
    let result = match class.kind() {
        ClassKind::Restriction(restriction) => members_of_restriction(restriction, ontology),
        ClassKind::Enumerate => members_of_enumerate(class, ontology),
        ClassKind::DataRange => members_of_data_range(class, ontology),
        ClassKind::Union => members_of_union(class, ontology, context),
        ClassKind::Intersection => members_of_intersection(class, ontology, context),
        ClassKind::Complement { of } => members_of_complement(of, ontology, context),
        ClassKind::Owl | ClassKind::Rdfs => {
            if is_literal_compatible_class(class, ontology.class_model()) {
                members_of_literal_compatible(class, ontology)
            } else {
                members_of_plain(class, ontology)
            }
        }
    };
    context.remove(&class.fingerprint());
    result
}

fn members_of_plain(class: &OntologyClass, ontology: &Ontology) -> OntologyData {
    let model = ontology.class_model();
    let data = ontology.data();
    let mut compatible = FxHashSet::default();
    compatible.insert(class.fingerprint());
    for sub in sub_classes_of(class, model).iter() {
        compatible.insert(sub.fingerprint());
    }
    for equivalent in equivalent_class_set(class, model, &mut VisitContext::default()) {
        compatible.insert(equivalent.fingerprint());
    }

    let mut result = OntologyData::new();
    for fingerprint in compatible {
        for entry in data.class_type().entries_by_object_fingerprint(fingerprint) {
            let subject = Fact::new(entry.subject().clone());
            for same in same_fact_set(&subject, data, &mut VisitContext::default()) {
                result.add_fact(same);
            }
            result.add_fact(subject);
        }
    }
    result
}

fn members_of_enumerate(class: &OntologyClass, ontology: &Ontology) -> OntologyData {
    let data = ontology.data();
    let mut result = OntologyData::new();
    for entry in ontology
        .class_model()
        .one_of()
        .entries_by_subject_fingerprint(class.fingerprint())
    {
        if let Some(resource) = entry.object().as_resource() {
            let member = Fact::new(resource.clone());
            for same in same_fact_set(&member, data, &mut VisitContext::default()) {
                result.add_fact(same);
            }
            result.add_fact(member);
        }
    }
    result
}

fn members_of_data_range(class: &OntologyClass, ontology: &Ontology) -> OntologyData {
    let mut result = OntologyData::new();
    for entry in ontology
        .class_model()
        .one_of()
        .entries_by_subject_fingerprint(class.fingerprint())
    {
        if let Some(literal) = entry.object().as_literal() {
            result.add_literal(literal.clone());
        }
    }
    result
}

fn members_of_union(
    class: &OntologyClass,
    ontology: &Ontology,
    context: &mut VisitContext,
) -> OntologyData {
    let model = ontology.class_model();
    let members: Vec<Resource> = model
        .union_of()
        .entries_by_subject_fingerprint(class.fingerprint())
        .filter_map(|entry| entry.object().as_resource().cloned())
        .collect();
    let mut result = OntologyData::new();
    for resource in members {
        let Some(child) = model.class(&resource) else {
            continue;
        };
        let child = child.clone();
        result = result.union_with(&members_of_with(&child, ontology, context));
    }
    result
}

fn members_of_intersection(
    class: &OntologyClass,
    ontology: &Ontology,
    context: &mut VisitContext,
) -> OntologyData {
    let model = ontology.class_model();
    let members: Vec<Resource> = model
        .intersection_of()
        .entries_by_subject_fingerprint(class.fingerprint())
        .filter_map(|entry| entry.object().as_resource().cloned())
        .collect();
    let mut result: Option<OntologyData> = None;
    for resource in members {
        let Some(child) = model.class(&resource) else {
            continue;
        };
        let child = child.clone();
        let child_members = members_of_with(&child, ontology, context);
        result = Some(match result {
            None => child_members,
            Some(accumulated) => accumulated.intersection_with(&child_members),
        });
    }
    result.unwrap_or_default()
}

fn members_of_complement(
    of: &Resource,
    ontology: &Ontology,
    context: &mut VisitContext,
) -> OntologyData {
    let Some(target) = ontology.class_model().class(of) else {
        return OntologyData::new();
    };
    let target = target.clone();
    let excluded = members_of_with(&target, ontology, context);
    let mut result = OntologyData::new();
    for fact in ontology.data().iter_facts() {
        if !excluded.contains_fact(fact) {
            result.add_fact(fact.clone());
        }
    }
    result
}

fn members_of_literal_compatible(class: &OntologyClass, ontology: &Ontology) -> OntologyData {
    let model = ontology.class_model();
    let data = ontology.data();
    let mut result = OntologyData::new();

    let closure = equivalence_closure_resources(class.resource(), model);
    let mut compatible: FxHashSet<u64> = closure.iter().map(Resource::fingerprint).collect();

    if compatible.contains(&rdfs::LITERAL.fingerprint()) {
        for literal in data.iter_literals() {
            result.add_literal(literal.clone());
        }
        return result;
    }
    if compatible.contains(&xsd::STRING.fingerprint()) {
        for literal in data.iter_literals() {
            if literal.is_plain() || literal.is_string_like() {
                result.add_literal(literal.clone());
            }
        }
        return result;
    }
    for sub in sub_classes_of(class, model).iter() {
        compatible.insert(sub.fingerprint());
    }
    for literal in data.iter_literals() {
        if let Some(datatype) = literal.datatype() {
            if compatible.contains(&datatype.fingerprint()) {
                result.add_literal(literal.clone());
            }
        }
    }
    result
}

fn members_of_restriction(restriction: &Restriction, ontology: &Ontology) -> OntologyData {
    let model = ontology.property_model();
    let data = ontology.data();
    let mut result = OntologyData::new();
    let Some(on_property) = model.property(restriction.on_property()) else {
        return result;
    };
    let Some(constraint) = restriction.constraint() else {
        // unrefined restrictions have no members
        return result;
    };

    let mut predicates = vec![on_property.resource().clone()];
    for sub in sub_properties_of(on_property, model).iter() {
        predicates.push(sub.resource().clone());
    }
    for equivalent in equivalent_property_set(on_property, model, &mut VisitContext::default()) {
        predicates.push(equivalent.resource().clone());
    }
    let mut assertions = Taxonomy::new();
    let mut seen = FxHashSet::default();
    for predicate in predicates {
        if seen.insert(predicate.fingerprint()) {
            assertions = assertions.union_with(&data.assertions().select_by_predicate(&predicate));
        }
    }

    match constraint {
        RestrictionConstraint::Cardinality { min, max } => {
            let mut counts: FxHashMap<u64, (Resource, u64)> = FxHashMap::default();
            for entry in assertions.iter() {
                let slot = counts
                    .entry(entry.subject().fingerprint())
                    .or_insert_with(|| (entry.subject().clone(), 0));
                slot.1 += 1;
            }
            for (subject, count) in counts.into_values() {
                if (*min == 0 || count >= *min) && (*max == 0 || count <= *max) {
                    result.add_fact(Fact::new(subject));
                }
            }
        }
        RestrictionConstraint::AllValuesFrom(target) => {
            result = members_of_value_restriction(target, true, &assertions, ontology);
        }
        RestrictionConstraint::SomeValuesFrom(target) => {
            result = members_of_value_restriction(target, false, &assertions, ontology);
        }
        RestrictionConstraint::HasValue(Term::Resource(value)) => {
            let mut compatible = FxHashSet::default();
            compatible.insert(value.fingerprint());
            for same in same_fact_set(&Fact::new(value.clone()), data, &mut VisitContext::default())
            {
                compatible.insert(same.fingerprint());
            }
            for entry in assertions.iter() {
                if compatible.contains(&entry.object().fingerprint()) {
                    result.add_fact(Fact::new(entry.subject().clone()));
                }
            }
        }
        RestrictionConstraint::HasValue(Term::Literal(value)) => {
            for entry in assertions.iter() {
                let Some(literal) = entry.object().as_literal() else {
                    continue;
                };
                match literal.compare_value(value) {
                    Some(Ordering::Equal) => {
                        result.add_fact(Fact::new(entry.subject().clone()));
                    }
                    Some(_) => (),
                    None => {
                        tracing::trace!(
                            "literal {literal} is not comparable with {value}, not a match"
                        );
                    }
                }
            }
        }
    }
    result
}

fn members_of_value_restriction(
    target: &Resource,
    universal: bool,
    assertions: &Taxonomy,
    ontology: &Ontology,
) -> OntologyData {
    let class_model = ontology.class_model();
    let data = ontology.data();
    let mut result = OntologyData::new();
    let Some(target_class) = class_model.class(target) else {
        return result;
    };

    let mut compatible = FxHashSet::default();
    compatible.insert(target_class.fingerprint());
    for sub in sub_classes_of(target_class, class_model).iter() {
        compatible.insert(sub.fingerprint());
    }
    for equivalent in equivalent_class_set(target_class, class_model, &mut VisitContext::default())
    {
        compatible.insert(equivalent.fingerprint());
    }

    let mut matching: FxHashMap<u64, Resource> = FxHashMap::default();
    let mut failing: FxHashSet<u64> = FxHashSet::default();
    let mut cache: FxHashMap<u64, bool> = FxHashMap::default();
    for entry in assertions.iter() {
        let Some(object) = entry.object().as_resource() else {
            continue;
        };
        if data.fact(object).is_none() {
            continue;
        }
        let qualified = data
            .class_type()
            .entries_by_subject_fingerprint(object.fingerprint())
            .any(|class_type| {
                class_type.object().as_resource().is_some_and(|resource| {
                    class_qualifies(resource, &compatible, class_model, &mut cache)
                })
            });
        if qualified {
            matching
                .entry(entry.subject().fingerprint())
                .or_insert_with(|| entry.subject().clone());
        } else {
            failing.insert(entry.subject().fingerprint());
        }
    }
    for (fingerprint, subject) in matching {
        if universal && failing.contains(&fingerprint) {
            continue;
        }
        result.add_fact(Fact::new(subject));
    }
    result
}

/// An asserted class type qualifies when it is compatible itself, or when
/// its equivalence or specialization closure reaches a compatible class.
fn class_qualifies(
    class_resource: &Resource,
    compatible: &FxHashSet<u64>,
    model: &ClassModel,
    cache: &mut FxHashMap<u64, bool>,
) -> bool {
    if compatible.contains(&class_resource.fingerprint()) {
        return true;
    }
    if let Some(&known) = cache.get(&class_resource.fingerprint()) {
        return known;
    }
    let qualified = model.class(class_resource).is_some_and(|class| {
        equivalent_class_set(class, model, &mut VisitContext::default())
            .iter()
            .any(|c| compatible.contains(&c.fingerprint()))
            || sub_classes_of(class, model)
                .iter()
                .any(|c| compatible.contains(&c.fingerprint()))
    });
    cache.insert(class_resource.fingerprint(), qualified);
    qualified
}

fn is_literal_compatible_class(class: &OntologyClass, model: &ClassModel) -> bool {
    equivalence_closure_resources(class.resource(), model)
        .iter()
        .any(base::is_literal_compatible)
}

/// The resources transitively linked to `resource` through equivalentClass
/// entries, registered or not, including `resource` itself.
fn equivalence_closure_resources(resource: &Resource, model: &ClassModel) -> Vec<Resource> {
    let mut context = VisitContext::default();
    let mut result = Vec::new();
    let mut stack = vec![resource.clone()];
    while let Some(current) = stack.pop() {
        if !context.insert(current.fingerprint()) {
            continue;
        }
        for entry in model
            .equivalent_class()
            .entries_by_subject_fingerprint(current.fingerprint())
        {
            if let Some(object) = entry.object().as_resource() {
                stack.push(object.clone());
            }
        }
        for entry in model
            .equivalent_class()
            .entries_by_object_fingerprint(current.fingerprint())
        {
            stack.push(entry.subject().clone());
        }
        result.push(current);
    }
    result
}
