//! Entailment procedures deriving the implicit consequences of the explicit
//! axioms.
//!
//! Every function is pure: inputs are never mutated and results are freshly
//! owned containers. Cyclic axiom graphs are handled by visit contexts, sets
//! of already-processed fingerprints that terminate every recursive walk.
//! On malformed input the procedures return empty or partial results, never
//! errors.

mod members;

pub use members::members_of;

use crate::class_model::ClassModel;
use crate::data::OntologyData;
use crate::entity::{Fact, OntologyClass, OntologyProperty};
use crate::property_model::PropertyModel;
use oxterm::Resource;
use rustc_hash::FxHashSet;

pub(crate) type VisitContext = FxHashSet<u64>;

/// Returns every class provably a specialization of `class`: the transitive
/// closure of subClassOf towards `class` and towards its equivalents, plus
/// the equivalents of every specialization found.
pub fn sub_classes_of(class: &OntologyClass, model: &ClassModel) -> ClassModel {
    let mut result = ClassModel::new();
    let mut context = VisitContext::default();
    let mut seeds = vec![class.clone()];
    seeds.extend(equivalent_class_set(class, model, &mut VisitContext::default()));
    for seed in &seeds {
        context.insert(seed.fingerprint());
    }
    for seed in &seeds {
        collect_specializations(seed.fingerprint(), model, &mut result, &mut context);
    }
    result
}

/// Returns every class provably a generalization of `class`: the dual of
/// [`sub_classes_of`].
pub fn super_classes_of(class: &OntologyClass, model: &ClassModel) -> ClassModel {
    let mut result = ClassModel::new();
    let mut context = VisitContext::default();
    let mut seeds = vec![class.clone()];
    seeds.extend(equivalent_class_set(class, model, &mut VisitContext::default()));
    for seed in &seeds {
        context.insert(seed.fingerprint());
    }
    for seed in &seeds {
        collect_generalizations(seed.fingerprint(), model, &mut result, &mut context);
    }
    result
}

/// Returns every class equivalent to `class`, walking the symmetric
/// transitive closure of equivalentClass in both stored directions.
pub fn equivalent_classes_of(class: &OntologyClass, model: &ClassModel) -> ClassModel {
    let mut result = ClassModel::new();
    for equivalent in equivalent_class_set(class, model, &mut VisitContext::default()) {
        result.add_class(equivalent);
    }
    result
}

/// Returns every class provably disjoint with `class`:
///
/// 1. its direct disjoints, with their equivalents and specializations,
/// 2. recursively, the disjoints of its superclasses and equivalents.
pub fn disjoint_classes_of(class: &OntologyClass, model: &ClassModel) -> ClassModel {
    let mut result = ClassModel::new();
    let mut context = VisitContext::default();
    collect_disjoints(class, model, &mut result, &mut context);
    result.remove_class(class.resource());
    result
}

/// Returns every property provably a specialization of `property`.
pub fn sub_properties_of(property: &OntologyProperty, model: &PropertyModel) -> PropertyModel {
    let mut result = PropertyModel::new();
    let mut context = VisitContext::default();
    let mut seeds = vec![property.clone()];
    seeds.extend(equivalent_property_set(
        property,
        model,
        &mut VisitContext::default(),
    ));
    for seed in &seeds {
        context.insert(seed.fingerprint());
    }
    for seed in &seeds {
        collect_property_specializations(seed.fingerprint(), model, &mut result, &mut context);
    }
    result
}

/// Returns every property provably a generalization of `property`.
pub fn super_properties_of(property: &OntologyProperty, model: &PropertyModel) -> PropertyModel {
    let mut result = PropertyModel::new();
    let mut context = VisitContext::default();
    let mut seeds = vec![property.clone()];
    seeds.extend(equivalent_property_set(
        property,
        model,
        &mut VisitContext::default(),
    ));
    for seed in &seeds {
        context.insert(seed.fingerprint());
    }
    for seed in &seeds {
        collect_property_generalizations(seed.fingerprint(), model, &mut result, &mut context);
    }
    result
}

/// Returns every property equivalent to `property`.
pub fn equivalent_properties_of(
    property: &OntologyProperty,
    model: &PropertyModel,
) -> PropertyModel {
    let mut result = PropertyModel::new();
    for equivalent in equivalent_property_set(property, model, &mut VisitContext::default()) {
        result.add_property(equivalent);
    }
    result
}

/// Returns the properties directly declared inverse of `property`, in either
/// stored direction.
pub fn inverse_properties_of(
    property: &OntologyProperty,
    model: &PropertyModel,
) -> PropertyModel {
    let mut result = PropertyModel::new();
    for entry in model
        .inverse_of()
        .entries_by_subject_fingerprint(property.fingerprint())
    {
        if let Some(resource) = entry.object().as_resource() {
            if let Some(inverse) = model.property(resource) {
                result.add_property(inverse.clone());
            }
        }
    }
    for entry in model
        .inverse_of()
        .entries_by_object_fingerprint(property.fingerprint())
    {
        if let Some(inverse) = model.property(entry.subject()) {
            result.add_property(inverse.clone());
        }
    }
    result
}

/// Returns every fact provably the same individual as `fact`.
pub fn same_facts_as(fact: &Fact, data: &OntologyData) -> OntologyData {
    let mut result = OntologyData::new();
    for same in same_fact_set(fact, data, &mut VisitContext::default()) {
        result.add_fact(same);
    }
    result
}

/// Returns every fact provably a different individual from `fact`: its
/// direct differentFrom facts with their sameAs closures, plus the
/// differentFrom closures of everything `fact` is the same as.
pub fn different_facts_from(fact: &Fact, data: &OntologyData) -> OntologyData {
    let mut result = OntologyData::new();
    collect_differents(fact, data, &mut result, &mut VisitContext::default());
    result
}

/// Returns the facts reachable from `fact` through assertions of the
/// transitive object property `property`.
///
/// The derived entries are not materialized; callers wanting them in the
/// data taxonomy add them through
/// [`OntologyData::add_inferred_assertion`](crate::OntologyData::add_inferred_assertion).
pub fn transitive_assertions_of(
    fact: &Fact,
    property: &OntologyProperty,
    data: &OntologyData,
) -> OntologyData {
    let mut result = OntologyData::new();
    if !property.is_object() || !property.is_transitive() {
        return result;
    }
    collect_transitive_objects(
        fact.fingerprint(),
        property.resource(),
        data,
        &mut result,
        &mut VisitContext::default(),
    );
    result
}

pub(crate) fn equivalent_class_set(
    class: &OntologyClass,
    model: &ClassModel,
    context: &mut VisitContext,
) -> Vec<OntologyClass> {
    let mut result = Vec::new();
    if !context.insert(class.fingerprint()) {
        return result;
    }
    let mut neighbors = Vec::new();
    for entry in model
        .equivalent_class()
        .entries_by_subject_fingerprint(class.fingerprint())
    {
        if let Some(resource) = entry.object().as_resource() {
            neighbors.push(resource.fingerprint());
        }
    }
    for entry in model
        .equivalent_class()
        .entries_by_object_fingerprint(class.fingerprint())
    {
        neighbors.push(entry.subject().fingerprint());
    }
    for fingerprint in neighbors {
        if context.contains(&fingerprint) {
            continue;
        }
        let Some(neighbor) = model.class_by_fingerprint(fingerprint) else {
            continue;
        };
        let neighbor = neighbor.clone();
        result.push(neighbor.clone());
        result.extend(equivalent_class_set(&neighbor, model, context));
    }
    result
}

fn collect_specializations(
    target: u64,
    model: &ClassModel,
    result: &mut ClassModel,
    context: &mut VisitContext,
) {
    let subs: Vec<u64> = model
        .sub_class_of()
        .entries_by_object_fingerprint(target)
        .map(|entry| entry.subject().fingerprint())
        .collect();
    for fingerprint in subs {
        if !context.insert(fingerprint) {
            continue;
        }
        let Some(sub) = model.class_by_fingerprint(fingerprint) else {
            continue;
        };
        let sub = sub.clone();
        result.add_class(sub.clone());
        for equivalent in equivalent_class_set(&sub, model, &mut VisitContext::default()) {
            if context.insert(equivalent.fingerprint()) {
                result.add_class(equivalent.clone());
                collect_specializations(equivalent.fingerprint(), model, result, context);
            }
        }
        collect_specializations(fingerprint, model, result, context);
    }
}

fn collect_generalizations(
    source: u64,
    model: &ClassModel,
    result: &mut ClassModel,
    context: &mut VisitContext,
) {
    let supers: Vec<u64> = model
        .sub_class_of()
        .entries_by_subject_fingerprint(source)
        .filter_map(|entry| entry.object().as_resource().map(Resource::fingerprint))
        .collect();
    for fingerprint in supers {
        if !context.insert(fingerprint) {
            continue;
        }
        let Some(parent) = model.class_by_fingerprint(fingerprint) else {
            continue;
        };
        let parent = parent.clone();
        result.add_class(parent.clone());
        for equivalent in equivalent_class_set(&parent, model, &mut VisitContext::default()) {
            if context.insert(equivalent.fingerprint()) {
                result.add_class(equivalent.clone());
                collect_generalizations(equivalent.fingerprint(), model, result, context);
            }
        }
        collect_generalizations(fingerprint, model, result, context);
    }
}

fn collect_disjoints(
    class: &OntologyClass,
    model: &ClassModel,
    result: &mut ClassModel,
    context: &mut VisitContext,
) {
    if !context.insert(class.fingerprint()) {
        return;
    }
    let mut direct = Vec::new();
    for entry in model
        .disjoint_with()
        .entries_by_subject_fingerprint(class.fingerprint())
    {
        if let Some(resource) = entry.object().as_resource() {
            direct.push(resource.fingerprint());
        }
    }
    for entry in model
        .disjoint_with()
        .entries_by_object_fingerprint(class.fingerprint())
    {
        direct.push(entry.subject().fingerprint());
    }
    for fingerprint in direct {
        let Some(disjoint) = model.class_by_fingerprint(fingerprint) else {
            continue;
        };
        let disjoint = disjoint.clone();
        result.add_class(disjoint.clone());
        for equivalent in equivalent_class_set(&disjoint, model, &mut VisitContext::default()) {
            result.add_class(equivalent);
        }
        for sub in sub_classes_of(&disjoint, model).iter() {
            result.add_class(sub.clone());
        }
    }
    let supers: Vec<u64> = model
        .sub_class_of()
        .entries_by_subject_fingerprint(class.fingerprint())
        .filter_map(|entry| entry.object().as_resource().map(Resource::fingerprint))
        .collect();
    for fingerprint in supers {
        let Some(parent) = model.class_by_fingerprint(fingerprint) else {
            continue;
        };
        let parent = parent.clone();
        collect_disjoints(&parent, model, result, context);
    }
    for equivalent in equivalent_class_set(class, model, &mut VisitContext::default()) {
        collect_disjoints(&equivalent, model, result, context);
    }
}

pub(crate) fn equivalent_property_set(
    property: &OntologyProperty,
    model: &PropertyModel,
    context: &mut VisitContext,
) -> Vec<OntologyProperty> {
    let mut result = Vec::new();
    if !context.insert(property.fingerprint()) {
        return result;
    }
    let mut neighbors = Vec::new();
    for entry in model
        .equivalent_property()
        .entries_by_subject_fingerprint(property.fingerprint())
    {
        if let Some(resource) = entry.object().as_resource() {
            neighbors.push(resource.fingerprint());
        }
    }
    for entry in model
        .equivalent_property()
        .entries_by_object_fingerprint(property.fingerprint())
    {
        neighbors.push(entry.subject().fingerprint());
    }
    for fingerprint in neighbors {
        if context.contains(&fingerprint) {
            continue;
        }
        let Some(neighbor) = model.property_by_fingerprint(fingerprint) else {
            continue;
        };
        let neighbor = neighbor.clone();
        result.push(neighbor.clone());
        result.extend(equivalent_property_set(&neighbor, model, context));
    }
    result
}

fn collect_property_specializations(
    target: u64,
    model: &PropertyModel,
    result: &mut PropertyModel,
    context: &mut VisitContext,
) {
    let subs: Vec<u64> = model
        .sub_property_of()
        .entries_by_object_fingerprint(target)
        .map(|entry| entry.subject().fingerprint())
        .collect();
    for fingerprint in subs {
        if !context.insert(fingerprint) {
            continue;
        }
        let Some(sub) = model.property_by_fingerprint(fingerprint) else {
            continue;
        };
        let sub = sub.clone();
        result.add_property(sub.clone());
        for equivalent in equivalent_property_set(&sub, model, &mut VisitContext::default()) {
            if context.insert(equivalent.fingerprint()) {
                result.add_property(equivalent.clone());
                collect_property_specializations(
                    equivalent.fingerprint(),
                    model,
                    result,
                    context,
                );
            }
        }
        collect_property_specializations(fingerprint, model, result, context);
    }
}

fn collect_property_generalizations(
    source: u64,
    model: &PropertyModel,
    result: &mut PropertyModel,
    context: &mut VisitContext,
) {
    let supers: Vec<u64> = model
        .sub_property_of()
        .entries_by_subject_fingerprint(source)
        .filter_map(|entry| entry.object().as_resource().map(Resource::fingerprint))
        .collect();
    for fingerprint in supers {
        if !context.insert(fingerprint) {
            continue;
        }
        let Some(parent) = model.property_by_fingerprint(fingerprint) else {
            continue;
        };
        let parent = parent.clone();
        result.add_property(parent.clone());
        for equivalent in equivalent_property_set(&parent, model, &mut VisitContext::default()) {
            if context.insert(equivalent.fingerprint()) {
                result.add_property(equivalent.clone());
                collect_property_generalizations(
                    equivalent.fingerprint(),
                    model,
                    result,
                    context,
                );
            }
        }
        collect_property_generalizations(fingerprint, model, result, context);
    }
}

pub(crate) fn same_fact_set(
    fact: &Fact,
    data: &OntologyData,
    context: &mut VisitContext,
) -> Vec<Fact> {
    let mut result = Vec::new();
    if !context.insert(fact.fingerprint()) {
        return result;
    }
    let mut neighbors = Vec::new();
    for entry in data
        .same_as()
        .entries_by_subject_fingerprint(fact.fingerprint())
    {
        if let Some(resource) = entry.object().as_resource() {
            neighbors.push(Fact::new(resource.clone()));
        }
    }
    for entry in data
        .same_as()
        .entries_by_object_fingerprint(fact.fingerprint())
    {
        neighbors.push(Fact::new(entry.subject().clone()));
    }
    for neighbor in neighbors {
        if context.contains(&neighbor.fingerprint()) {
            continue;
        }
        result.push(neighbor.clone());
        result.extend(same_fact_set(&neighbor, data, context));
    }
    result
}

fn collect_differents(
    fact: &Fact,
    data: &OntologyData,
    result: &mut OntologyData,
    context: &mut VisitContext,
) {
    if !context.insert(fact.fingerprint()) {
        return;
    }
    let mut direct = Vec::new();
    for entry in data
        .different_from()
        .entries_by_subject_fingerprint(fact.fingerprint())
    {
        if let Some(resource) = entry.object().as_resource() {
            direct.push(Fact::new(resource.clone()));
        }
    }
    for entry in data
        .different_from()
        .entries_by_object_fingerprint(fact.fingerprint())
    {
        direct.push(Fact::new(entry.subject().clone()));
    }
    for different in direct {
        for same in same_fact_set(&different, data, &mut VisitContext::default()) {
            result.add_fact(same);
        }
        result.add_fact(different);
    }
    for same in same_fact_set(fact, data, &mut VisitContext::default()) {
        collect_differents(&same, data, result, context);
    }
}

fn collect_transitive_objects(
    subject: u64,
    predicate: &Resource,
    data: &OntologyData,
    result: &mut OntologyData,
    context: &mut VisitContext,
) {
    if !context.insert(subject) {
        return;
    }
    let objects: Vec<Resource> = data
        .assertions()
        .entries_by_subject_fingerprint(subject)
        .filter(|entry| entry.predicate() == predicate)
        .filter_map(|entry| entry.object().as_resource().cloned())
        .collect();
    for object in objects {
        result.add_fact(Fact::new(object.clone()));
        collect_transitive_objects(object.fingerprint(), predicate, data, result, context);
    }
}
