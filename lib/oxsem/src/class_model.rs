//! T-Box class model: class registry and class taxonomies.

use crate::entity::OntologyClass;
use crate::events;
use crate::taxonomy::{Taxonomy, TaxonomyEntry};
use oxterm::{vocab::owl, vocab::rdfs, Resource, Term};
use rustc_hash::FxHashMap;

/// The T-Box class side of an ontology: a registry of
/// [`OntologyClass`]es and the taxonomies relating them.
///
/// Every relation adder requires its arguments to be registered in the model;
/// relating an unregistered class raises a warning and is ignored.
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    classes: FxHashMap<u64, OntologyClass>,
    sub_class_of: Taxonomy,
    equivalent_class: Taxonomy,
    disjoint_with: Taxonomy,
    union_of: Taxonomy,
    intersection_of: Taxonomy,
    one_of: Taxonomy,
    annotations: Taxonomy,
}

impl ClassModel {
    /// Creates a new empty class model.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of registered classes.
    #[inline]
    pub fn classes_count(&self) -> usize {
        self.classes.len()
    }

    /// Registers a class. Returns `true` if it was not already registered;
    /// an already-registered class keeps its first definition.
    pub fn add_class(&mut self, class: OntologyClass) -> bool {
        match self.classes.entry(class.fingerprint()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(class);
                true
            }
        }
    }

    /// Removes a class from the registry.
    pub fn remove_class(&mut self, resource: &Resource) -> Option<OntologyClass> {
        self.classes.remove(&resource.fingerprint())
    }

    /// Returns the registered class identified by the given resource.
    pub fn class(&self, resource: &Resource) -> Option<&OntologyClass> {
        self.class_by_fingerprint(resource.fingerprint())
    }

    /// Returns the registered class with the given fingerprint.
    pub fn class_by_fingerprint(&self, fingerprint: u64) -> Option<&OntologyClass> {
        self.classes.get(&fingerprint)
    }

    pub(crate) fn class_mut(&mut self, resource: &Resource) -> Option<&mut OntologyClass> {
        self.classes.get_mut(&resource.fingerprint())
    }

    /// Checks if the given class is registered.
    pub fn contains_class(&self, class: &OntologyClass) -> bool {
        self.classes.contains_key(&class.fingerprint())
    }

    /// Returns all the registered classes.
    pub fn iter(&self) -> impl Iterator<Item = &OntologyClass> {
        self.classes.values()
    }

    /// Relates a class to one of its superclasses.
    pub fn add_sub_class_of(&mut self, child: &OntologyClass, parent: &OntologyClass) -> &mut Self {
        if self.check_registered(child) && self.check_registered(parent) {
            self.sub_class_of.add_entry(TaxonomyEntry::new(
                child.resource().clone(),
                rdfs::SUB_CLASS_OF.clone(),
                parent.resource().clone(),
            ));
        }
        self
    }

    /// Relates two equivalent classes. One direction is stored; reasoning
    /// treats the relation as symmetric.
    pub fn add_equivalent_class(&mut self, a: &OntologyClass, b: &OntologyClass) -> &mut Self {
        if self.check_registered(a) && self.check_registered(b) {
            self.equivalent_class.add_entry(TaxonomyEntry::new(
                a.resource().clone(),
                owl::EQUIVALENT_CLASS.clone(),
                b.resource().clone(),
            ));
        }
        self
    }

    /// Relates two disjoint classes. One direction is stored; reasoning
    /// treats the relation as symmetric.
    pub fn add_disjoint_with(&mut self, a: &OntologyClass, b: &OntologyClass) -> &mut Self {
        if self.check_registered(a) && self.check_registered(b) {
            self.disjoint_with.add_entry(TaxonomyEntry::new(
                a.resource().clone(),
                owl::DISJOINT_WITH.clone(),
                b.resource().clone(),
            ));
        }
        self
    }

    /// Adds a member class to a union class.
    pub fn add_union_member(&mut self, union: &OntologyClass, member: &OntologyClass) -> &mut Self {
        if self.check_registered(union) && self.check_registered(member) {
            self.union_of.add_entry(TaxonomyEntry::new(
                union.resource().clone(),
                owl::UNION_OF.clone(),
                member.resource().clone(),
            ));
        }
        self
    }

    /// Adds a member class to an intersection class.
    pub fn add_intersection_member(
        &mut self,
        intersection: &OntologyClass,
        member: &OntologyClass,
    ) -> &mut Self {
        if self.check_registered(intersection) && self.check_registered(member) {
            self.intersection_of.add_entry(TaxonomyEntry::new(
                intersection.resource().clone(),
                owl::INTERSECTION_OF.clone(),
                member.resource().clone(),
            ));
        }
        self
    }

    /// Adds a fact or literal member to an enumerated or datarange class.
    pub fn add_one_of_member(
        &mut self,
        class: &OntologyClass,
        member: impl Into<Term>,
    ) -> &mut Self {
        if self.check_registered(class) {
            self.one_of.add_entry(TaxonomyEntry::new(
                class.resource().clone(),
                owl::ONE_OF.clone(),
                member,
            ));
        }
        self
    }

    /// Annotates a class.
    pub fn add_annotation(
        &mut self,
        class: &OntologyClass,
        predicate: Resource,
        value: impl Into<Term>,
    ) -> &mut Self {
        if self.check_registered(class) {
            self.annotations.add_entry(TaxonomyEntry::new(
                class.resource().clone(),
                predicate,
                value,
            ));
        }
        self
    }

    /// The subClassOf taxonomy.
    #[inline]
    pub fn sub_class_of(&self) -> &Taxonomy {
        &self.sub_class_of
    }

    /// The equivalentClass taxonomy.
    #[inline]
    pub fn equivalent_class(&self) -> &Taxonomy {
        &self.equivalent_class
    }

    /// The disjointWith taxonomy.
    #[inline]
    pub fn disjoint_with(&self) -> &Taxonomy {
        &self.disjoint_with
    }

    /// The unionOf membership taxonomy.
    #[inline]
    pub fn union_of(&self) -> &Taxonomy {
        &self.union_of
    }

    /// The intersectionOf membership taxonomy.
    #[inline]
    pub fn intersection_of(&self) -> &Taxonomy {
        &self.intersection_of
    }

    /// The oneOf membership taxonomy of enumerated and datarange classes.
    #[inline]
    pub fn one_of(&self) -> &Taxonomy {
        &self.one_of
    }

    /// The class annotations taxonomy.
    #[inline]
    pub fn annotations(&self) -> &Taxonomy {
        &self.annotations
    }

    pub(crate) fn sub_class_of_mut(&mut self) -> &mut Taxonomy {
        &mut self.sub_class_of
    }

    /// Returns a fresh model with the classes and entries of both models.
    pub fn union_with(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for class in other.iter() {
            result.add_class(class.clone());
        }
        result.sub_class_of = self.sub_class_of.union_with(&other.sub_class_of);
        result.equivalent_class = self.equivalent_class.union_with(&other.equivalent_class);
        result.disjoint_with = self.disjoint_with.union_with(&other.disjoint_with);
        result.union_of = self.union_of.union_with(&other.union_of);
        result.intersection_of = self.intersection_of.union_with(&other.intersection_of);
        result.one_of = self.one_of.union_with(&other.one_of);
        result.annotations = self.annotations.union_with(&other.annotations);
        result
    }

    /// Returns a fresh model with the classes and entries present in both
    /// models.
    pub fn intersection_with(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for class in self.iter() {
            if other.classes.contains_key(&class.fingerprint()) {
                result.add_class(class.clone());
            }
        }
        result.sub_class_of = self.sub_class_of.intersection_with(&other.sub_class_of);
        result.equivalent_class = self
            .equivalent_class
            .intersection_with(&other.equivalent_class);
        result.disjoint_with = self.disjoint_with.intersection_with(&other.disjoint_with);
        result.union_of = self.union_of.intersection_with(&other.union_of);
        result.intersection_of = self
            .intersection_of
            .intersection_with(&other.intersection_of);
        result.one_of = self.one_of.intersection_with(&other.one_of);
        result.annotations = self.annotations.intersection_with(&other.annotations);
        result
    }

    /// Returns a fresh model with the classes and entries of this model that
    /// are not present in `other`.
    ///
    /// Like [`Taxonomy::difference_with`], the result starts as the union of
    /// an empty model with this one before the subtraction.
    pub fn difference_with(&self, other: &Self) -> Self {
        let mut result = Self::new().union_with(self);
        for class in other.iter() {
            result.remove_class(class.resource());
        }
        result.sub_class_of = self.sub_class_of.difference_with(&other.sub_class_of);
        result.equivalent_class = self
            .equivalent_class
            .difference_with(&other.equivalent_class);
        result.disjoint_with = self.disjoint_with.difference_with(&other.disjoint_with);
        result.union_of = self.union_of.difference_with(&other.union_of);
        result.intersection_of = self
            .intersection_of
            .difference_with(&other.intersection_of);
        result.one_of = self.one_of.difference_with(&other.one_of);
        result.annotations = self.annotations.difference_with(&other.annotations);
        result
    }

    fn check_registered(&self, class: &OntologyClass) -> bool {
        if self.contains_class(class) {
            true
        } else {
            events::warn(format!(
                "class {} is not registered in the class model, the relation has been dropped",
                class
            ));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(name: &str) -> OntologyClass {
        OntologyClass::new(Resource::new_unchecked(format!("http://example.com/{name}")))
    }

    #[test]
    fn class_registration_keeps_first_definition() {
        let mut model = ClassModel::new();
        assert!(model.add_class(example("Dog")));
        assert!(!model.add_class(example("Dog")));
        assert_eq!(model.classes_count(), 1);
    }

    #[test]
    fn relations_require_registration() {
        let mut model = ClassModel::new();
        let dog = example("Dog");
        let animal = example("Animal");
        model.add_class(dog.clone());

        model.add_sub_class_of(&dog, &animal);
        assert!(model.sub_class_of().is_empty());

        model.add_class(animal.clone());
        model.add_sub_class_of(&dog, &animal);
        assert_eq!(model.sub_class_of().len(), 1);
    }

    #[test]
    fn set_operations() {
        let mut left = ClassModel::new();
        let a = example("A");
        let b = example("B");
        left.add_class(a.clone());
        left.add_class(b.clone());
        left.add_sub_class_of(&a, &b);

        let mut right = ClassModel::new();
        right.add_class(b.clone());

        let union = left.union_with(&right);
        assert_eq!(union.classes_count(), 2);

        let intersection = left.intersection_with(&right);
        assert_eq!(intersection.classes_count(), 1);

        let difference = left.difference_with(&right);
        assert_eq!(difference.classes_count(), 1);
        assert!(difference.contains_class(&a));
        assert_eq!(difference.sub_class_of().len(), 1);
    }
}
