//! T-Box property model: property registry and property taxonomies.

use crate::entity::OntologyProperty;
use crate::events;
use crate::taxonomy::{Taxonomy, TaxonomyEntry};
use oxterm::{vocab::owl, vocab::rdfs, Resource, Term};
use rustc_hash::FxHashMap;

/// The T-Box property side of an ontology: a registry of
/// [`OntologyProperty`]s and the taxonomies relating them.
///
/// Relation adders require registered arguments of compatible kinds
/// (object with object, datatype with datatype, never annotation);
/// incompatible relations raise a warning and are ignored.
#[derive(Debug, Clone, Default)]
pub struct PropertyModel {
    properties: FxHashMap<u64, OntologyProperty>,
    sub_property_of: Taxonomy,
    equivalent_property: Taxonomy,
    inverse_of: Taxonomy,
    annotations: Taxonomy,
}

impl PropertyModel {
    /// Creates a new empty property model.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of registered properties.
    #[inline]
    pub fn properties_count(&self) -> usize {
        self.properties.len()
    }

    /// Registers a property. Returns `true` if it was not already
    /// registered; an already-registered property keeps its first definition.
    pub fn add_property(&mut self, property: OntologyProperty) -> bool {
        match self.properties.entry(property.fingerprint()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(property);
                true
            }
        }
    }

    /// Removes a property from the registry.
    pub fn remove_property(&mut self, resource: &Resource) -> Option<OntologyProperty> {
        self.properties.remove(&resource.fingerprint())
    }

    /// Returns the registered property identified by the given resource.
    pub fn property(&self, resource: &Resource) -> Option<&OntologyProperty> {
        self.property_by_fingerprint(resource.fingerprint())
    }

    /// Returns the registered property with the given fingerprint.
    pub fn property_by_fingerprint(&self, fingerprint: u64) -> Option<&OntologyProperty> {
        self.properties.get(&fingerprint)
    }

    pub(crate) fn property_mut(&mut self, resource: &Resource) -> Option<&mut OntologyProperty> {
        self.properties.get_mut(&resource.fingerprint())
    }

    /// Checks if the given property is registered.
    pub fn contains_property(&self, property: &OntologyProperty) -> bool {
        self.properties.contains_key(&property.fingerprint())
    }

    /// Returns all the registered properties.
    pub fn iter(&self) -> impl Iterator<Item = &OntologyProperty> {
        self.properties.values()
    }

    /// Relates a property to one of its superproperties.
    pub fn add_sub_property_of(
        &mut self,
        child: &OntologyProperty,
        parent: &OntologyProperty,
    ) -> &mut Self {
        if self.check_compatible(child, parent) {
            self.sub_property_of.add_entry(TaxonomyEntry::new(
                child.resource().clone(),
                rdfs::SUB_PROPERTY_OF.clone(),
                parent.resource().clone(),
            ));
        }
        self
    }

    /// Relates two equivalent properties. One direction is stored; reasoning
    /// treats the relation as symmetric.
    pub fn add_equivalent_property(
        &mut self,
        a: &OntologyProperty,
        b: &OntologyProperty,
    ) -> &mut Self {
        if self.check_compatible(a, b) {
            self.equivalent_property.add_entry(TaxonomyEntry::new(
                a.resource().clone(),
                owl::EQUIVALENT_PROPERTY.clone(),
                b.resource().clone(),
            ));
        }
        self
    }

    /// Relates two mutually inverse object properties.
    pub fn add_inverse_of(&mut self, a: &OntologyProperty, b: &OntologyProperty) -> &mut Self {
        if self.check_compatible(a, b) {
            if a.is_object() && b.is_object() {
                self.inverse_of.add_entry(TaxonomyEntry::new(
                    a.resource().clone(),
                    owl::INVERSE_OF.clone(),
                    b.resource().clone(),
                ));
            } else {
                events::warn(format!(
                    "inverseOf only relates object properties, the relation between {} and {} has been dropped",
                    a, b
                ));
            }
        }
        self
    }

    /// Annotates a property.
    pub fn add_annotation(
        &mut self,
        property: &OntologyProperty,
        predicate: Resource,
        value: impl Into<Term>,
    ) -> &mut Self {
        if self.check_registered(property) {
            self.annotations.add_entry(TaxonomyEntry::new(
                property.resource().clone(),
                predicate,
                value,
            ));
        }
        self
    }

    /// The subPropertyOf taxonomy.
    #[inline]
    pub fn sub_property_of(&self) -> &Taxonomy {
        &self.sub_property_of
    }

    /// The equivalentProperty taxonomy.
    #[inline]
    pub fn equivalent_property(&self) -> &Taxonomy {
        &self.equivalent_property
    }

    /// The inverseOf taxonomy.
    #[inline]
    pub fn inverse_of(&self) -> &Taxonomy {
        &self.inverse_of
    }

    /// The property annotations taxonomy.
    #[inline]
    pub fn annotations(&self) -> &Taxonomy {
        &self.annotations
    }

    /// Returns a fresh model with the properties and entries of both models.
    pub fn union_with(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for property in other.iter() {
            result.add_property(property.clone());
        }
        result.sub_property_of = self.sub_property_of.union_with(&other.sub_property_of);
        result.equivalent_property = self
            .equivalent_property
            .union_with(&other.equivalent_property);
        result.inverse_of = self.inverse_of.union_with(&other.inverse_of);
        result.annotations = self.annotations.union_with(&other.annotations);
        result
    }

    /// Returns a fresh model with the properties and entries present in both
    /// models.
    pub fn intersection_with(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for property in self.iter() {
            if other.properties.contains_key(&property.fingerprint()) {
                result.add_property(property.clone());
            }
        }
        result.sub_property_of = self
            .sub_property_of
            .intersection_with(&other.sub_property_of);
        result.equivalent_property = self
            .equivalent_property
            .intersection_with(&other.equivalent_property);
        result.inverse_of = self.inverse_of.intersection_with(&other.inverse_of);
        result.annotations = self.annotations.intersection_with(&other.annotations);
        result
    }

    /// Returns a fresh model with the properties and entries of this model
    /// that are not present in `other`.
    ///
    /// Like [`Taxonomy::difference_with`], the result starts as the union of
    /// an empty model with this one before the subtraction.
    pub fn difference_with(&self, other: &Self) -> Self {
        let mut result = Self::new().union_with(self);
        for property in other.iter() {
            result.remove_property(property.resource());
        }
        result.sub_property_of = self.sub_property_of.difference_with(&other.sub_property_of);
        result.equivalent_property = self
            .equivalent_property
            .difference_with(&other.equivalent_property);
        result.inverse_of = self.inverse_of.difference_with(&other.inverse_of);
        result.annotations = self.annotations.difference_with(&other.annotations);
        result
    }

    fn check_registered(&self, property: &OntologyProperty) -> bool {
        if self.contains_property(property) {
            true
        } else {
            events::warn(format!(
                "property {} is not registered in the property model, the relation has been dropped",
                property
            ));
            false
        }
    }

    fn check_compatible(&self, a: &OntologyProperty, b: &OntologyProperty) -> bool {
        if !self.check_registered(a) || !self.check_registered(b) {
            return false;
        }
        if a.is_annotation() || b.is_annotation() || a.kind() != b.kind() {
            events::warn(format!(
                "properties {} and {} have incompatible kinds, the relation has been dropped",
                a, b
            ));
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::OntologyProperty;

    fn object(name: &str) -> OntologyProperty {
        OntologyProperty::new_object(Resource::new_unchecked(format!(
            "http://example.com/{name}"
        )))
    }

    fn datatype(name: &str) -> OntologyProperty {
        OntologyProperty::new_datatype(Resource::new_unchecked(format!(
            "http://example.com/{name}"
        )))
    }

    #[test]
    fn kind_compatibility_is_enforced() {
        let mut model = PropertyModel::new();
        let knows = object("knows");
        let age = datatype("age");
        model.add_property(knows.clone());
        model.add_property(age.clone());

        model.add_sub_property_of(&age, &knows);
        assert!(model.sub_property_of().is_empty());

        model.add_inverse_of(&age, &age);
        assert!(model.inverse_of().is_empty());

        let loves = object("loves");
        model.add_property(loves.clone());
        model.add_sub_property_of(&loves, &knows);
        assert_eq!(model.sub_property_of().len(), 1);
    }
}
