//! Ontology aggregate: name, class model, property model and data.

use crate::class_model::ClassModel;
use crate::data::OntologyData;
use crate::error::SemanticsError;
use crate::parser::OntologyParser;
use crate::property_model::PropertyModel;
use crate::serializer::OntologySerializer;
use crate::taxonomy::{Taxonomy, TaxonomyEntry};
use oxterm::{Graph, Resource, Term};
use std::fmt;

/// An ontology: a named aggregate of a T-Box ([`ClassModel`] and
/// [`PropertyModel`]) and an A-Box ([`OntologyData`]), plus ontology-level
/// annotations.
///
/// Usage example:
/// ```
/// use oxsem::Ontology;
///
/// let ontology = Ontology::with_iri("http://example.com/animals")?;
/// assert_eq!(ontology.class_model().classes_count(), 0);
/// # Result::<_, oxsem::SemanticsError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Ontology {
    name: Resource,
    class_model: ClassModel,
    property_model: PropertyModel,
    data: OntologyData,
    annotations: Taxonomy,
}

impl Ontology {
    /// Creates a new empty ontology with the given name.
    pub fn new(name: Resource) -> Self {
        Self {
            name,
            class_model: ClassModel::new(),
            property_model: PropertyModel::new(),
            data: OntologyData::new(),
            annotations: Taxonomy::new(),
        }
    }

    /// Creates a new empty ontology named by the given IRI.
    pub fn with_iri(iri: impl Into<String>) -> Result<Self, SemanticsError> {
        Ok(Self::new(Resource::new(iri)?))
    }

    /// The resource naming this ontology.
    #[inline]
    pub fn name(&self) -> &Resource {
        &self.name
    }

    /// The class model of this ontology.
    #[inline]
    pub fn class_model(&self) -> &ClassModel {
        &self.class_model
    }

    /// The mutable class model of this ontology.
    #[inline]
    pub fn class_model_mut(&mut self) -> &mut ClassModel {
        &mut self.class_model
    }

    /// The property model of this ontology.
    #[inline]
    pub fn property_model(&self) -> &PropertyModel {
        &self.property_model
    }

    /// The mutable property model of this ontology.
    #[inline]
    pub fn property_model_mut(&mut self) -> &mut PropertyModel {
        &mut self.property_model
    }

    /// The data of this ontology.
    #[inline]
    pub fn data(&self) -> &OntologyData {
        &self.data
    }

    /// The mutable data of this ontology.
    #[inline]
    pub fn data_mut(&mut self) -> &mut OntologyData {
        &mut self.data
    }

    /// The ontology-level annotations.
    #[inline]
    pub fn annotations(&self) -> &Taxonomy {
        &self.annotations
    }

    /// Annotates this ontology.
    pub fn add_annotation(&mut self, predicate: Resource, value: impl Into<Term>) -> &mut Self {
        self.annotations
            .add_entry(TaxonomyEntry::new(self.name.clone(), predicate, value));
        self
    }

    /// Decodes an ontology from an RDF graph.
    ///
    /// Unresolvable or malformed axioms are skipped with a warning raised
    /// through [`register_warning_handler`](crate::register_warning_handler);
    /// decoding never aborts on them.
    pub fn from_graph(graph: &Graph) -> Result<Self, SemanticsError> {
        OntologyParser::new(graph).parse()
    }

    /// Encodes this ontology into an RDF graph whose context is the ontology
    /// name.
    ///
    /// Taxonomy entries materialized by reasoning are dropped unless
    /// `include_inferences`.
    pub fn to_graph(&self, include_inferences: bool) -> Graph {
        OntologySerializer::new(include_inferences).serialize(self)
    }

    /// Returns a fresh ontology with the axioms of both, named after this
    /// one.
    pub fn union_with(&self, other: &Self) -> Self {
        Self {
            name: self.name.clone(),
            class_model: self.class_model.union_with(&other.class_model),
            property_model: self.property_model.union_with(&other.property_model),
            data: self.data.union_with(&other.data),
            annotations: self.annotations.union_with(&other.annotations),
        }
    }

    /// Returns a fresh ontology with the axioms present in both, named after
    /// this one.
    pub fn intersection_with(&self, other: &Self) -> Self {
        Self {
            name: self.name.clone(),
            class_model: self.class_model.intersection_with(&other.class_model),
            property_model: self.property_model.intersection_with(&other.property_model),
            data: self.data.intersection_with(&other.data),
            annotations: self.annotations.intersection_with(&other.annotations),
        }
    }

    /// Returns a fresh ontology with the axioms of this one that are not
    /// present in `other`, named after this one.
    ///
    /// Like [`Taxonomy::difference_with`], every container starts as the
    /// union of an empty one with this ontology's before the subtraction.
    pub fn difference_with(&self, other: &Self) -> Self {
        Self {
            name: self.name.clone(),
            class_model: self.class_model.difference_with(&other.class_model),
            property_model: self.property_model.difference_with(&other.property_model),
            data: self.data.difference_with(&other.data),
            annotations: self.annotations.difference_with(&other.annotations),
        }
    }
}

impl fmt::Display for Ontology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} classes, {} properties, {} facts]",
            self.name,
            self.class_model.classes_count(),
            self.property_model.properties_count(),
            self.data.facts_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_iri_is_a_construction_error() {
        assert!(Ontology::with_iri("not an iri").is_err());
        assert!(Ontology::with_iri("http://example.com/animals").is_ok());
    }

    #[test]
    fn union_keeps_left_name() {
        let left = Ontology::with_iri("http://example.com/a").unwrap();
        let right = Ontology::with_iri("http://example.com/b").unwrap();
        assert_eq!(left.union_with(&right).name(), left.name());
    }
}
