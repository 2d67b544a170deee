//! Process-wide BASE (rdf/rdfs/owl/xsd) and DC reference ontologies.
//!
//! Both singletons are initialized on first use and never torn down. They are
//! injected into user models while a graph is decoded so vocabulary
//! references resolve, and removed again before the ontology is returned.

use crate::class_model::ClassModel;
use crate::entity::{OntologyClass, OntologyProperty};
use crate::property_model::PropertyModel;
use lazy_static::lazy_static;
use oxterm::vocab::{dc, owl, rdf, rdfs, xsd};
use oxterm::Resource;
use rustc_hash::FxHashSet;

/// A read-only reference vocabulary: built-in classes and properties.
#[derive(Debug)]
pub(crate) struct ReferenceOntology {
    pub classes: ClassModel,
    pub properties: PropertyModel,
}

lazy_static! {
    /// The rdf/rdfs/owl/xsd reference ontology.
    pub(crate) static ref BASE: ReferenceOntology = base_ontology();

    /// The Dublin Core elements 1.1 reference ontology.
    pub(crate) static ref DC: ReferenceOntology = dc_ontology();

    /// Fingerprints of the classes every literal is compatible with.
    static ref LITERAL_COMPATIBLE: FxHashSet<u64> = {
        let mut set = FxHashSet::default();
        set.insert(rdfs::LITERAL.fingerprint());
        for datatype in xsd_datatypes() {
            set.insert(datatype.fingerprint());
        }
        set
    };
}

/// Checks if the given resource names rdfs:Literal or an XSD datatype class.
pub(crate) fn is_literal_compatible(resource: &Resource) -> bool {
    LITERAL_COMPATIBLE.contains(&resource.fingerprint())
}

impl ClassModel {
    /// Injects the BASE built-in classes into this model.
    pub fn expand(&mut self) {
        for class in BASE.classes.iter() {
            self.add_class(class.clone());
        }
        let merged = self.sub_class_of().union_with(BASE.classes.sub_class_of());
        *self.sub_class_of_mut() = merged;
    }

    /// Removes the BASE built-in classes from this model.
    pub fn unexpand(&mut self) {
        for class in BASE.classes.iter() {
            self.remove_class(class.resource());
        }
        let trimmed = self
            .sub_class_of()
            .difference_with(BASE.classes.sub_class_of());
        *self.sub_class_of_mut() = trimmed;
    }
}

impl PropertyModel {
    /// Injects the BASE and DC built-in properties into this model.
    pub fn expand(&mut self) {
        for property in BASE.properties.iter().chain(DC.properties.iter()) {
            self.add_property(property.clone());
        }
    }

    /// Removes the BASE and DC built-in properties from this model.
    pub fn unexpand(&mut self) {
        for property in BASE.properties.iter().chain(DC.properties.iter()) {
            self.remove_property(property.resource());
        }
    }
}

fn xsd_datatypes() -> Vec<Resource> {
    vec![
        xsd::ANY_URI.clone(),
        xsd::BASE_64_BINARY.clone(),
        xsd::BOOLEAN.clone(),
        xsd::BYTE.clone(),
        xsd::DATE.clone(),
        xsd::DATE_TIME.clone(),
        xsd::DECIMAL.clone(),
        xsd::DOUBLE.clone(),
        xsd::DURATION.clone(),
        xsd::FLOAT.clone(),
        xsd::HEX_BINARY.clone(),
        xsd::INT.clone(),
        xsd::INTEGER.clone(),
        xsd::LANGUAGE.clone(),
        xsd::LONG.clone(),
        xsd::NAME.clone(),
        xsd::NC_NAME.clone(),
        xsd::NEGATIVE_INTEGER.clone(),
        xsd::NMTOKEN.clone(),
        xsd::NON_NEGATIVE_INTEGER.clone(),
        xsd::NON_POSITIVE_INTEGER.clone(),
        xsd::NORMALIZED_STRING.clone(),
        xsd::POSITIVE_INTEGER.clone(),
        xsd::SHORT.clone(),
        xsd::STRING.clone(),
        xsd::TIME.clone(),
        xsd::TOKEN.clone(),
        xsd::UNSIGNED_BYTE.clone(),
        xsd::UNSIGNED_INT.clone(),
        xsd::UNSIGNED_LONG.clone(),
        xsd::UNSIGNED_SHORT.clone(),
    ]
}

fn base_ontology() -> ReferenceOntology {
    let mut classes = ClassModel::new();
    let literal = OntologyClass::new_rdfs(rdfs::LITERAL.clone());
    classes.add_class(OntologyClass::new_rdfs(rdfs::RESOURCE.clone()));
    classes.add_class(OntologyClass::new_rdfs(rdfs::CLASS.clone()));
    classes.add_class(OntologyClass::new_rdfs(rdfs::DATATYPE.clone()));
    classes.add_class(literal.clone());
    classes.add_class(OntologyClass::new(owl::THING.clone()));
    classes.add_class(OntologyClass::new(owl::NOTHING.clone()));
    for datatype in xsd_datatypes() {
        let class = OntologyClass::new_rdfs(datatype);
        classes.add_class(class.clone());
        classes.add_sub_class_of(&class, &literal);
    }

    let mut properties = PropertyModel::new();
    for annotation in [
        rdfs::COMMENT.clone(),
        rdfs::LABEL.clone(),
        rdfs::SEE_ALSO.clone(),
        rdfs::IS_DEFINED_BY.clone(),
        owl::VERSION_INFO.clone(),
        owl::VERSION_IRI.clone(),
        owl::PRIOR_VERSION.clone(),
        owl::BACKWARD_COMPATIBLE_WITH.clone(),
        owl::INCOMPATIBLE_WITH.clone(),
        owl::IMPORTS.clone(),
    ] {
        properties.add_property(OntologyProperty::new_annotation(annotation));
    }
    properties.add_property(OntologyProperty::new_object(rdf::TYPE.clone()));

    ReferenceOntology {
        classes,
        properties,
    }
}

fn dc_ontology() -> ReferenceOntology {
    let mut properties = PropertyModel::new();
    for annotation in [
        dc::CONTRIBUTOR.clone(),
        dc::COVERAGE.clone(),
        dc::CREATOR.clone(),
        dc::DATE.clone(),
        dc::DESCRIPTION.clone(),
        dc::FORMAT.clone(),
        dc::IDENTIFIER.clone(),
        dc::LANGUAGE.clone(),
        dc::PUBLISHER.clone(),
        dc::RELATION.clone(),
        dc::RIGHTS.clone(),
        dc::SOURCE.clone(),
        dc::SUBJECT.clone(),
        dc::TITLE.clone(),
        dc::TYPE.clone(),
    ] {
        properties.add_property(OntologyProperty::new_annotation(annotation));
    }

    ReferenceOntology {
        classes: ClassModel::new(),
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_round_trip() {
        let mut model = ClassModel::new();
        let user = OntologyClass::new(Resource::new_unchecked("http://example.com/Dog"));
        model.add_class(user.clone());

        model.expand();
        assert!(model.class(&rdfs::LITERAL).is_some());
        assert!(model.class(&xsd::STRING).is_some());

        model.unexpand();
        assert_eq!(model.classes_count(), 1);
        assert!(model.contains_class(&user));
        assert!(model.sub_class_of().is_empty());
    }

    #[test]
    fn property_expansion_round_trip() {
        let mut model = PropertyModel::new();
        model.expand();
        assert!(model.property(&rdfs::COMMENT).is_some());
        assert!(model.property(&dc::TITLE).is_some());
        model.unexpand();
        assert_eq!(model.properties_count(), 0);
    }

    #[test]
    fn literal_compatibility() {
        assert!(is_literal_compatible(&rdfs::LITERAL));
        assert!(is_literal_compatible(&xsd::INTEGER));
        assert!(!is_literal_compatible(&Resource::new_unchecked(
            "http://example.com/Dog"
        )));
    }
}
