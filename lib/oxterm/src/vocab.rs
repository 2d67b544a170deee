//! Provides ready to use [`Resource`](super::Resource)s for the RDF, RDFS,
//! XSD, OWL and Dublin Core vocabularies.

use crate::resource::Resource;

/// The [RDF](https://www.w3.org/TR/rdf11-concepts/) namespace.
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// The [RDFS](https://www.w3.org/TR/rdf-schema/) namespace.
pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// The [XML Schema datatypes](https://www.w3.org/TR/xmlschema11-2/) namespace.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
/// The [OWL](https://www.w3.org/TR/owl-ref/) namespace.
pub const OWL_NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";
/// The [Dublin Core elements 1.1](https://www.dublincore.org/specifications/dublin-core/dcmi-terms/) namespace.
pub const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

/// Checks if a resource belongs to the reserved RDF, RDFS, XSD or OWL
/// vocabularies.
pub fn is_reserved(resource: &Resource) -> bool {
    resource.is_named()
        && (resource.as_str().starts_with(RDF_NAMESPACE)
            || resource.as_str().starts_with(RDFS_NAMESPACE)
            || resource.as_str().starts_with(XSD_NAMESPACE)
            || resource.as_str().starts_with(OWL_NAMESPACE))
}

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.
    use super::Resource;
    use lazy_static::lazy_static;

    lazy_static! {
        /// The first item in the subject RDF list.
        pub static ref FIRST: Resource =
            Resource::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#first");
        /// The class of language-tagged string literal values.
        pub static ref LANG_STRING: Resource =
            Resource::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString");
        /// The class of RDF lists.
        pub static ref LIST: Resource =
            Resource::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#List");
        /// The empty list.
        pub static ref NIL: Resource =
            Resource::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#nil");
        /// The class of RDF properties.
        pub static ref PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#Property");
        /// The rest of the subject RDF list after the first item.
        pub static ref REST: Resource =
            Resource::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#rest");
        /// The subject is an instance of a class.
        pub static ref TYPE: Resource =
            Resource::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    }
}

pub mod rdfs {
    //! [RDFS](https://www.w3.org/TR/rdf-schema/) vocabulary.
    use super::Resource;
    use lazy_static::lazy_static;

    lazy_static! {
        /// The class of classes.
        pub static ref CLASS: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Class");
        /// A description of the subject resource.
        pub static ref COMMENT: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#comment");
        /// The class of RDF datatypes.
        pub static ref DATATYPE: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Datatype");
        /// A domain of the subject property.
        pub static ref DOMAIN: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#domain");
        /// The definition of the subject resource.
        pub static ref IS_DEFINED_BY: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#isDefinedBy");
        /// A human-readable name for the subject.
        pub static ref LABEL: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");
        /// The class of literal values.
        pub static ref LITERAL: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Literal");
        /// A range of the subject property.
        pub static ref RANGE: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#range");
        /// The class resource, everything.
        pub static ref RESOURCE: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Resource");
        /// Further information about the subject resource.
        pub static ref SEE_ALSO: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#seeAlso");
        /// The subject is a subclass of a class.
        pub static ref SUB_CLASS_OF: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#subClassOf");
        /// The subject is a subproperty of a property.
        pub static ref SUB_PROPERTY_OF: Resource =
            Resource::new_unchecked("http://www.w3.org/2000/01/rdf-schema#subPropertyOf");
    }
}

pub mod xsd {
    //! [RDF compatible XSD datatypes](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-compatible-xsd-types).
    use super::Resource;
    use lazy_static::lazy_static;

    lazy_static! {
        /// Absolute or relative URIs and IRIs.
        pub static ref ANY_URI: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#anyURI");
        /// Base64-encoded binary data.
        pub static ref BASE_64_BINARY: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#base64Binary");
        /// True or false.
        pub static ref BOOLEAN: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#boolean");
        /// 8-bit signed integers.
        pub static ref BYTE: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#byte");
        /// Dates (yyyy-mm-dd) with or without timezone.
        pub static ref DATE: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#date");
        /// Date and time with or without timezone.
        pub static ref DATE_TIME: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#dateTime");
        /// Arbitrary-precision decimal numbers.
        pub static ref DECIMAL: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#decimal");
        /// 64-bit floating point numbers incl. ±Inf, ±0, NaN.
        pub static ref DOUBLE: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#double");
        /// Duration of time.
        pub static ref DURATION: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#duration");
        /// 32-bit floating point numbers incl. ±Inf, ±0, NaN.
        pub static ref FLOAT: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#float");
        /// Hex-encoded binary data.
        pub static ref HEX_BINARY: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#hexBinary");
        /// 32-bit signed integers.
        pub static ref INT: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#int");
        /// Arbitrary-size integer numbers.
        pub static ref INTEGER: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#integer");
        /// Language tags per [BCP47](https://tools.ietf.org/html/bcp47).
        pub static ref LANGUAGE: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#language");
        /// 64-bit signed integers.
        pub static ref LONG: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#long");
        /// XML Names.
        pub static ref NAME: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#Name");
        /// XML NCNames.
        pub static ref NC_NAME: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#NCName");
        /// Integer numbers <0.
        pub static ref NEGATIVE_INTEGER: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#negativeInteger");
        /// XML NMTOKENs.
        pub static ref NMTOKEN: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#NMTOKEN");
        /// Integer numbers ≥0.
        pub static ref NON_NEGATIVE_INTEGER: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#nonNegativeInteger");
        /// Integer numbers ≤0.
        pub static ref NON_POSITIVE_INTEGER: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#nonPositiveInteger");
        /// Whitespace-normalized strings.
        pub static ref NORMALIZED_STRING: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#normalizedString");
        /// Integer numbers >0.
        pub static ref POSITIVE_INTEGER: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#positiveInteger");
        /// 16-bit signed integers.
        pub static ref SHORT: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#short");
        /// Character strings.
        pub static ref STRING: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#string");
        /// Times (hh:mm:ss.sss…) with or without timezone.
        pub static ref TIME: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#time");
        /// Tokenized strings.
        pub static ref TOKEN: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#token");
        /// 8-bit unsigned integers.
        pub static ref UNSIGNED_BYTE: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#unsignedByte");
        /// 32-bit unsigned integers.
        pub static ref UNSIGNED_INT: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#unsignedInt");
        /// 64-bit unsigned integers.
        pub static ref UNSIGNED_LONG: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#unsignedLong");
        /// 16-bit unsigned integers.
        pub static ref UNSIGNED_SHORT: Resource =
            Resource::new_unchecked("http://www.w3.org/2001/XMLSchema#unsignedShort");
    }
}

pub mod owl {
    //! [OWL](https://www.w3.org/TR/owl-ref/) vocabulary.
    use super::Resource;
    use lazy_static::lazy_static;

    lazy_static! {
        /// The class of universal restrictions.
        pub static ref ALL_VALUES_FROM: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#allValuesFrom");
        /// The class of annotation properties.
        pub static ref ANNOTATION_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#AnnotationProperty");
        /// The subject ontology is backward compatible with the object one.
        pub static ref BACKWARD_COMPATIBLE_WITH: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#backwardCompatibleWith");
        /// The exact cardinality of the subject restriction.
        pub static ref CARDINALITY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#cardinality");
        /// The class of OWL classes.
        pub static ref CLASS: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#Class");
        /// The subject class is the complement of the object class.
        pub static ref COMPLEMENT_OF: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#complementOf");
        /// The class of ranges of data values.
        pub static ref DATA_RANGE: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#DataRange");
        /// The class of datatype properties.
        pub static ref DATATYPE_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
        /// The class of deprecated classes.
        pub static ref DEPRECATED_CLASS: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#DeprecatedClass");
        /// The class of deprecated properties.
        pub static ref DEPRECATED_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#DeprecatedProperty");
        /// The subject individual is different from the object one.
        pub static ref DIFFERENT_FROM: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#differentFrom");
        /// The subject class shares no member with the object class.
        pub static ref DISJOINT_WITH: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#disjointWith");
        /// The subject class has the same extension as the object class.
        pub static ref EQUIVALENT_CLASS: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#equivalentClass");
        /// The subject property has the same extension as the object property.
        pub static ref EQUIVALENT_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#equivalentProperty");
        /// The class of functional properties.
        pub static ref FUNCTIONAL_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#FunctionalProperty");
        /// The value constraint of the subject restriction.
        pub static ref HAS_VALUE: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#hasValue");
        /// The subject ontology imports the object one.
        pub static ref IMPORTS: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#imports");
        /// The subject ontology is incompatible with the object one.
        pub static ref INCOMPATIBLE_WITH: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#incompatibleWith");
        /// The subject class is the intersection of the object classes.
        pub static ref INTERSECTION_OF: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#intersectionOf");
        /// The class of inverse-functional properties.
        pub static ref INVERSE_FUNCTIONAL_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#InverseFunctionalProperty");
        /// The subject property is the inverse of the object property.
        pub static ref INVERSE_OF: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#inverseOf");
        /// The maximum cardinality of the subject restriction.
        pub static ref MAX_CARDINALITY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#maxCardinality");
        /// The minimum cardinality of the subject restriction.
        pub static ref MIN_CARDINALITY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#minCardinality");
        /// The empty class.
        pub static ref NOTHING: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#Nothing");
        /// The class of object properties.
        pub static ref OBJECT_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
        /// The subject class is the enumeration of the object list.
        pub static ref ONE_OF: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#oneOf");
        /// The property the subject restriction constrains.
        pub static ref ON_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#onProperty");
        /// The class of ontologies.
        pub static ref ONTOLOGY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
        /// An earlier version of the subject ontology.
        pub static ref PRIOR_VERSION: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#priorVersion");
        /// The class of property restrictions.
        pub static ref RESTRICTION: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#Restriction");
        /// The subject individual is the same as the object one.
        pub static ref SAME_AS: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#sameAs");
        /// The existential constraint of the subject restriction.
        pub static ref SOME_VALUES_FROM: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#someValuesFrom");
        /// The class of symmetric properties.
        pub static ref SYMMETRIC_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#SymmetricProperty");
        /// The class of all individuals.
        pub static ref THING: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#Thing");
        /// The class of transitive properties.
        pub static ref TRANSITIVE_PROPERTY: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#TransitiveProperty");
        /// The subject class is the union of the object classes.
        pub static ref UNION_OF: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#unionOf");
        /// The version of the subject ontology.
        pub static ref VERSION_INFO: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#versionInfo");
        /// The version IRI of the subject ontology.
        pub static ref VERSION_IRI: Resource =
            Resource::new_unchecked("http://www.w3.org/2002/07/owl#versionIRI");
    }
}

pub mod dc {
    //! [Dublin Core elements 1.1](https://www.dublincore.org/specifications/dublin-core/dcmi-terms/) vocabulary.
    use super::Resource;
    use lazy_static::lazy_static;

    lazy_static! {
        /// An entity responsible for contributions to the resource.
        pub static ref CONTRIBUTOR: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/contributor");
        /// The spatial or temporal topic of the resource.
        pub static ref COVERAGE: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/coverage");
        /// An entity primarily responsible for making the resource.
        pub static ref CREATOR: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/creator");
        /// A point or period of time associated with the resource.
        pub static ref DATE: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/date");
        /// An account of the resource.
        pub static ref DESCRIPTION: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/description");
        /// The file format or physical medium of the resource.
        pub static ref FORMAT: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/format");
        /// An unambiguous reference to the resource.
        pub static ref IDENTIFIER: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/identifier");
        /// A language of the resource.
        pub static ref LANGUAGE: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/language");
        /// An entity responsible for making the resource available.
        pub static ref PUBLISHER: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/publisher");
        /// A related resource.
        pub static ref RELATION: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/relation");
        /// Information about rights held in and over the resource.
        pub static ref RIGHTS: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/rights");
        /// A resource from which the described resource is derived.
        pub static ref SOURCE: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/source");
        /// The topic of the resource.
        pub static ref SUBJECT: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/subject");
        /// A name given to the resource.
        pub static ref TITLE: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/title");
        /// The nature or genre of the resource.
        pub static ref TYPE: Resource =
            Resource::new_unchecked("http://purl.org/dc/elements/1.1/type");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_namespaces() {
        assert!(is_reserved(&rdf::TYPE));
        assert!(is_reserved(&rdfs::SUB_CLASS_OF));
        assert!(is_reserved(&xsd::STRING));
        assert!(is_reserved(&owl::CLASS));
        assert!(!is_reserved(&dc::TITLE));
        assert!(!is_reserved(&Resource::new_unchecked(
            "http://example.com/Dog"
        )));
        assert!(!is_reserved(&Resource::new_blank_unchecked("a1")));
    }
}
