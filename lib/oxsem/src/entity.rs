//! Ontology entity types: classes, restrictions, properties and facts.

use oxterm::{Resource, Term};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The structural variant of an [`OntologyClass`].
///
/// The kind is fixed once a class reaches its final shape: the graph decoder
/// may reclassify a plain class into a composite or enumerated one while the
/// defining axioms are discovered, but user code never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassKind {
    /// A plain owl:Class.
    Owl,
    /// A plain rdfs:Class.
    Rdfs,
    /// An owl:Restriction on a property.
    Restriction(Restriction),
    /// An owl:oneOf enumeration of facts.
    Enumerate,
    /// An owl:DataRange enumeration of literals.
    DataRange,
    /// An owl:unionOf composition.
    Union,
    /// An owl:intersectionOf composition.
    Intersection,
    /// An owl:complementOf of another class.
    Complement {
        /// The complemented class.
        of: Resource,
    },
}

/// An anonymous class constraining the values or the cardinality of a
/// property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    on_property: Resource,
    constraint: Option<RestrictionConstraint>,
}

impl Restriction {
    /// Builds an unrefined restriction on the given property.
    ///
    /// An unrefined restriction has no members.
    #[inline]
    pub fn new(on_property: Resource) -> Self {
        Self {
            on_property,
            constraint: None,
        }
    }

    /// The property this restriction constrains.
    #[inline]
    pub fn on_property(&self) -> &Resource {
        &self.on_property
    }

    /// The constraint of this restriction, once refined.
    #[inline]
    pub fn constraint(&self) -> Option<&RestrictionConstraint> {
        self.constraint.as_ref()
    }

    /// Refines this restriction with its constraint.
    ///
    /// A restriction is refinable once: returns `false` and leaves the
    /// restriction untouched if it already holds a constraint.
    pub fn refine(&mut self, constraint: RestrictionConstraint) -> bool {
        if self.constraint.is_some() {
            return false;
        }
        self.constraint = Some(constraint);
        true
    }
}

/// The constraint of a refined [`Restriction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestrictionConstraint {
    /// owl:cardinality / owl:minCardinality / owl:maxCardinality.
    ///
    /// A zero bound leaves that side unconstrained.
    Cardinality {
        /// The minimum number of compatible assertions, 0 for no minimum.
        min: u64,
        /// The maximum number of compatible assertions, 0 for no maximum.
        max: u64,
    },
    /// owl:allValuesFrom the given class.
    AllValuesFrom(Resource),
    /// owl:someValuesFrom the given class.
    SomeValuesFrom(Resource),
    /// owl:hasValue the given fact or literal.
    HasValue(Term),
}

/// A T-Box class.
///
/// Equality and hashing go through the fingerprint of the identifying
/// resource.
#[derive(Debug, Clone)]
pub struct OntologyClass {
    resource: Resource,
    kind: ClassKind,
    deprecated: bool,
}

impl OntologyClass {
    /// Builds a plain OWL class.
    #[inline]
    pub fn new(resource: Resource) -> Self {
        Self::with_kind(resource, ClassKind::Owl)
    }

    /// Builds a plain RDFS class.
    #[inline]
    pub fn new_rdfs(resource: Resource) -> Self {
        Self::with_kind(resource, ClassKind::Rdfs)
    }

    /// Builds an unrefined restriction class on the given property.
    #[inline]
    pub fn new_restriction(resource: Resource, on_property: Resource) -> Self {
        Self::with_kind(resource, ClassKind::Restriction(Restriction::new(on_property)))
    }

    /// Builds an enumerated class; its members live in the class model's
    /// oneOf taxonomy.
    #[inline]
    pub fn new_enumerate(resource: Resource) -> Self {
        Self::with_kind(resource, ClassKind::Enumerate)
    }

    /// Builds a datarange class; its literal members live in the class
    /// model's oneOf taxonomy.
    #[inline]
    pub fn new_data_range(resource: Resource) -> Self {
        Self::with_kind(resource, ClassKind::DataRange)
    }

    /// Builds a union class; its members live in the class model's unionOf
    /// taxonomy.
    #[inline]
    pub fn new_union(resource: Resource) -> Self {
        Self::with_kind(resource, ClassKind::Union)
    }

    /// Builds an intersection class; its members live in the class model's
    /// intersectionOf taxonomy.
    #[inline]
    pub fn new_intersection(resource: Resource) -> Self {
        Self::with_kind(resource, ClassKind::Intersection)
    }

    /// Builds the complement of the given class.
    #[inline]
    pub fn new_complement(resource: Resource, of: Resource) -> Self {
        Self::with_kind(resource, ClassKind::Complement { of })
    }

    /// Builds a class with the given kind.
    #[inline]
    pub fn with_kind(resource: Resource, kind: ClassKind) -> Self {
        Self {
            resource,
            kind,
            deprecated: false,
        }
    }

    /// The resource identifying this class.
    #[inline]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// The fingerprint of the identifying resource.
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.resource.fingerprint()
    }

    /// The structural kind of this class.
    #[inline]
    pub fn kind(&self) -> &ClassKind {
        &self.kind
    }

    /// The restriction carried by this class, if it is one.
    #[inline]
    pub fn restriction(&self) -> Option<&Restriction> {
        match &self.kind {
            ClassKind::Restriction(restriction) => Some(restriction),
            _ => None,
        }
    }

    pub(crate) fn restriction_mut(&mut self) -> Option<&mut Restriction> {
        match &mut self.kind {
            ClassKind::Restriction(restriction) => Some(restriction),
            _ => None,
        }
    }

    pub(crate) fn reclassify(&mut self, kind: ClassKind) {
        self.kind = kind;
    }

    /// Returns `true` if this class is deprecated.
    #[inline]
    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Flags this class as deprecated.
    #[inline]
    pub fn set_deprecated(&mut self, deprecated: bool) {
        self.deprecated = deprecated;
    }
}

impl fmt::Display for OntologyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.resource.fmt(f)
    }
}

impl PartialEq for OntologyClass {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.resource == other.resource
    }
}

impl Eq for OntologyClass {}

impl Hash for OntologyClass {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource.hash(state)
    }
}

/// The kind of an [`OntologyProperty`]. A property is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// An owl:AnnotationProperty, without semantic meaning for reasoning.
    Annotation,
    /// An owl:DatatypeProperty relating facts to literals.
    Datatype,
    /// An owl:ObjectProperty relating facts to facts.
    Object,
}

/// A T-Box property.
///
/// The symmetric, transitive and inverse-functional characteristics are only
/// legal on object properties; their setters leave other kinds untouched.
#[derive(Debug, Clone)]
pub struct OntologyProperty {
    resource: Resource,
    kind: PropertyKind,
    deprecated: bool,
    functional: bool,
    symmetric: bool,
    transitive: bool,
    inverse_functional: bool,
    domain: Option<Resource>,
    range: Option<Resource>,
}

impl OntologyProperty {
    /// Builds an annotation property.
    #[inline]
    pub fn new_annotation(resource: Resource) -> Self {
        Self::with_kind(resource, PropertyKind::Annotation)
    }

    /// Builds a datatype property.
    #[inline]
    pub fn new_datatype(resource: Resource) -> Self {
        Self::with_kind(resource, PropertyKind::Datatype)
    }

    /// Builds an object property.
    #[inline]
    pub fn new_object(resource: Resource) -> Self {
        Self::with_kind(resource, PropertyKind::Object)
    }

    fn with_kind(resource: Resource, kind: PropertyKind) -> Self {
        Self {
            resource,
            kind,
            deprecated: false,
            functional: false,
            symmetric: false,
            transitive: false,
            inverse_functional: false,
            domain: None,
            range: None,
        }
    }

    /// The resource identifying this property.
    #[inline]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// The fingerprint of the identifying resource.
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.resource.fingerprint()
    }

    /// The kind of this property.
    #[inline]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns `true` if this property is an annotation property.
    #[inline]
    pub fn is_annotation(&self) -> bool {
        self.kind == PropertyKind::Annotation
    }

    /// Returns `true` if this property is a datatype property.
    #[inline]
    pub fn is_datatype(&self) -> bool {
        self.kind == PropertyKind::Datatype
    }

    /// Returns `true` if this property is an object property.
    #[inline]
    pub fn is_object(&self) -> bool {
        self.kind == PropertyKind::Object
    }

    /// Returns `true` if this property is deprecated.
    #[inline]
    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Flags this property as deprecated.
    #[inline]
    pub fn set_deprecated(&mut self, deprecated: bool) {
        self.deprecated = deprecated;
    }

    /// Returns `true` if this property is functional.
    #[inline]
    pub fn is_functional(&self) -> bool {
        self.functional
    }

    /// Flags this property as functional.
    #[inline]
    pub fn set_functional(&mut self, functional: bool) {
        self.functional = functional;
    }

    /// Returns `true` if this property is symmetric.
    #[inline]
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Flags this object property as symmetric. Returns `false` without
    /// effect on other property kinds.
    pub fn set_symmetric(&mut self, symmetric: bool) -> bool {
        if !self.is_object() {
            return false;
        }
        self.symmetric = symmetric;
        true
    }

    /// Returns `true` if this property is transitive.
    #[inline]
    pub fn is_transitive(&self) -> bool {
        self.transitive
    }

    /// Flags this object property as transitive. Returns `false` without
    /// effect on other property kinds.
    pub fn set_transitive(&mut self, transitive: bool) -> bool {
        if !self.is_object() {
            return false;
        }
        self.transitive = transitive;
        true
    }

    /// Returns `true` if this property is inverse-functional.
    #[inline]
    pub fn is_inverse_functional(&self) -> bool {
        self.inverse_functional
    }

    /// Flags this object property as inverse-functional. Returns `false`
    /// without effect on other property kinds.
    pub fn set_inverse_functional(&mut self, inverse_functional: bool) -> bool {
        if !self.is_object() {
            return false;
        }
        self.inverse_functional = inverse_functional;
        true
    }

    /// The domain class of this property, if any.
    #[inline]
    pub fn domain(&self) -> Option<&Resource> {
        self.domain.as_ref()
    }

    /// Sets the domain class of this property.
    #[inline]
    pub fn set_domain(&mut self, domain: Resource) {
        self.domain = Some(domain);
    }

    /// The range class of this property, if any.
    #[inline]
    pub fn range(&self) -> Option<&Resource> {
        self.range.as_ref()
    }

    /// Sets the range class of this property.
    #[inline]
    pub fn set_range(&mut self, range: Resource) {
        self.range = Some(range);
    }
}

impl fmt::Display for OntologyProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.resource.fmt(f)
    }
}

impl PartialEq for OntologyProperty {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.resource == other.resource
    }
}

impl Eq for OntologyProperty {}

impl Hash for OntologyProperty {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource.hash(state)
    }
}

/// An A-Box individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    resource: Resource,
}

impl Fact {
    /// Builds a fact from its identifying resource.
    #[inline]
    pub fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// The resource identifying this fact.
    #[inline]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// The fingerprint of the identifying resource.
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.resource.fingerprint()
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.resource.fmt(f)
    }
}

impl From<Resource> for Fact {
    #[inline]
    fn from(resource: Resource) -> Self {
        Self::new(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(name: &str) -> Resource {
        Resource::new_unchecked(format!("http://example.com/{name}"))
    }

    #[test]
    fn restriction_refines_once() {
        let mut restriction = Restriction::new(example("hasPet"));
        assert!(restriction.constraint().is_none());
        assert!(restriction.refine(RestrictionConstraint::SomeValuesFrom(example("Dog"))));
        assert!(!restriction.refine(RestrictionConstraint::Cardinality { min: 1, max: 0 }));
        assert_eq!(
            restriction.constraint(),
            Some(&RestrictionConstraint::SomeValuesFrom(example("Dog")))
        );
    }

    #[test]
    fn characteristics_only_apply_to_object_properties() {
        let mut datatype = OntologyProperty::new_datatype(example("age"));
        assert!(!datatype.set_symmetric(true));
        assert!(!datatype.set_transitive(true));
        assert!(!datatype.set_inverse_functional(true));
        assert!(!datatype.is_symmetric());

        let mut object = OntologyProperty::new_object(example("knows"));
        assert!(object.set_symmetric(true));
        assert!(object.set_transitive(true));
        assert!(object.is_symmetric());
        assert!(object.is_transitive());
    }

    #[test]
    fn classes_compare_by_resource() {
        let a = OntologyClass::new(example("Dog"));
        let b = OntologyClass::new_rdfs(example("Dog"));
        assert_eq!(a, b);
        assert_ne!(a, OntologyClass::new(example("Cat")));
    }
}
