use oxiri::{Iri, IriParseError};
use rand::random;
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Computes the stable 64-bit fingerprint of a canonical term string.
///
/// Fingerprints are the identity witness of every term: two terms with the
/// same fingerprint are treated as the same term everywhere in this crate.
pub(crate) fn fingerprint_str(canonical: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(canonical.as_bytes());
    hasher.finish()
}

/// An RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri) or
/// [blank node](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// The default string formatter returns an N-Triples compatible
/// representation:
/// ```
/// use oxterm::Resource;
///
/// assert_eq!(
///     "<http://example.com/foo>",
///     Resource::new("http://example.com/foo")?.to_string()
/// );
/// assert_eq!("_:a1", Resource::new_blank_from_id("a1")?.to_string());
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
///
/// Equality, ordering and hashing all go through the precomputed
/// [fingerprint](Resource::fingerprint).
#[derive(Debug, Clone)]
pub struct Resource {
    content: ResourceContent,
    fingerprint: u64,
}

#[derive(Debug, Clone)]
enum ResourceContent {
    Named(String),
    Blank(String),
}

impl Resource {
    /// Builds and validates an RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri).
    pub fn new(iri: impl Into<String>) -> Result<Self, IriParseError> {
        Ok(Self::new_unchecked(Iri::parse(iri.into())?.into_inner()))
    }

    /// Builds an RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri) from a string.
    ///
    /// It is the caller's responsibility to ensure that `iri` is a valid IRI.
    ///
    /// [`Resource::new()`] is a safe version of this constructor and should
    /// be used for untrusted data.
    #[inline]
    pub fn new_unchecked(iri: impl Into<String>) -> Self {
        let iri = iri.into();
        let fingerprint = fingerprint_str(&iri);
        Self {
            content: ResourceContent::Named(iri),
            fingerprint,
        }
    }

    /// Builds a blank node with a fresh random identifier.
    pub fn new_blank() -> Self {
        Self::new_blank_unchecked(format!("{:x}", random::<u128>()))
    }

    /// Builds a blank node from an identifier.
    ///
    /// The identifier must be valid according to the N-Triples `BLANK_NODE_LABEL`
    /// production.
    pub fn new_blank_from_id(id: impl Into<String>) -> Result<Self, BlankNodeIdParseError> {
        let id = id.into();
        validate_blank_node_identifier(&id)?;
        Ok(Self::new_blank_unchecked(id))
    }

    /// Builds a blank node from an identifier without validation.
    ///
    /// [`Resource::new_blank_from_id()`] is a safe version of this constructor
    /// and should be used for untrusted data.
    #[inline]
    pub fn new_blank_unchecked(id: impl Into<String>) -> Self {
        let id = id.into();
        let fingerprint = fingerprint_str(&format!("_:{id}"));
        Self {
            content: ResourceContent::Blank(id),
            fingerprint,
        }
    }

    /// The IRI of a named resource, or the identifier of a blank one.
    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.content {
            ResourceContent::Named(iri) => iri,
            ResourceContent::Blank(id) => id,
        }
    }

    /// Returns `true` if this resource is a blank node.
    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self.content, ResourceContent::Blank(_))
    }

    /// Returns `true` if this resource is an IRI.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self.content, ResourceContent::Named(_))
    }

    /// The stable 64-bit fingerprint of this resource.
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            ResourceContent::Named(iri) => write!(f, "<{iri}>"),
            ResourceContent::Blank(id) => write!(f, "_:{id}"),
        }
    }
}

impl PartialEq for Resource {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }
}

impl Eq for Resource {}

impl Hash for Resource {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash(state)
    }
}

impl PartialEq<str> for Resource {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.is_named() && self.as_str() == other
    }
}

impl PartialEq<&str> for Resource {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

fn validate_blank_node_identifier(id: &str) -> Result<(), BlankNodeIdParseError> {
    let mut chars = id.chars();
    let front = chars.next().ok_or(BlankNodeIdParseError)?;
    match front {
        '0'..='9'
        | '_'
        | ':'
        | 'A'..='Z'
        | 'a'..='z'
        | '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{02FF}'
        | '\u{0370}'..='\u{037D}'
        | '\u{037F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}' => (),
        _ => return Err(BlankNodeIdParseError),
    }
    for c in chars {
        match c {
            '.' // rejecting the trailing dot is done below
            | '-'
            | '0'..='9'
            | '\u{00B7}'
            | '\u{0300}'..='\u{036F}'
            | '\u{203F}'..='\u{2040}'
            | '_'
            | ':'
            | 'A'..='Z'
            | 'a'..='z'
            | '\u{00C0}'..='\u{00D6}'
            | '\u{00D8}'..='\u{00F6}'
            | '\u{00F8}'..='\u{02FF}'
            | '\u{0370}'..='\u{037D}'
            | '\u{037F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}' => (),
            _ => return Err(BlankNodeIdParseError),
        }
    }
    if id.ends_with('.') {
        return Err(BlankNodeIdParseError);
    }
    Ok(())
}

/// An error raised during blank node identifier validation.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("the blank node identifier is invalid")]
pub struct BlankNodeIdParseError;
