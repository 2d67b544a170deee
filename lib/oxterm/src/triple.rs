use crate::literal::Literal;
use crate::resource::Resource;
use std::fmt;

/// The union of [`Resource`] and [`Literal`]: everything that may be the
/// object of a [`Triple`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Resource(Resource),
    Literal(Literal),
}

impl Term {
    /// Returns `true` if this term is a resource.
    #[inline]
    pub fn is_resource(&self) -> bool {
        matches!(self, Self::Resource(_))
    }

    /// Returns `true` if this term is a literal.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns the resource if this term is one.
    #[inline]
    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(resource) => Some(resource),
            Self::Literal(_) => None,
        }
    }

    /// Returns the literal if this term is one.
    #[inline]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Resource(_) => None,
            Self::Literal(literal) => Some(literal),
        }
    }

    /// The stable 64-bit fingerprint of the underlying term.
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        match self {
            Self::Resource(resource) => resource.fingerprint(),
            Self::Literal(literal) => literal.fingerprint(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource(resource) => resource.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<Resource> for Term {
    #[inline]
    fn from(resource: Resource) -> Self {
        Self::Resource(resource)
    }
}

impl From<Literal> for Term {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

/// An [RDF triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple).
///
/// A triple whose object is a [`Literal`] is an "SPL" triple; all others are
/// "SPO" triples.
///
/// The default string formatter returns an N-Triples compatible
/// representation:
/// ```
/// use oxterm::{Resource, Triple};
///
/// let ex = Resource::new("http://example.com")?;
/// assert_eq!(
///     "<http://example.com> <http://example.com> <http://example.com> .",
///     Triple::new(ex.clone(), ex.clone(), ex).to_string()
/// );
/// # Result::<_, oxterm::IriParseError>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// The [subject](https://www.w3.org/TR/rdf11-concepts/#dfn-subject) of this triple.
    pub subject: Resource,

    /// The [predicate](https://www.w3.org/TR/rdf11-concepts/#dfn-predicate) of this triple.
    pub predicate: Resource,

    /// The [object](https://www.w3.org/TR/rdf11-concepts/#dfn-object) of this triple.
    pub object: Term,
}

impl Triple {
    /// Builds an RDF triple from its three components.
    #[inline]
    pub fn new(subject: Resource, predicate: Resource, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_accessors() {
        let term = Term::from(Resource::new_unchecked("http://example.com"));
        assert!(term.is_resource());
        assert!(term.as_literal().is_none());

        let term = Term::from(Literal::new_simple_literal("foo"));
        assert!(term.is_literal());
        assert!(term.as_resource().is_none());
    }

    #[test]
    fn triple_display() {
        let triple = Triple::new(
            Resource::new_unchecked("http://example.com/s"),
            Resource::new_unchecked("http://example.com/p"),
            Literal::new_simple_literal("o"),
        );
        assert_eq!(
            triple.to_string(),
            "<http://example.com/s> <http://example.com/p> \"o\" ."
        );
    }
}
