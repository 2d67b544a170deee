use crate::resource::{fingerprint_str, Resource};
use crate::vocab::XSD_NAMESPACE;
use oxilangtag::{LanguageTag, LanguageTagParseError};
use oxsdatatypes::Double;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Write;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// The default string formatter returns an N-Triples compatible
/// representation:
/// ```
/// use oxterm::{Literal, vocab::xsd};
///
/// assert_eq!(
///     "\"foo\\nbar\"",
///     Literal::new_simple_literal("foo\nbar").to_string()
/// );
///
/// assert_eq!(
///     r#""1999-01-01"^^<http://www.w3.org/2001/XMLSchema#date>"#,
///     Literal::new_typed_literal("1999-01-01", xsd::DATE.clone()).to_string()
/// );
///
/// assert_eq!(
///     r#""foo"@en"#,
///     Literal::new_language_tagged_literal("foo", "en")?.to_string()
/// );
/// # Result::<_, oxterm::LanguageTagParseError>::Ok(())
/// ```
///
/// Literals are immutable. Like [`Resource`]s they carry a stable 64-bit
/// fingerprint derived from their canonical form, and equality and hashing
/// go through it.
#[derive(Debug, Clone)]
pub struct Literal {
    content: LiteralContent,
    fingerprint: u64,
}

#[derive(Debug, Clone)]
enum LiteralContent {
    Plain {
        value: String,
    },
    LanguageTagged {
        value: String,
        language: String,
    },
    Typed {
        value: String,
        datatype: Resource,
    },
}

impl Literal {
    /// Builds an RDF [simple literal](https://www.w3.org/TR/rdf11-concepts/#dfn-simple-literal).
    #[inline]
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self::from_content(LiteralContent::Plain {
            value: value.into(),
        })
    }

    /// Builds an RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
    ///
    /// The language tag is normalized to lowercase.
    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, LanguageTagParseError> {
        let mut language = language.into();
        language.make_ascii_lowercase();
        Ok(Self::new_language_tagged_literal_unchecked(
            value,
            LanguageTag::parse(language)?.into_inner(),
        ))
    }

    /// Builds an RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
    ///
    /// It is the caller's responsibility to check that `language` is a valid
    /// [BCP47](https://tools.ietf.org/html/bcp47) language tag in lowercase.
    ///
    /// [`Literal::new_language_tagged_literal()`] is a safe version of this
    /// constructor and should be used for untrusted data.
    #[inline]
    pub fn new_language_tagged_literal_unchecked(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self::from_content(LiteralContent::LanguageTagged {
            value: value.into(),
            language: language.into(),
        })
    }

    /// Builds an RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal) with a [datatype](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri).
    #[inline]
    pub fn new_typed_literal(value: impl Into<String>, datatype: Resource) -> Self {
        Self::from_content(LiteralContent::Typed {
            value: value.into(),
            datatype,
        })
    }

    fn from_content(content: LiteralContent) -> Self {
        let mut canonical = String::new();
        write_literal(&content, &mut canonical).expect("writing to a String never fails");
        let fingerprint = fingerprint_str(&canonical);
        Self {
            content,
            fingerprint,
        }
    }

    /// The literal [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
    #[inline]
    pub fn value(&self) -> &str {
        match &self.content {
            LiteralContent::Plain { value }
            | LiteralContent::LanguageTagged { value, .. }
            | LiteralContent::Typed { value, .. } => value,
        }
    }

    /// The literal [language tag](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tag)
    /// if it is a language-tagged string.
    #[inline]
    pub fn language(&self) -> Option<&str> {
        match &self.content {
            LiteralContent::LanguageTagged { language, .. } => Some(language),
            _ => None,
        }
    }

    /// The literal [datatype](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri)
    /// if one was given explicitly.
    #[inline]
    pub fn datatype(&self) -> Option<&Resource> {
        match &self.content {
            LiteralContent::Typed { datatype, .. } => Some(datatype),
            _ => None,
        }
    }

    /// Returns `true` if this literal is plain or language-tagged.
    #[inline]
    pub fn is_plain(&self) -> bool {
        !matches!(self.content, LiteralContent::Typed { .. })
    }

    /// Returns `true` if this literal is typed with an XSD numeric datatype.
    pub fn is_numeric(&self) -> bool {
        self.datatype().is_some_and(|datatype| {
            matches!(
                datatype.as_str().strip_prefix(XSD_NAMESPACE),
                Some(
                    "integer"
                        | "decimal"
                        | "double"
                        | "float"
                        | "long"
                        | "int"
                        | "short"
                        | "byte"
                        | "nonNegativeInteger"
                        | "nonPositiveInteger"
                        | "negativeInteger"
                        | "positiveInteger"
                        | "unsignedLong"
                        | "unsignedInt"
                        | "unsignedShort"
                        | "unsignedByte"
                )
            )
        })
    }

    /// Returns `true` if this literal is plain, language-tagged, or typed
    /// with an XSD string-category datatype.
    pub fn is_string_like(&self) -> bool {
        match &self.content {
            LiteralContent::Plain { .. } | LiteralContent::LanguageTagged { .. } => true,
            LiteralContent::Typed { datatype, .. } => matches!(
                datatype.as_str().strip_prefix(XSD_NAMESPACE),
                Some(
                    "string"
                        | "normalizedString"
                        | "token"
                        | "language"
                        | "Name"
                        | "NCName"
                        | "NMTOKEN"
                        | "anyURI"
                )
            ),
        }
    }

    /// Compares the values of two literals the way the query layer orders
    /// RDF terms: numbers compare numerically, strings lexically.
    ///
    /// Returns `None` when the two literals are not comparable, including
    /// when a numeric lexical form does not parse.
    pub fn compare_value(&self, other: &Self) -> Option<Ordering> {
        if self.is_numeric() || other.is_numeric() {
            let left = Double::from_str(self.value()).ok()?;
            let right = Double::from_str(other.value()).ok()?;
            return left.partial_cmp(&right);
        }
        if self.is_string_like() && other.is_string_like() {
            return Some(self.value().cmp(other.value()).then_with(|| {
                self.language()
                    .unwrap_or_default()
                    .cmp(other.language().unwrap_or_default())
            }));
        }
        if let (Some(left), Some(right)) = (self.datatype(), other.datatype()) {
            if left == right {
                return Some(self.value().cmp(other.value()));
            }
        }
        None
    }

    /// The stable 64-bit fingerprint of this literal.
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_literal(&self.content, f)
    }
}

impl PartialEq for Literal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash(state)
    }
}

fn write_literal(content: &LiteralContent, f: &mut impl Write) -> fmt::Result {
    match content {
        LiteralContent::Plain { value } => print_quoted_str(value, f),
        LiteralContent::LanguageTagged { value, language } => {
            print_quoted_str(value, f)?;
            write!(f, "@{language}")
        }
        LiteralContent::Typed { value, datatype } => {
            print_quoted_str(value, f)?;
            write!(f, "^^{datatype}")
        }
    }
}

pub(crate) fn print_quoted_str(string: &str, f: &mut impl Write) -> fmt::Result {
    f.write_char('"')?;
    for c in string.chars() {
        match c {
            '\u{08}' => f.write_str("\\b"),
            '\t' => f.write_str("\\t"),
            '\n' => f.write_str("\\n"),
            '\u{0C}' => f.write_str("\\f"),
            '\r' => f.write_str("\\r"),
            '"' => f.write_str("\\\""),
            '\\' => f.write_str("\\\\"),
            '\0'..='\u{1F}' | '\u{7F}' => write!(f, "\\u{:04X}", u32::from(c)),
            _ => f.write_char(c),
        }?;
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::xsd;

    #[test]
    fn simple_literal() {
        let lit = Literal::new_simple_literal("foo");
        assert_eq!(lit.value(), "foo");
        assert_eq!(lit.language(), None);
        assert_eq!(lit.datatype(), None);
        assert!(lit.is_plain());
        assert!(lit.is_string_like());
        assert!(!lit.is_numeric());
    }

    #[test]
    fn language_tag_is_lowercased() {
        let lit = Literal::new_language_tagged_literal("foo", "EN").unwrap();
        assert_eq!(lit.language(), Some("en"));
    }

    #[test]
    fn typed_literal_categories() {
        let n = Literal::new_typed_literal("42", xsd::INTEGER.clone());
        assert!(n.is_numeric());
        assert!(!n.is_string_like());
        let s = Literal::new_typed_literal("foo", xsd::STRING.clone());
        assert!(s.is_string_like());
    }

    #[test]
    fn numeric_comparison() {
        let a = Literal::new_typed_literal("2", xsd::INTEGER.clone());
        let b = Literal::new_typed_literal("2.0", xsd::DOUBLE.clone());
        let c = Literal::new_typed_literal("3", xsd::INTEGER.clone());
        assert_eq!(a.compare_value(&b), Some(Ordering::Equal));
        assert_eq!(a.compare_value(&c), Some(Ordering::Less));
    }

    #[test]
    fn failed_comparison_is_none() {
        let a = Literal::new_typed_literal("not a number", xsd::INTEGER.clone());
        let b = Literal::new_typed_literal("2", xsd::INTEGER.clone());
        assert_eq!(a.compare_value(&b), None);
        let d = Literal::new_typed_literal("1999-01-01", xsd::DATE.clone());
        let e = Literal::new_typed_literal("true", xsd::BOOLEAN.clone());
        assert_eq!(d.compare_value(&e), None);
    }

    #[test]
    fn string_comparison() {
        let a = Literal::new_simple_literal("abc");
        let b = Literal::new_simple_literal("abd");
        assert_eq!(a.compare_value(&b), Some(Ordering::Less));
        let c = Literal::new_language_tagged_literal("abc", "en").unwrap();
        assert_ne!(a.compare_value(&c), Some(Ordering::Equal));
    }

    #[test]
    fn equality_goes_through_fingerprints() {
        let a = Literal::new_simple_literal("foo");
        let b = Literal::new_simple_literal("foo");
        let c = Literal::new_typed_literal("foo", xsd::STRING.clone());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
