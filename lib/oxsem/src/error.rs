//! Error types for ontology operations.

/// An error raised while building or translating an ontology.
///
/// Only construction precondition violations are fatal. Anomalies found while
/// decoding a graph are reported as warnings through
/// [`register_warning_handler`](crate::register_warning_handler) and never
/// abort the decoding, and the reasoning helpers never fail: on malformed
/// input they return empty or partial results.
#[derive(Debug, thiserror::Error)]
pub enum SemanticsError {
    /// The given ontology name is not a valid IRI.
    #[error("invalid ontology IRI: {0}")]
    InvalidIri(#[from] oxterm::IriParseError),

    /// A construction precondition was violated.
    #[error("{0}")]
    InvalidInput(String),
}
