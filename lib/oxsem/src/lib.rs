#![doc = include_str!("../README.md")]
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]
#![doc(test(attr(deny(warnings))))]

mod base;
mod class_model;
mod data;
mod entity;
mod error;
mod events;
mod ontology;
mod parser;
mod property_model;
pub mod reasoner;
mod serializer;
mod taxonomy;

pub use crate::class_model::ClassModel;
pub use crate::data::OntologyData;
pub use crate::entity::{
    ClassKind, Fact, OntologyClass, OntologyProperty, PropertyKind, Restriction,
    RestrictionConstraint,
};
pub use crate::error::SemanticsError;
pub use crate::events::register_warning_handler;
pub use crate::ontology::Ontology;
pub use crate::property_model::PropertyModel;
pub use crate::taxonomy::{Taxonomy, TaxonomyEntry};
