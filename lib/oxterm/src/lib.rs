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

mod graph;
mod literal;
mod resource;
mod triple;
pub mod vocab;

pub use crate::graph::Graph;
pub use crate::literal::Literal;
pub use crate::resource::{BlankNodeIdParseError, Resource};
pub use crate::triple::{Term, Triple};
pub use oxilangtag::LanguageTagParseError;
pub use oxiri::IriParseError;
