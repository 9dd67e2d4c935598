//! `pizzeria-core`: component catalog and shared domain primitives.
//!
//! This crate contains **pure domain** primitives (no IO, no logging, no
//! registries): the closed sets of component kinds, variants and product
//! kinds, and the `Component` value object that suppliers hand out.

pub mod component;
pub mod error;
pub mod id;
pub mod kind;

pub use component::Component;
pub use error::{ParseError, ParseResult};
pub use id::RunId;
pub use kind::{ComponentKind, ProductKind, Variant};
