//! Products and the builders that assemble them.
//!
//! Builders know *which* component kinds a product needs; suppliers know
//! *which* concrete components a region hands out. Neither knows the other's
//! concrete type.

pub mod builder;
pub mod error;
pub mod product;

pub use builder::{
    BasicBuilder, MixedBuilder, PrimaryBuilder, ProductBuilder, ShellfishBuilder, builder_for,
};
pub use error::{BuildError, BuildResult};
pub use product::{Product, ProductDraft};
