//! The assembly line: a fixed production template over pluggable suppliers
//! and builders.
//!
//! ```text
//! process(kind, variant)
//!   ↓
//! 1. Resolve supplier (by variant) and builder (by kind) from the registry
//!   ↓
//! 2. Assemble: builder asks the supplier for each required kind
//!   ↓
//! 3. Bake → Cut → Box (identical for every product)
//!   ↓
//! Product
//! ```
//!
//! The line holds no per-call state; every `process` call builds a fresh
//! product, so a line can be shared across threads.

pub mod error;
pub mod event;
pub mod line;
pub mod registry;
pub mod state;
pub mod step;

pub use error::{AssemblyError, AssemblyResult};
pub use event::{AssemblyEnvelope, AssemblyEvent};
pub use line::AssemblyLine;
pub use registry::{Registry, RegistryBuilder};
pub use state::AssemblyState;
pub use step::FinishingStep;
