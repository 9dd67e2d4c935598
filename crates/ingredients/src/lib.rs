//! Ingredient suppliers (one per regional variant).
//!
//! A supplier maps a `ComponentKind` to the concrete component(s) its region
//! hands out. Suppliers are pure data lookups: no IO, no randomness.

pub mod supplier;
pub mod table;

pub use supplier::{SlotValue, SupplyError, SupplyResult, VariantSupplier};
pub use table::{TableSupplier, TableSupplierBuilder};
