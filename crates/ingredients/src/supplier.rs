//! Supplier contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pizzeria_core::{Component, ComponentKind, Variant};

pub type SupplyResult<T> = Result<T, SupplyError>;

/// Failure to hand out a component.
///
/// Both variants are data-integrity faults of the supplier; callers do not
/// retry them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SupplyError {
    /// The supplier has no mapping for the requested kind.
    #[error("{variant} supplier does not provide {kind}")]
    UnsupportedKind { variant: Variant, kind: ComponentKind },

    /// The topping-set mapping exists but is empty.
    #[error("{variant} supplier returned an empty topping set")]
    EmptyToppingSet { variant: Variant },
}

/// What a supplier returns for one kind: a single component, or the ordered
/// list for `ComponentKind::ToppingSet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    One(Component),
    Many(Vec<Component>),
}

impl SlotValue {
    /// The components in display order.
    pub fn components(&self) -> &[Component] {
        match self {
            SlotValue::One(component) => core::slice::from_ref(component),
            SlotValue::Many(components) => components,
        }
    }

    pub fn as_one(&self) -> Option<&Component> {
        match self {
            SlotValue::One(component) => Some(component),
            SlotValue::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[Component]> {
        match self {
            SlotValue::One(_) => None,
            SlotValue::Many(components) => Some(components),
        }
    }

    pub fn len(&self) -> usize {
        self.components().len()
    }

    pub fn is_empty(&self) -> bool {
        self.components().is_empty()
    }
}

/// Component factory for one variant.
///
/// Implementations hold no mutable state after construction and must return
/// the same components for the same kind on every call.
pub trait VariantSupplier: Send + Sync + core::fmt::Debug {
    /// The variant this supplier serves.
    fn variant(&self) -> Variant;

    /// Hand out the component(s) for `kind`.
    ///
    /// `ComponentKind::ToppingSet` yields a non-empty `SlotValue::Many`;
    /// every other kind yields exactly one `SlotValue::One`.
    fn supply(&self, kind: ComponentKind) -> SupplyResult<SlotValue>;

    /// Whether `supply(kind)` has a mapping to consult.
    fn provides(&self, kind: ComponentKind) -> bool;
}
