//! The assembled product and its draft.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use pizzeria_core::{Component, ComponentKind};
use pizzeria_ingredients::SlotValue;

use crate::error::{BuildError, BuildResult};

/// A finished product: a name plus one slot per component kind it uses.
///
/// Only `ProductDraft::finish` creates products, so a product always carries
/// exactly the kinds its builder required. There are no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    slots: BTreeMap<ComponentKind, SlotValue>,
}

impl Product {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self, kind: ComponentKind) -> Option<&SlotValue> {
        self.slots.get(&kind)
    }

    /// The single component in `kind`'s slot (`None` for list slots).
    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.slot(kind).and_then(SlotValue::as_one)
    }

    /// Every component in `kind`'s slot, in display order; empty if unused.
    pub fn components(&self, kind: ComponentKind) -> &[Component] {
        self.slot(kind).map(SlotValue::components).unwrap_or(&[])
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Populated kinds in slot order.
    pub fn populated_kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.slots.keys().copied()
    }

    /// Populated slots in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (ComponentKind, &SlotValue)> + '_ {
        self.slots.iter().map(|(kind, value)| (*kind, value))
    }
}

/// A product under assembly.
///
/// The draft knows the required kind set up front and refuses anything
/// outside it. It is consumed by `finish`, so an incomplete draft can never
/// be observed as a `Product`.
#[derive(Debug)]
pub struct ProductDraft {
    name: String,
    required: BTreeSet<ComponentKind>,
    slots: BTreeMap<ComponentKind, SlotValue>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, required: &[ComponentKind]) -> Self {
        Self {
            name: name.into(),
            required: required.iter().copied().collect(),
            slots: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Put `value` into `kind`'s slot.
    pub fn place(&mut self, kind: ComponentKind, value: SlotValue) -> BuildResult<()> {
        if !self.required.contains(&kind) {
            return Err(BuildError::UnrequestedSlot { kind });
        }
        if self.slots.contains_key(&kind) {
            return Err(BuildError::DuplicateSlot { kind });
        }

        let shape_fits = match &value {
            SlotValue::One(_) => !kind.is_set(),
            SlotValue::Many(_) => kind.is_set(),
        };
        if !shape_fits {
            return Err(BuildError::ShapeMismatch { kind });
        }
        if value.is_empty() {
            return Err(BuildError::EmptySlot { kind });
        }
        if let Some(stray) = value.components().iter().find(|c| !c.fits(kind)) {
            return Err(BuildError::KindMismatch {
                requested: kind,
                supplied: stray.kind(),
            });
        }

        self.slots.insert(kind, value);
        Ok(())
    }

    /// Seal the draft; every required slot must be populated.
    pub fn finish(self) -> BuildResult<Product> {
        if let Some(kind) = self.required.iter().find(|kind| !self.slots.contains_key(*kind)) {
            return Err(BuildError::MissingSlot { kind: *kind });
        }

        Ok(Product {
            name: self.name,
            slots: self.slots,
        })
    }
}
