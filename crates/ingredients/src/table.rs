//! Table-backed suppliers.
//!
//! Every concrete ingredient is a row in a `(Variant, ComponentKind) → names`
//! table instead of a type of its own. The two regional tables below are the
//! complete mappings; `TableSupplier::builder` assembles partial ones.

use std::collections::BTreeMap;

use pizzeria_core::{Component, ComponentKind, Variant};

use crate::supplier::{SlotValue, SupplyError, SupplyResult, VariantSupplier};

type Row = (ComponentKind, &'static [&'static str]);

const NEW_YORK: [Row; 6] = [
    (ComponentKind::Base, &["thin crust dough"]),
    (ComponentKind::Sauce, &["marinara sauce"]),
    (ComponentKind::Topping, &["reggiano cheese"]),
    (
        ComponentKind::ToppingSet,
        &["garlic", "onion", "mushroom", "red pepper"],
    ),
    (ComponentKind::Protein, &["sliced pepperoni"]),
    (ComponentKind::Shellfish, &["fresh clams"]),
];

const CHICAGO: [Row; 6] = [
    (ComponentKind::Base, &["thick crust dough"]),
    (ComponentKind::Sauce, &["plum tomato sauce"]),
    (ComponentKind::Topping, &["mozzarella cheese"]),
    (
        ComponentKind::ToppingSet,
        &["black olives", "egg plant", "spinach"],
    ),
    (ComponentKind::Protein, &["sliced pepperoni"]),
    (ComponentKind::Shellfish, &["frozen clams"]),
];

fn standard_rows(variant: Variant) -> &'static [Row] {
    match variant {
        Variant::NewYork => &NEW_YORK,
        Variant::Chicago => &CHICAGO,
    }
}

/// Supplier answering from an in-memory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSupplier {
    variant: Variant,
    rows: BTreeMap<ComponentKind, Vec<String>>,
}

impl TableSupplier {
    /// The complete regional table for `variant`.
    pub fn standard(variant: Variant) -> Self {
        let rows = standard_rows(variant)
            .iter()
            .map(|(kind, names)| (*kind, names.iter().map(|n| (*n).to_string()).collect()))
            .collect();
        Self { variant, rows }
    }

    pub fn new_york() -> Self {
        Self::standard(Variant::NewYork)
    }

    pub fn chicago() -> Self {
        Self::standard(Variant::Chicago)
    }

    /// Start an empty table for `variant`.
    pub fn builder(variant: Variant) -> TableSupplierBuilder {
        TableSupplierBuilder {
            supplier: Self {
                variant,
                rows: BTreeMap::new(),
            },
        }
    }

    /// Kinds this table has a row for, in slot order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.rows.keys().copied()
    }
}

impl VariantSupplier for TableSupplier {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn supply(&self, kind: ComponentKind) -> SupplyResult<SlotValue> {
        let unsupported = || SupplyError::UnsupportedKind {
            variant: self.variant,
            kind,
        };
        let names = self.rows.get(&kind).ok_or_else(unsupported)?;

        if kind.is_set() {
            if names.is_empty() {
                return Err(SupplyError::EmptyToppingSet {
                    variant: self.variant,
                });
            }
            let components = names.iter().map(|name| Component::new(kind, name.as_str())).collect();
            return Ok(SlotValue::Many(components));
        }

        let name = names.first().ok_or_else(unsupported)?;
        Ok(SlotValue::One(Component::new(kind, name.as_str())))
    }

    fn provides(&self, kind: ComponentKind) -> bool {
        self.rows.contains_key(&kind)
    }
}

/// Builder for partial or custom tables.
#[derive(Debug, Clone)]
pub struct TableSupplierBuilder {
    supplier: TableSupplier,
}

impl TableSupplierBuilder {
    /// Map a single-valued kind to `name`, replacing any previous row.
    pub fn with(mut self, kind: ComponentKind, name: impl Into<String>) -> Self {
        self.supplier.rows.insert(kind, vec![name.into()]);
        self
    }

    /// Map the topping set, replacing any previous row. Order is kept.
    pub fn with_toppings<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.supplier.rows.insert(ComponentKind::ToppingSet, names);
        self
    }

    /// Copy the standard row for `kind` from the variant's regional table.
    pub fn with_standard(mut self, kind: ComponentKind) -> Self {
        if let Some((_, names)) = standard_rows(self.supplier.variant)
            .iter()
            .find(|(row_kind, _)| *row_kind == kind)
        {
            let names = names.iter().map(|n| (*n).to_string()).collect();
            self.supplier.rows.insert(kind, names);
        }
        self
    }

    /// Drop the row for `kind`, if any.
    pub fn without(mut self, kind: ComponentKind) -> Self {
        self.supplier.rows.remove(&kind);
        self
    }

    pub fn build(self) -> TableSupplier {
        self.supplier
    }
}
