//! Product builders: one assembly strategy per product kind.

use pizzeria_core::{ComponentKind, ProductKind};
use pizzeria_ingredients::{SlotValue, SupplyError, VariantSupplier};

use crate::error::BuildResult;
use crate::product::{Product, ProductDraft};

/// Assembly strategy for one product kind, independent of variant.
///
/// Implementations are stateless. The provided `assemble` asks the supplier
/// for each required kind exactly once, in slot order, and never touches a
/// slot outside `required_kinds()`.
pub trait ProductBuilder: Send + Sync + core::fmt::Debug {
    fn product_kind(&self) -> ProductKind;

    /// Kinds this product needs, sorted and distinct.
    fn required_kinds(&self) -> &'static [ComponentKind];

    fn requires(&self, kind: ComponentKind) -> bool {
        self.required_kinds().contains(&kind)
    }

    fn assemble(&self, name: &str, supplier: &dyn VariantSupplier) -> BuildResult<Product> {
        let mut draft = ProductDraft::new(name, self.required_kinds());

        for &kind in self.required_kinds() {
            let value = supplier.supply(kind)?;
            if kind.is_set() && matches!(&value, SlotValue::Many(c) if c.is_empty()) {
                return Err(SupplyError::EmptyToppingSet {
                    variant: supplier.variant(),
                }
                .into());
            }
            draft.place(kind, value)?;
        }

        draft.finish()
    }
}

/// Cheese pizza: base, sauce, cheese.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BasicBuilder;

impl ProductBuilder for BasicBuilder {
    fn product_kind(&self) -> ProductKind {
        ProductKind::Basic
    }

    fn required_kinds(&self) -> &'static [ComponentKind] {
        &[ComponentKind::Base, ComponentKind::Sauce, ComponentKind::Topping]
    }
}

/// Pepperoni pizza: base, sauce, cheese, pepperoni.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryBuilder;

impl ProductBuilder for PrimaryBuilder {
    fn product_kind(&self) -> ProductKind {
        ProductKind::Primary
    }

    fn required_kinds(&self) -> &'static [ComponentKind] {
        &[
            ComponentKind::Base,
            ComponentKind::Sauce,
            ComponentKind::Topping,
            ComponentKind::Protein,
        ]
    }
}

/// Clam pizza: base, sauce, cheese, clams.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellfishBuilder;

impl ProductBuilder for ShellfishBuilder {
    fn product_kind(&self) -> ProductKind {
        ProductKind::Shellfish
    }

    fn required_kinds(&self) -> &'static [ComponentKind] {
        &[
            ComponentKind::Base,
            ComponentKind::Sauce,
            ComponentKind::Topping,
            ComponentKind::Shellfish,
        ]
    }
}

/// Veggie pizza: base, sauce, vegetables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MixedBuilder;

impl ProductBuilder for MixedBuilder {
    fn product_kind(&self) -> ProductKind {
        ProductKind::Mixed
    }

    fn required_kinds(&self) -> &'static [ComponentKind] {
        &[ComponentKind::Base, ComponentKind::Sauce, ComponentKind::ToppingSet]
    }
}

/// The builder registered for `kind` in the standard line-up.
pub fn builder_for(kind: ProductKind) -> &'static dyn ProductBuilder {
    match kind {
        ProductKind::Basic => &BasicBuilder,
        ProductKind::Primary => &PrimaryBuilder,
        ProductKind::Shellfish => &ShellfishBuilder,
        ProductKind::Mixed => &MixedBuilder,
    }
}
