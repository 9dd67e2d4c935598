//! Static registration table: variant → supplier, product kind → builder.
//!
//! Built once at startup and handed to the line explicitly; there is no
//! process-wide instance.

use std::collections::BTreeMap;
use std::sync::Arc;

use pizzeria_core::{ProductKind, Variant};
use pizzeria_ingredients::{TableSupplier, VariantSupplier};
use pizzeria_products::{
    BasicBuilder, MixedBuilder, PrimaryBuilder, ProductBuilder, ShellfishBuilder,
};

use crate::error::{AssemblyError, AssemblyResult};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    suppliers: BTreeMap<Variant, Arc<dyn VariantSupplier>>,
    builders: BTreeMap<ProductKind, Arc<dyn ProductBuilder>>,
}

impl Registry {
    /// Both regional suppliers and all four builders.
    pub fn standard() -> Self {
        let mut builder = Self::builder();
        for variant in Variant::ALL {
            builder = builder.standard_supplier(variant);
        }
        for kind in ProductKind::ALL {
            builder = builder.standard_builder(kind);
        }
        builder.build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn supplier(&self, variant: Variant) -> Option<&dyn VariantSupplier> {
        self.suppliers.get(&variant).map(Arc::as_ref)
    }

    pub fn product_builder(&self, kind: ProductKind) -> Option<&dyn ProductBuilder> {
        self.builders.get(&kind).map(Arc::as_ref)
    }

    /// Look up both halves of a combination, or fail without side effects.
    pub fn resolve(
        &self,
        kind: ProductKind,
        variant: Variant,
    ) -> AssemblyResult<(&dyn VariantSupplier, &dyn ProductBuilder)> {
        match (self.supplier(variant), self.product_builder(kind)) {
            (Some(supplier), Some(builder)) => Ok((supplier, builder)),
            _ => Err(AssemblyError::UnknownCombination { kind, variant }),
        }
    }

    pub fn variants(&self) -> impl Iterator<Item = Variant> + '_ {
        self.suppliers.keys().copied()
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProductKind> + '_ {
        self.builders.keys().copied()
    }

    /// Every registered (kind, variant) pair, variant-major.
    pub fn combinations(&self) -> Vec<(ProductKind, Variant)> {
        self.variants()
            .flat_map(|variant| self.kinds().map(move |kind| (kind, variant)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty() && self.builders.is_empty()
    }
}

/// Accumulates registrations. Later registrations for the same key replace
/// earlier ones.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Register `supplier` under the variant it reports.
    pub fn supplier(mut self, supplier: impl VariantSupplier + 'static) -> Self {
        let variant = supplier.variant();
        self.registry.suppliers.insert(variant, Arc::new(supplier));
        self
    }

    /// Register `builder` under the product kind it reports.
    pub fn product_builder(mut self, builder: impl ProductBuilder + 'static) -> Self {
        let kind = builder.product_kind();
        self.registry.builders.insert(kind, Arc::new(builder));
        self
    }

    pub fn standard_supplier(self, variant: Variant) -> Self {
        self.supplier(TableSupplier::standard(variant))
    }

    pub fn standard_builder(self, kind: ProductKind) -> Self {
        match kind {
            ProductKind::Basic => self.product_builder(BasicBuilder),
            ProductKind::Primary => self.product_builder(PrimaryBuilder),
            ProductKind::Shellfish => self.product_builder(ShellfishBuilder),
            ProductKind::Mixed => self.product_builder(MixedBuilder),
        }
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_covers_the_full_matrix() {
        let registry = Registry::standard();
        assert_eq!(registry.combinations().len(), Variant::ALL.len() * ProductKind::ALL.len());
        for variant in Variant::ALL {
            for kind in ProductKind::ALL {
                let (supplier, builder) = registry.resolve(kind, variant).unwrap();
                assert_eq!(supplier.variant(), variant);
                assert_eq!(builder.product_kind(), kind);
            }
        }
    }

    #[test]
    fn missing_variant_is_an_unknown_combination() {
        let registry = Registry::builder()
            .standard_supplier(Variant::NewYork)
            .standard_builder(ProductKind::Shellfish)
            .build();
        let err = registry.resolve(ProductKind::Shellfish, Variant::Chicago).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::UnknownCombination {
                kind: ProductKind::Shellfish,
                variant: Variant::Chicago,
            }
        );
        assert!(registry.resolve(ProductKind::Shellfish, Variant::NewYork).is_ok());
    }

    #[test]
    fn missing_builder_is_an_unknown_combination() {
        let registry = Registry::builder().standard_supplier(Variant::Chicago).build();
        assert!(
            registry
                .resolve(ProductKind::Mixed, Variant::Chicago)
                .unwrap_err()
                .is_unknown_combination()
        );
    }

    #[test]
    fn combinations_are_variant_major() {
        let registry = Registry::builder()
            .standard_supplier(Variant::Chicago)
            .standard_supplier(Variant::NewYork)
            .standard_builder(ProductKind::Mixed)
            .standard_builder(ProductKind::Basic)
            .build();
        assert_eq!(
            registry.combinations(),
            vec![
                (ProductKind::Basic, Variant::NewYork),
                (ProductKind::Mixed, Variant::NewYork),
                (ProductKind::Basic, Variant::Chicago),
                (ProductKind::Mixed, Variant::Chicago),
            ]
        );
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let partial = TableSupplier::builder(Variant::NewYork).build();
        let registry = Registry::builder()
            .supplier(partial)
            .standard_supplier(Variant::NewYork)
            .build();
        let supplier = registry.supplier(Variant::NewYork).unwrap();
        assert!(supplier.provides(pizzeria_core::ComponentKind::Shellfish));
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert!(registry.combinations().is_empty());
    }
}
