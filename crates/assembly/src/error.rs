//! Assembly error model.

use thiserror::Error;

use pizzeria_core::{ProductKind, Variant};
use pizzeria_ingredients::SupplyError;
use pizzeria_products::BuildError;

pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Failure of a `process` call. No product is returned alongside any of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// No supplier for the variant or no builder for the kind is registered.
    /// Raised before any step runs.
    #[error("no registered line for {kind} in {variant}")]
    UnknownCombination { kind: ProductKind, variant: Variant },

    /// Assembly started but the builder could not complete the product.
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl AssemblyError {
    /// The underlying supplier fault (`UnsupportedKind`, `EmptyToppingSet`), if any.
    pub fn supply_error(&self) -> Option<&SupplyError> {
        match self {
            AssemblyError::Build(err) => err.supply_error(),
            AssemblyError::UnknownCombination { .. } => None,
        }
    }

    pub fn is_unknown_combination(&self) -> bool {
        matches!(self, AssemblyError::UnknownCombination { .. })
    }
}

impl From<SupplyError> for AssemblyError {
    fn from(err: SupplyError) -> Self {
        AssemblyError::Build(BuildError::Supply(err))
    }
}
