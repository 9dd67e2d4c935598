//! Build error model.

use thiserror::Error;

use pizzeria_core::ComponentKind;
use pizzeria_ingredients::SupplyError;

pub type BuildResult<T> = Result<T, BuildError>;

/// Failure while assembling a product.
///
/// A failed build never yields a partial product: the draft is dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The supplier could not hand out a required kind.
    #[error(transparent)]
    Supply(#[from] SupplyError),

    /// A supplied component is tagged with a different kind than requested.
    #[error("requested {requested} but supplier returned {supplied}")]
    KindMismatch {
        requested: ComponentKind,
        supplied: ComponentKind,
    },

    /// A list was supplied for a single-valued kind, or vice versa.
    #[error("supplied value has the wrong shape for {kind}")]
    ShapeMismatch { kind: ComponentKind },

    /// A slot value with no components was placed.
    #[error("slot {kind} cannot be empty")]
    EmptySlot { kind: ComponentKind },

    /// A kind outside the product's required set was placed.
    #[error("product does not use {kind}")]
    UnrequestedSlot { kind: ComponentKind },

    /// The same kind was placed twice.
    #[error("slot {kind} is already populated")]
    DuplicateSlot { kind: ComponentKind },

    /// The draft was finished with a required slot still empty.
    #[error("required slot {kind} was never populated")]
    MissingSlot { kind: ComponentKind },
}

impl BuildError {
    /// The underlying supplier fault, if this build failed on one.
    pub fn supply_error(&self) -> Option<&SupplyError> {
        match self {
            BuildError::Supply(err) => Some(err),
            _ => None,
        }
    }
}
