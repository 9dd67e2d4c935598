//! Parse error model for textual identities.

use thiserror::Error;

/// Result type used when parsing catalog identifiers.
pub type ParseResult<T> = Result<T, ParseError>;

/// A textual identity did not name a member of a closed catalog set.
///
/// Keep this focused on deterministic input failures. Assembly failures live
/// with the crates that produce them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown component kind: {0}")]
    ComponentKind(String),

    #[error("unknown variant: {0}")]
    Variant(String),

    #[error("unknown product kind: {0}")]
    ProductKind(String),
}

impl ParseError {
    pub fn component_kind(input: impl Into<String>) -> Self {
        Self::ComponentKind(input.into())
    }

    pub fn variant(input: impl Into<String>) -> Self {
        Self::Variant(input.into())
    }

    pub fn product_kind(input: impl Into<String>) -> Self {
        Self::ProductKind(input.into())
    }
}
