//! Store error model.

use thiserror::Error;

use liquorstore_core::DomainError;

/// Result type returned by store operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Failure of a store operation. The store is unchanged whenever one is
/// returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The id is not in the catalog.
    #[error("unknown item '{id}'")]
    UnknownItem { id: String },

    /// A removal would drive the quantity below zero.
    #[error("insufficient stock for '{id}': requested {requested}, available {available}")]
    InsufficientStock {
        id: String,
        requested: u64,
        available: u32,
    },

    /// An addition would exceed the representable quantity.
    #[error("quantity overflow for '{id}'")]
    QuantityOverflow { id: String },

    /// A new item definition failed validation.
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl InventoryError {
    pub fn unknown_item(id: impl Into<String>) -> Self {
        Self::UnknownItem { id: id.into() }
    }
}
