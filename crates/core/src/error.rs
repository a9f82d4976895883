//! Errors raised by the in-memory stores.

use thiserror::Error;

/// Errors that can occur when mutating the catalog or the cart.
///
/// Every variant is recoverable: the store is left exactly as it was before
/// the failing call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An item with this name already exists in the catalog.
    #[error("item already exists: {0}")]
    DuplicateName(String),

    /// A price, quantity or name was rejected.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The named item is not present.
    #[error("item not found: {0}")]
    NotFound(String),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
