//! Stock and cart quantity validation.
//!
//! The stores keep quantities as `u32`. Callers hand in signed values so that
//! a negative entry is reported as [`StoreError::InvalidValue`] instead of
//! being impossible to express.

use crate::error::StoreError;

/// Validate a stock level: zero or more.
///
/// # Errors
///
/// Returns [`StoreError::InvalidValue`] if `quantity` is negative or does not
/// fit in a `u32`.
pub fn stock_quantity(quantity: i64) -> Result<u32, StoreError> {
    if quantity < 0 {
        return Err(StoreError::InvalidValue(format!(
            "quantity must not be negative, got {quantity}"
        )));
    }
    u32::try_from(quantity)
        .map_err(|_| StoreError::InvalidValue(format!("quantity too large: {quantity}")))
}

/// Validate a requested cart quantity: one or more.
///
/// # Errors
///
/// Returns [`StoreError::InvalidValue`] if `quantity` is zero, negative, or
/// does not fit in a `u32`.
pub fn cart_quantity(quantity: i64) -> Result<u32, StoreError> {
    if quantity <= 0 {
        return Err(StoreError::InvalidValue(format!(
            "quantity must be greater than 0, got {quantity}"
        )));
    }
    stock_quantity(quantity)
}

/// Parse a user-entered whole number.
///
/// Only syntax is checked here; range rules belong to [`stock_quantity`] and
/// [`cart_quantity`].
///
/// # Errors
///
/// Returns [`StoreError::InvalidValue`] if the text is not an integer.
pub fn parse_quantity(input: &str) -> Result<i64, StoreError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| StoreError::InvalidValue(format!("not a valid quantity: {trimmed:?}")))
}
