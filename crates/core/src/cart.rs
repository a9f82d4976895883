//! Cart store: pending selections awaiting checkout.
//!
//! A cart line is just a name and a requested quantity. Names are not checked
//! against the catalog here; prices are looked up when a total is needed, so
//! they follow catalog edits until checkout.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Result, StoreError};
use crate::types::{ItemName, cart_quantity, line_total};

/// In-memory cart, keyed by item name, in the order items were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: IndexMap<ItemName, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of an item, accumulating onto an existing line.
    ///
    /// Returns the line's new requested quantity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidValue`] if the name is empty, the quantity
    /// is not positive, or the accumulated quantity overflows.
    pub fn add_to_cart(&mut self, name: &str, quantity: i64) -> Result<u32> {
        let name = ItemName::parse(name)?;
        let quantity = cart_quantity(quantity)?;

        let current = self.lines.get(&name).copied().unwrap_or(0);
        let total = current.checked_add(quantity).ok_or_else(|| {
            StoreError::InvalidValue(format!("quantity for {name} exceeds the cart limit"))
        })?;

        debug!(item = %name, added = quantity, total, "Cart line updated");
        self.lines.insert(name, total);
        Ok(total)
    }

    /// Remove an item's line entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the item is not in the cart.
    pub fn remove_from_cart(&mut self, name: &str) -> Result<u32> {
        let removed = self
            .lines
            .shift_remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))?;
        debug!(item = name, "Cart line removed");
        Ok(removed)
    }

    /// Remove every line. Clearing an empty cart is a no-op.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * quantity` over all lines, at current catalog prices.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] for the first line whose item is no longer
    ///   in the catalog
    /// - [`StoreError::InvalidValue`] if the total is too large to represent
    pub fn total_cost(&self, catalog: &Catalog) -> Result<Decimal> {
        self.lines.iter().try_fold(Decimal::ZERO, |total, (name, &qty)| {
            let price = catalog
                .price_of(name.as_str())
                .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
            total
                .checked_add(line_total(price, qty)?)
                .ok_or_else(|| StoreError::InvalidValue("cart total is too large".to_owned()))
        })
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = (&ItemName, u32)> {
        self.lines.iter().map(|(name, &qty)| (name, qty))
    }

    /// Requested quantity for an item, if it is in the cart.
    #[must_use]
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.lines.get(name).copied()
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First line with a zero quantity, if any. Only reachable through
    /// deserialization, which does not run the `add_to_cart` checks.
    pub(crate) fn first_empty_line(&self) -> Option<&ItemName> {
        self.lines
            .iter()
            .find(|&(_, &qty)| qty == 0)
            .map(|(name, _)| name)
    }
}
