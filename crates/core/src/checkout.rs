//! Checkout: reconcile the cart against the catalog.
//!
//! Checkout runs in two stages. [`plan`] reads both stores and works out the
//! new stock levels, shortfall warnings and receipt lines without touching
//! anything. [`checkout_at`] builds the receipt from the plan, then commits
//! every stock change in one pass and clears the cart. Anything that can fail
//! happens before the first store is touched, so a checkout is either fully
//! applied or not applied at all.
//!
//! Shortfalls do not stop a checkout: stock is clamped at zero, a
//! [`StockWarning`] is reported, and the receipt still bills the requested
//! quantity. Cart lines whose item has left the catalog are skipped.

use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::receipt::{Receipt, ReceiptLine};
use crate::types::{ItemName, line_total};

/// Stock ran out for an item during checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockWarning {
    pub name: ItemName,
    pub requested: u32,
    /// Stock on hand before checkout. Now zero.
    pub available: u32,
}

impl core::fmt::Display for StockWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Insufficient stock for {} (requested {}, had {}). Quantity set to 0.",
            self.name, self.requested, self.available
        )
    }
}

/// Result of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub receipt: Receipt,
    pub warnings: Vec<StockWarning>,
    /// Cart lines dropped because the item is no longer in the catalog.
    pub skipped: Vec<ItemName>,
}

/// What a checkout call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was empty; nothing changed.
    NothingToPurchase,
    Completed(CheckoutSummary),
}

/// Stock changes and receipt lines computed from the current stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPlan {
    /// New stock level per item, in cart order.
    pub stock_updates: Vec<(ItemName, u32)>,
    pub lines: Vec<ReceiptLine>,
    pub warnings: Vec<StockWarning>,
    pub skipped: Vec<ItemName>,
}

/// Work out a checkout without changing either store.
///
/// # Errors
///
/// Returns [`StoreError::InvalidValue`] if a line total overflows.
pub fn plan(catalog: &Catalog, cart: &Cart) -> Result<CheckoutPlan, StoreError> {
    let mut plan = CheckoutPlan {
        stock_updates: Vec::with_capacity(cart.len()),
        lines: Vec::with_capacity(cart.len()),
        warnings: Vec::new(),
        skipped: Vec::new(),
    };

    for (name, requested) in cart.lines() {
        let Some(entry) = catalog.get(name.as_str()) else {
            plan.skipped.push(name.clone());
            continue;
        };

        let remaining = entry.quantity.checked_sub(requested).unwrap_or_else(|| {
            plan.warnings.push(StockWarning {
                name: name.clone(),
                requested,
                available: entry.quantity,
            });
            0
        });

        plan.stock_updates.push((name.clone(), remaining));
        plan.lines.push(ReceiptLine {
            name: name.clone(),
            quantity: requested,
            line_total: line_total(entry.price, requested)?,
        });
    }

    Ok(plan)
}

/// Check out the cart, stamping the receipt with the local time.
///
/// # Errors
///
/// See [`checkout_at`].
pub fn checkout(
    catalog: &mut Catalog,
    cart: &mut Cart,
    store_name: &str,
) -> Result<CheckoutOutcome, StoreError> {
    checkout_at(catalog, cart, store_name, Local::now().naive_local())
}

/// Check out the cart with an explicit receipt timestamp.
///
/// On an empty cart this returns [`CheckoutOutcome::NothingToPurchase`] and
/// leaves the catalog untouched. Otherwise stock is decremented, the cart is
/// cleared, and the receipt is returned.
///
/// # Errors
///
/// Returns [`StoreError::InvalidValue`] if a line total or the receipt total
/// is too large to represent. Neither store is changed in that case.
pub fn checkout_at(
    catalog: &mut Catalog,
    cart: &mut Cart,
    store_name: &str,
    issued_at: NaiveDateTime,
) -> Result<CheckoutOutcome, StoreError> {
    if cart.is_empty() {
        info!("Checkout requested with an empty cart");
        return Ok(CheckoutOutcome::NothingToPurchase);
    }

    let CheckoutPlan {
        stock_updates,
        lines,
        warnings,
        skipped,
    } = plan(catalog, cart)?;
    let receipt = Receipt::new(store_name, issued_at, lines)?;

    for (name, remaining) in &stock_updates {
        catalog.set_stock(name.as_str(), *remaining);
    }
    cart.clear();

    for warning in &warnings {
        warn!(
            item = %warning.name,
            requested = warning.requested,
            available = warning.available,
            "Insufficient stock, quantity set to 0"
        );
    }
    for name in &skipped {
        warn!(item = %name, "Cart item no longer in catalog, skipped");
    }

    info!(
        lines = receipt.lines.len(),
        total = %receipt.total,
        warnings = warnings.len(),
        "Checkout completed"
    );

    Ok(CheckoutOutcome::Completed(CheckoutSummary {
        receipt,
        warnings,
        skipped,
    }))
}
