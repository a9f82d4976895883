//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! pchub cart add "Gaming Mouse" 2
//! pchub cart show
//! pchub cart remove "Gaming Mouse"
//! pchub cart clear
//! ```

use std::io::Write;

use pchub_core::{Price, StoreError, line_total, parse_quantity};

use crate::error::Result;
use crate::session::Session;

/// Add units of a catalog item to the cart.
///
/// Only items currently in the catalog can be added from the command line.
pub fn add(session: &mut Session, name: &str, quantity: &str, out: &mut impl Write) -> Result<()> {
    let name = name.trim();
    if !session.catalog.contains(name) {
        return Err(StoreError::NotFound(name.to_owned()).into());
    }
    let quantity = parse_quantity(quantity)?;
    let total = session.cart.add_to_cart(name, quantity)?;
    session.mark_dirty();

    writeln!(out, "{quantity} {name}(s) added to cart ({total} in cart).")?;
    Ok(())
}

/// Remove an item's line from the cart.
pub fn remove(session: &mut Session, name: &str, out: &mut impl Write) -> Result<()> {
    session.cart.remove_from_cart(name)?;
    session.mark_dirty();

    writeln!(out, "{name} removed from cart.")?;
    Ok(())
}

/// Empty the cart.
pub fn clear(session: &mut Session, out: &mut impl Write) -> Result<()> {
    if !session.cart.is_empty() {
        session.cart.clear();
        session.mark_dirty();
    }
    writeln!(out, "Cart cleared.")?;
    Ok(())
}

/// List cart lines with their totals at current prices.
pub fn show(session: &Session, out: &mut impl Write) -> Result<()> {
    if session.cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    writeln!(out, "{:<32} {:>10} {:>16}", "Item", "Quantity", "Total Price")?;
    for (name, quantity) in session.cart.lines() {
        let total = match session.catalog.price_of(name.as_str()) {
            Some(price) => Price::local(line_total(price, quantity)?).to_string(),
            None => "unavailable".to_owned(),
        };
        writeln!(out, "{:<32} {quantity:>10} {total:>16}", name.as_str())?;
    }

    writeln!(out)?;
    match session.cart.total_cost(&session.catalog) {
        Ok(total) => writeln!(out, "Total Cost: {}", Price::local(total))?,
        Err(StoreError::NotFound(missing)) => writeln!(
            out,
            "Total Cost: unavailable ({missing} is no longer in the catalog)"
        )?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
