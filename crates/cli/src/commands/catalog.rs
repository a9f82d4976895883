//! Catalog commands: search, add, edit and delete items.
//!
//! # Usage
//!
//! ```bash
//! pchub search mouse
//! pchub add "Gaming Mouse" 450 5
//! pchub edit "Gaming Mouse" --name "Wireless Mouse" --price 500
//! pchub delete "Wireless Mouse"
//! ```

use std::io::Write;

use pchub_core::{Price, StoreError, parse_price, parse_quantity};

use crate::error::Result;
use crate::session::Session;

/// Print every item whose name contains `query`.
pub fn search(session: &Session, query: &str, out: &mut impl Write) -> Result<()> {
    let mut hits = session.catalog.search(query).peekable();
    if hits.peek().is_none() {
        writeln!(out, "No matching items.")?;
        return Ok(());
    }

    writeln!(out, "{:<32} {:>16} {:>10}", "Item", "Price", "Quantity")?;
    for (name, entry) in hits {
        writeln!(
            out,
            "{:<32} {:>16} {:>10}",
            name.as_str(),
            entry.unit_price().to_string(),
            entry.quantity
        )?;
    }
    Ok(())
}

/// Add a new item.
pub fn add(
    session: &mut Session,
    name: &str,
    price: &str,
    quantity: &str,
    out: &mut impl Write,
) -> Result<()> {
    let price = parse_price(price)?;
    let quantity = parse_quantity(quantity)?;
    session.catalog.add_item(name, price, quantity)?;
    session.mark_dirty();

    writeln!(
        out,
        "{} added with price {} and quantity {quantity}",
        name.trim(),
        Price::local(price)
    )?;
    Ok(())
}

/// Rename an item and/or replace its price and quantity.
///
/// Fields left as `None` keep their current values.
pub fn edit(
    session: &mut Session,
    name: &str,
    new_name: Option<&str>,
    price: Option<&str>,
    quantity: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let current = *session
        .catalog
        .get(name)
        .ok_or_else(|| StoreError::NotFound(name.to_owned()))?;

    let new_name = new_name.unwrap_or(name);
    let price = price.map_or(Ok(current.price), parse_price)?;
    let quantity = quantity.map_or(Ok(i64::from(current.quantity)), parse_quantity)?;

    session
        .catalog
        .rename_or_update(name, new_name, price, quantity)?;
    session.mark_dirty();

    writeln!(out, "{} updated.", new_name.trim())?;
    Ok(())
}

/// Delete an item. Cart lines for it are kept and skipped at checkout.
pub fn delete(session: &mut Session, name: &str, out: &mut impl Write) -> Result<()> {
    session.catalog.delete_item(name)?;
    session.mark_dirty();

    writeln!(out, "{name} deleted.")?;
    Ok(())
}
