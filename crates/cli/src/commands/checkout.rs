//! Checkout command.
//!
//! # Usage
//!
//! ```bash
//! # Print the receipt
//! pchub checkout
//!
//! # Also keep a copy of the receipt text
//! pchub checkout --output receipt.txt
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use pchub_core::{CheckoutOutcome, checkout};

use crate::error::{CliError, Result};
use crate::session::Session;

/// Check out the cart, print the receipt and optionally write it to a file.
pub fn run(session: &mut Session, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let outcome =
        checkout::checkout(&mut session.catalog, &mut session.cart, &session.store_name)?;

    let summary = match outcome {
        CheckoutOutcome::NothingToPurchase => {
            writeln!(out, "Your cart is empty.")?;
            return Ok(());
        }
        CheckoutOutcome::Completed(summary) => summary,
    };
    session.mark_dirty();

    for warning in &summary.warnings {
        writeln!(out, "Warning: {warning}")?;
    }
    for name in &summary.skipped {
        writeln!(out, "Skipped {name}: no longer in the catalog.")?;
    }

    let text = summary.receipt.to_string();
    writeln!(out, "{text}")?;

    if let Some(path) = output {
        fs::write(path, format!("{text}\n")).map_err(|source| CliError::ReceiptExport {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Receipt exported");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, session};
    use rust_decimal_macros::dec;

    #[test]
    fn test_checkout_prints_receipt() {
        let (_dir, mut session) = session();
        session.catalog.add_item("Mouse", dec!(450), 5).unwrap();
        session.cart.add_to_cart("Mouse", 2).unwrap();

        let mut out = Vec::new();
        run(&mut session, None, &mut out).unwrap();

        let text = output(&out);
        assert!(text.starts_with("PC HUB MAGALANG\n"));
        assert!(text.contains("Mouse x 2 = \u{20b1}900.00"));
        assert!(text.contains("Total Cost: \u{20b1}900.00"));
        assert_eq!(session.catalog.get("Mouse").unwrap().quantity, 3);
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_checkout_reports_shortfall() {
        let (_dir, mut session) = session();
        session.catalog.add_item("Mouse", dec!(450), 1).unwrap();
        session.cart.add_to_cart("Mouse", 3).unwrap();

        let mut out = Vec::new();
        run(&mut session, None, &mut out).unwrap();

        let text = output(&out);
        assert!(text.starts_with("Warning: Insufficient stock for Mouse"));
        assert!(text.contains("Total Cost: \u{20b1}1,350.00"));
        assert_eq!(session.catalog.get("Mouse").unwrap().quantity, 0);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let (_dir, mut session) = session();
        let mut out = Vec::new();
        run(&mut session, None, &mut out).unwrap();
        assert_eq!(output(&out), "Your cart is empty.\n");
    }

    #[test]
    fn test_checkout_exports_receipt() {
        let (dir, mut session) = session();
        session.catalog.add_item("Mouse", dec!(450), 5).unwrap();
        session.cart.add_to_cart("Mouse", 1).unwrap();
        let path = dir.path().join("receipt.txt");

        let mut out = Vec::new();
        run(&mut session, Some(&path), &mut out).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("Mouse x 1 = \u{20b1}450.00"));
        assert!(saved.ends_with("Thank you for shopping with us!\n"));
    }

    #[test]
    fn test_checkout_overflow_changes_nothing() {
        let (_dir, mut session) = session();
        session
            .catalog
            .add_item("Huge", dec!(10000000000000000000000000), 5)
            .unwrap();
        session.cart.add_to_cart("Huge", 10_000).unwrap();

        let mut out = Vec::new();
        assert!(matches!(
            run(&mut session, None, &mut out),
            Err(CliError::Store(pchub_core::StoreError::InvalidValue(_)))
        ));
        assert_eq!(session.catalog.get("Huge").unwrap().quantity, 5);
        assert_eq!(session.cart.quantity_of("Huge"), Some(10_000));
        assert!(out.is_empty());
    }
}
