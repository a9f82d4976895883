//! Receipts produced by checkout.
//!
//! A [`Receipt`] is structured data; its `Display` output is the plain-text
//! receipt shown to the customer and written to disk on export.

use core::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::types::{ItemName, Price};

/// Store name printed at the top of receipts unless configured otherwise.
pub const DEFAULT_STORE_NAME: &str = "PC HUB MAGALANG";

/// Timestamp layout used on receipts.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One purchased item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub name: ItemName,
    /// Requested quantity, which is what gets billed even if stock ran short.
    pub quantity: u32,
    /// `unit price * quantity` at checkout time.
    pub line_total: Decimal,
}

/// Summary of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub store_name: String,
    pub issued_at: NaiveDateTime,
    pub lines: Vec<ReceiptLine>,
    /// Sum of all line totals.
    pub total: Decimal,
}

impl Receipt {
    /// Build a receipt, computing the total from the lines.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidValue`] if the total is too large to
    /// represent.
    pub fn new(
        store_name: &str,
        issued_at: NaiveDateTime,
        lines: Vec<ReceiptLine>,
    ) -> Result<Self, StoreError> {
        let total = lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.line_total))
            .ok_or_else(|| StoreError::InvalidValue("receipt total is too large".to_owned()))?;
        Ok(Self {
            store_name: store_name.to_owned(),
            issued_at,
            lines,
            total,
        })
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.store_name)?;
        writeln!(f)?;
        writeln!(f, "Receipt")?;
        writeln!(f, "Date: {}", self.issued_at.format(TIMESTAMP_FORMAT))?;
        writeln!(f)?;
        writeln!(f, "Items Purchased:")?;
        for line in &self.lines {
            writeln!(
                f,
                "{} x {} = {}",
                line.name,
                line.quantity,
                Price::local(line.line_total)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total Cost: {}", Price::local(self.total))?;
        writeln!(f)?;
        write!(f, "Thank you for shopping with us!")
    }
}
