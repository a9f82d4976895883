//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept as [`Decimal`] so that line totals and cart totals add up
//! exactly. Formatting follows the receipt convention: currency symbol, two
//! decimal places and comma thousands separators (`₱1,234,567.89`).

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::StoreError;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., pesos, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the shop's default currency.
    #[must_use]
    pub fn local(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::default())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        write!(
            f,
            "{sign}{}{}.{cents}",
            self.currency_code.symbol(),
            group_thousands(whole)
        )
    }
}

/// Insert a comma between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurrencyCode {
    /// Philippine peso.
    #[default]
    PHP,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::PHP => "\u{20b1}",
        }
    }
}

/// Parse a user-entered price.
///
/// Surrounding whitespace is ignored. Accepts plain decimal notation
/// (`450`, `1299.50`).
///
/// # Errors
///
/// Returns [`StoreError::InvalidValue`] if the text is not a number or the
/// number is negative.
pub fn parse_price(input: &str) -> Result<Decimal, StoreError> {
    let trimmed = input.trim();
    let amount: Decimal = trimmed
        .parse()
        .map_err(|_| StoreError::InvalidValue(format!("not a valid price: {trimmed:?}")))?;
    ensure_non_negative_price(amount)?;
    Ok(amount)
}

/// `unit_price * quantity`, failing instead of overflowing.
///
/// # Errors
///
/// Returns [`StoreError::InvalidValue`] if the product does not fit in a
/// [`Decimal`].
pub fn line_total(unit_price: Decimal, quantity: u32) -> Result<Decimal, StoreError> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| {
            StoreError::InvalidValue(format!(
                "{quantity} x {unit_price} is too large to total"
            ))
        })
}

/// Reject negative prices.
///
/// # Errors
///
/// Returns [`StoreError::InvalidValue`] if `amount` is below zero.
pub fn ensure_non_negative_price(amount: Decimal) -> Result<(), StoreError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(StoreError::InvalidValue(format!(
            "price must not be negative, got {amount}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::local(dec!(1234567.891)).to_string(), "\u{20b1}1,234,567.89");
        assert_eq!(Price::local(dec!(1000)).to_string(), "\u{20b1}1,000.00");
        assert_eq!(Price::local(dec!(999.9)).to_string(), "\u{20b1}999.90");
    }

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Price::local(Decimal::ZERO).to_string(), "\u{20b1}0.00");
        assert_eq!(Price::local(dec!(0.5)).to_string(), "\u{20b1}0.50");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Price::local(dec!(2.345)).to_string(), "\u{20b1}2.35");
        assert_eq!(Price::local(dec!(2.344)).to_string(), "\u{20b1}2.34");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::local(dec!(-1500)).to_string(), "-\u{20b1}1,500.00");
    }

    #[test]
    fn test_display_explicit_currency() {
        let price = Price::new(dec!(19.99), CurrencyCode::PHP);
        assert_eq!(price.to_string(), "\u{20b1}19.99");
    }

    #[test]
    fn test_display_extreme_amount() {
        assert_eq!(
            Price::local(Decimal::MAX).to_string(),
            "\u{20b1}79,228,162,514,264,337,593,543,950,335.00"
        );
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(dec!(199.75), 2).unwrap(), dec!(399.50));
        assert_eq!(line_total(Decimal::MAX, 1).unwrap(), Decimal::MAX);
    }

    #[test]
    fn test_line_total_overflow() {
        assert!(matches!(
            line_total(dec!(10000000000000000000000000), 10_000),
            Err(StoreError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("450").unwrap(), dec!(450));
        assert_eq!(parse_price(" 1299.50 ").unwrap(), dec!(1299.50));
        assert_eq!(parse_price("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(matches!(parse_price("abc"), Err(StoreError::InvalidValue(_))));
        assert!(matches!(parse_price(""), Err(StoreError::InvalidValue(_))));
    }

    #[test]
    fn test_parse_price_rejects_negative() {
        assert!(matches!(parse_price("-1"), Err(StoreError::InvalidValue(_))));
    }
}
