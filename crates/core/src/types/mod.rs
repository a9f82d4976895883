//! Core types for PC Hub.
//!
//! This module provides validated wrappers and input parsing for the values
//! the stores accept: item names, prices and quantities.

pub mod name;
pub mod price;
pub mod quantity;

pub use name::ItemName;
pub use price::{CurrencyCode, Price, ensure_non_negative_price, line_total, parse_price};
pub use quantity::{cart_quantity, parse_quantity, stock_quantity};
