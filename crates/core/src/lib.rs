//! PC Hub Core - Inventory, cart and checkout library.
//!
//! This crate holds everything the shop counter needs apart from the screen:
//! - [`catalog`] - Products and services with price and stock quantity
//! - [`cart`] - Pending selections with requested quantities
//! - [`checkout`] - Reconciles the cart against the catalog and builds a receipt
//! - [`persistence`] - Loads and saves both stores as one JSON document
//!
//! # Architecture
//!
//! The catalog and the cart are independent values owned by the caller and
//! passed by reference. Only [`persistence`] touches the filesystem; the rest
//! of the crate is pure in-memory state transitions.
//!
//! # Example
//!
//! ```
//! use pchub_core::{Cart, Catalog, CheckoutOutcome, checkout};
//! use rust_decimal::Decimal;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_item("Mouse", Decimal::new(450, 0), 5).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_to_cart("Mouse", 2).unwrap();
//!
//! let CheckoutOutcome::Completed(summary) =
//!     checkout::checkout(&mut catalog, &mut cart, "PC HUB").unwrap()
//! else {
//!     panic!("cart was not empty");
//! };
//! assert_eq!(summary.receipt.total, Decimal::new(900, 0));
//! assert_eq!(catalog.get("Mouse").unwrap().quantity, 3);
//! assert!(cart.is_empty());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod persistence;
pub mod receipt;
pub mod types;

pub use cart::Cart;
pub use catalog::{Catalog, CatalogEntry};
pub use checkout::{CheckoutOutcome, CheckoutSummary, StockWarning};
pub use error::StoreError;
pub use persistence::{DataFile, PersistenceError, Snapshot};
pub use receipt::{Receipt, ReceiptLine};
pub use types::*;
