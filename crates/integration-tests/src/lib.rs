//! Integration tests for PC Hub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pchub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `persistence` - Data file round trips and recovery from bad files
//! - `checkout_flow` - Full sessions: load, shop, check out, save, reload
//!
//! Every test gets its own temporary directory through [`TestContext`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use pchub_core::{Catalog, DataFile};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// A data file inside a temporary directory that is removed on drop.
pub struct TestContext {
    dir: TempDir,
    pub data_file: DataFile,
}

impl TestContext {
    /// Create a fresh directory with a not-yet-existing `data.json`.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = DataFile::new(dir.path().join("data.json"));
        Self { dir, data_file }
    }

    /// The temporary directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed receipt timestamp: 2026-10-18 15:30:00.
///
/// # Panics
///
/// Never in practice; the date is a constant.
#[must_use]
#[allow(clippy::expect_used)]
pub fn receipt_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(15, 30, 0))
        .expect("valid timestamp")
}

/// A small shop catalog: a mouse, a keyboard and a repair service.
///
/// # Panics
///
/// Never in practice; the items are valid and distinct.
#[must_use]
#[allow(clippy::expect_used)]
pub fn shop_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add_item("Gaming Mouse", Decimal::new(450, 0), 5)
        .expect("valid item");
    catalog
        .add_item("Mechanical Keyboard", Decimal::new(249_950, 2), 2)
        .expect("valid item");
    catalog
        .add_item("Laptop Repair", Decimal::new(800, 0), 0)
        .expect("valid item");
    catalog
}
