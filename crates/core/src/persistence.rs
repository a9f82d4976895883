//! Persistence gateway: one JSON document holding the catalog and the cart.
//!
//! # File format
//!
//! ```json
//! {
//!   "data": { "Mouse": { "price": 450.25, "quantity": 5 } },
//!   "cart": { "Mouse": 2 }
//! }
//! ```
//!
//! Prices are written with every significant digit the [`Decimal`](rust_decimal::Decimal) carries,
//! so anything that can be saved loads back unchanged.
//!
//! A missing file loads as empty stores. A file that cannot be parsed is
//! reported as [`PersistenceError::Corrupt`] and left exactly as it is on disk.
//! Saves go to a temporary file in the same directory which is then renamed
//! over the target, so an interrupted save never leaves a truncated document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;

/// Default data file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Errors that can occur while loading or saving the data file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file exists but does not hold a valid document.
    #[error("corrupted data file {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// Reading, writing or renaming failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The stores could not be encoded.
    #[error("failed to encode data file: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Both stores, as read from or written to the data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "data", default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub cart: Cart,
}

/// Borrowed view used for saving without cloning the stores.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    data: &'a Catalog,
    cart: &'a Cart,
}

/// Handle to the data file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    /// Create a handle. Nothing is read until [`DataFile::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read both stores from disk.
    ///
    /// A missing file yields empty stores. Missing `data` or `cart` keys
    /// default to empty.
    ///
    /// # Errors
    ///
    /// - [`PersistenceError::Corrupt`] if the content is not a valid document
    ///   (not UTF-8, bad JSON, wrong types, negative prices or zero cart
    ///   quantities)
    /// - [`PersistenceError::Io`] if the file exists but cannot be read
    pub fn load(&self) -> Result<Snapshot, PersistenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No data file, starting empty");
                return Ok(Snapshot::default());
            }
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                return Err(self.corrupt(err.to_string()));
            }
            Err(source) => {
                return Err(PersistenceError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|err| self.corrupt(err.to_string()))?;

        if let Some((name, price)) = snapshot.catalog.first_negative_price() {
            return Err(self.corrupt(format!("item {name} has negative price {price}")));
        }
        if let Some(name) = snapshot.cart.first_empty_line() {
            return Err(self.corrupt(format!("cart line {name} has zero quantity")));
        }

        info!(
            path = %self.path.display(),
            items = snapshot.catalog.len(),
            cart_lines = snapshot.cart.len(),
            "Data file loaded"
        );
        Ok(snapshot)
    }

    /// Load, falling back to empty stores on any failure.
    ///
    /// The error, if any, is returned alongside so the caller can tell the
    /// user. The file on disk is not modified.
    pub fn load_or_recover(&self) -> (Snapshot, Option<PersistenceError>) {
        match self.load() {
            Ok(snapshot) => (snapshot, None),
            Err(err) => {
                warn!(error = %err, "Starting with empty data");
                (Snapshot::default(), Some(err))
            }
        }
    }

    /// Write both stores, replacing the previous file atomically.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Io`] if the temporary file cannot be
    /// created, written or renamed into place.
    pub fn save(&self, catalog: &Catalog, cart: &Cart) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(&SnapshotRef {
            data: catalog,
            cart,
        })?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|source| self.io(source))?;
        temp.write_all(&bytes).map_err(|source| self.io(source))?;
        temp.as_file().sync_all().map_err(|source| self.io(source))?;
        temp.persist(&self.path)
            .map_err(|err| self.io(err.error))?;

        info!(
            path = %self.path.display(),
            items = catalog.len(),
            cart_lines = cart.len(),
            "Data file saved"
        );
        Ok(())
    }

    fn corrupt(&self, reason: String) -> PersistenceError {
        PersistenceError::Corrupt {
            path: self.path.clone(),
            reason,
        }
    }

    fn io(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
