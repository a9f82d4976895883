//! One CLI invocation's worth of state.
//!
//! A session loads both stores at start, lets one command work on them, and
//! writes them back on close only if something changed. Read-only commands
//! therefore never rewrite the data file, and a corrupt file stays on disk
//! untouched until a command actually modifies the stores.

use std::io::Write;

use pchub_core::{Cart, Catalog, DataFile, Snapshot};

use crate::config::AppConfig;
use crate::error::Result;

/// Loaded stores plus the file they came from.
pub struct Session {
    pub catalog: Catalog,
    pub cart: Cart,
    pub store_name: String,
    data_file: DataFile,
    dirty: bool,
}

impl Session {
    /// Load the data file named in `config`.
    ///
    /// A corrupt or unreadable file is reported on `out` and the session
    /// starts with empty stores.
    pub fn open(config: &AppConfig, out: &mut impl Write) -> Result<Self> {
        let data_file = DataFile::new(config.data_file.clone());
        let (Snapshot { catalog, cart }, err) = data_file.load_or_recover();
        if let Some(err) = err {
            writeln!(out, "Error: {err}. Starting with empty data.")?;
        }

        Ok(Self {
            catalog,
            cart,
            store_name: config.store_name.clone(),
            data_file,
            dirty: false,
        })
    }

    /// Record that the stores changed and must be saved on close.
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Save the stores if they changed.
    pub fn close(self) -> Result<()> {
        if self.dirty {
            self.data_file.save(&self.catalog, &self.cart)?;
        } else {
            tracing::debug!("No changes, data file left as is");
        }
        Ok(())
    }
}
