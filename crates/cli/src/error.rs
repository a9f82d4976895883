//! Unified error handling for the CLI.
//!
//! Every command returns `Result<(), CliError>`. Errors are reported once at
//! the top level and turned into a non-zero exit status; none of them panic.

use std::io;
use std::path::PathBuf;

use pchub_core::{PersistenceError, StoreError};
use thiserror::Error;

use crate::config::ConfigError;

/// Application-level error type for the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A catalog or cart operation was rejected.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Loading or saving the data file failed.
    #[error("{0}")]
    Persistence(#[from] PersistenceError),

    /// The receipt could not be written to the requested file.
    #[error("Failed to write receipt to {}: {source}", path.display())]
    ReceiptExport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// Result type alias for `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
