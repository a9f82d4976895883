//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PCHUB_DATA_FILE` - Path of the JSON data file (default: data.json)
//! - `PCHUB_STORE_NAME` - Store name printed on receipts (default: PC HUB MAGALANG)
//! - `RUST_LOG` - Log filter (default: `pchub_core=warn,pchub_cli=warn`)

use std::path::PathBuf;

use pchub_core::persistence::DEFAULT_DATA_FILE;
use pchub_core::receipt::DEFAULT_STORE_NAME;
use thiserror::Error;

const DATA_FILE_VAR: &str = "PCHUB_DATA_FILE";
const STORE_NAME_VAR: &str = "PCHUB_STORE_NAME";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the catalog and cart are stored
    pub data_file: PathBuf,
    /// Header line of every receipt
    pub store_name: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_file = non_blank(&lookup, DATA_FILE_VAR)?
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from);
        let store_name = non_blank(&lookup, STORE_NAME_VAR)?
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

        Ok(Self {
            data_file,
            store_name,
        })
    }

    /// Replace the data file path when one was given on the command line.
    #[must_use]
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }
}

/// Get an optional variable, rejecting values that are set but empty.
fn non_blank(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<String>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(Some(value.trim().to_string())),
    }
}
