//! Item name type.

use core::fmt;
use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The name of a catalog item or service, used as its key.
///
/// ## Constraints
///
/// - Surrounding whitespace is trimmed
/// - Must not be empty after trimming
/// - Comparison is exact (case-sensitive), as in the data file
///
/// ## Examples
///
/// ```
/// use pchub_core::ItemName;
///
/// assert_eq!(ItemName::parse("  Mouse ").unwrap().as_str(), "Mouse");
/// assert!(ItemName::parse("").is_err());
/// assert!(ItemName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Parse an `ItemName` from user input.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidValue`] if the input is empty or only
    /// whitespace.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StoreError::InvalidValue(
                "item name cannot be empty".to_owned(),
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ItemName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive substring match against an already lowercased needle.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(needle)
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ItemName {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
