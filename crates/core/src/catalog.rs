//! Catalog store: the products and services the shop sells.
//!
//! Entries are keyed by [`ItemName`] and kept in insertion order, which is
//! also the order used for search results and the data file.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::types::{ItemName, Price, ensure_non_negative_price, stock_quantity};

/// Price and stock level of one catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unit price in the shop currency. Never negative.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Units in stock.
    pub quantity: u32,
}

impl CatalogEntry {
    /// Unit price ready for display.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::local(self.price)
    }
}

/// In-memory catalog of items, keyed by unique name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: IndexMap<ItemName, CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new item.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidValue`] if the name is empty or the price or
    ///   quantity is negative
    /// - [`StoreError::DuplicateName`] if an item with this name exists
    pub fn add_item(&mut self, name: &str, price: Decimal, quantity: i64) -> Result<()> {
        let name = ItemName::parse(name)?;
        if self.items.contains_key(&name) {
            return Err(StoreError::DuplicateName(name.into_inner()));
        }
        let entry = validated_entry(price, quantity)?;

        debug!(item = %name, price = %entry.price, quantity = entry.quantity, "Catalog item added");
        self.items.insert(name, entry);
        Ok(())
    }

    /// Replace an item's name, price and quantity in one step.
    ///
    /// The old entry is removed and the new one appended, so an edited item
    /// moves to the end of the catalog even when its name is unchanged.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidValue`] if the new name is empty or the price or
    ///   quantity is negative
    /// - [`StoreError::NotFound`] if `old_name` is not in the catalog
    /// - [`StoreError::DuplicateName`] if `new_name` belongs to a different
    ///   existing item
    pub fn rename_or_update(
        &mut self,
        old_name: &str,
        new_name: &str,
        price: Decimal,
        quantity: i64,
    ) -> Result<()> {
        let entry = validated_entry(price, quantity)?;
        let new_name = ItemName::parse(new_name)?;

        if !self.items.contains_key(old_name) {
            return Err(StoreError::NotFound(old_name.to_owned()));
        }
        if new_name.as_str() != old_name && self.items.contains_key(&new_name) {
            return Err(StoreError::DuplicateName(new_name.into_inner()));
        }

        self.items.shift_remove(old_name);
        debug!(from = old_name, to = %new_name, price = %entry.price, quantity = entry.quantity, "Catalog item updated");
        self.items.insert(new_name, entry);
        Ok(())
    }

    /// Remove an item.
    ///
    /// Cart lines that reference the item are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the item does not exist.
    pub fn delete_item(&mut self, name: &str) -> Result<CatalogEntry> {
        let entry = self
            .items
            .shift_remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))?;
        debug!(item = name, "Catalog item deleted");
        Ok(entry)
    }

    /// Items whose name contains `query`, ignoring case.
    ///
    /// The query is trimmed first. An empty query matches nothing rather than
    /// everything.
    pub fn search<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = (&'a ItemName, &'a CatalogEntry)> + use<'a> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(move |(name, _)| !needle.is_empty() && name.contains_lowercase(&needle))
    }

    /// Look up an item by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.items.get(name)
    }

    /// Current unit price of an item.
    #[must_use]
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.items.get(name).map(|entry| entry.price)
    }

    /// Whether an item with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// All items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, &CatalogEntry)> {
        self.items.iter()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Overwrite the stock level of an existing item. Unknown names are ignored.
    pub(crate) fn set_stock(&mut self, name: &str, quantity: u32) {
        if let Some(entry) = self.items.get_mut(name) {
            entry.quantity = quantity;
        }
    }

    /// First item with a negative price, if any. Only reachable through
    /// deserialization, which does not run the `add_item` checks.
    pub(crate) fn first_negative_price(&self) -> Option<(&ItemName, Decimal)> {
        self.items
            .iter()
            .find(|(_, entry)| ensure_non_negative_price(entry.price).is_err())
            .map(|(name, entry)| (name, entry.price))
    }
}

fn validated_entry(price: Decimal, quantity: i64) -> Result<CatalogEntry> {
    ensure_non_negative_price(price)?;
    let quantity = stock_quantity(quantity)?;
    Ok(CatalogEntry { price, quantity })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_item("Gaming Mouse", dec!(450), 5).unwrap();
        catalog.add_item("Mechanical Keyboard", dec!(2499.50), 2).unwrap();
        catalog.add_item("Laptop Repair", dec!(800), 0).unwrap();
        catalog
    }

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[test]
    fn test_add_item() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        let entry = catalog.get("Gaming Mouse").unwrap();
        assert_eq!(entry.price, dec!(450));
        assert_eq!(entry.quantity, 5);
    }

    #[test]
    fn test_add_duplicate_leaves_catalog_unchanged() {
        let mut catalog = sample();
        let before = catalog.clone();
        let err = catalog.add_item("Gaming Mouse", dec!(1), 1).unwrap_err();
        assert_eq!(err, StoreError::DuplicateName("Gaming Mouse".to_owned()));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_add_duplicate_after_trim() {
        let mut catalog = sample();
        assert!(matches!(
            catalog.add_item("  Gaming Mouse ", dec!(1), 1),
            Err(StoreError::DuplicateName(_))
        ));
    }

    #[test]
    fn test_add_rejects_negative_values() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.add_item("Cable", dec!(-0.01), 1),
            Err(StoreError::InvalidValue(_))
        ));
        assert!(matches!(
            catalog.add_item("Cable", dec!(10), -1),
            Err(StoreError::InvalidValue(_))
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.add_item("", dec!(10), 1),
            Err(StoreError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_rename_moves_entry_to_end() {
        let mut catalog = sample();
        catalog
            .rename_or_update("Gaming Mouse", "Wireless Mouse", dec!(500), 4)
            .unwrap();
        assert_eq!(
            names(&catalog),
            ["Mechanical Keyboard", "Laptop Repair", "Wireless Mouse"]
        );
        assert!(catalog.get("Gaming Mouse").is_none());
        let entry = catalog.get("Wireless Mouse").unwrap();
        assert_eq!(entry.price, dec!(500));
        assert_eq!(entry.quantity, 4);
    }

    #[test]
    fn test_update_same_name() {
        let mut catalog = sample();
        catalog
            .rename_or_update("Laptop Repair", "Laptop Repair", dec!(900), 1)
            .unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.price_of("Laptop Repair"), Some(dec!(900)));
    }

    #[test]
    fn test_rename_onto_other_item_is_rejected() {
        let mut catalog = sample();
        let before = catalog.clone();
        let err = catalog
            .rename_or_update("Gaming Mouse", "Laptop Repair", dec!(1), 1)
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateName("Laptop Repair".to_owned()));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_rename_missing_item() {
        let mut catalog = sample();
        assert_eq!(
            catalog.rename_or_update("Monitor", "Monitor 24in", dec!(1), 1),
            Err(StoreError::NotFound("Monitor".to_owned()))
        );
    }

    #[test]
    fn test_rename_rejects_negative_values() {
        let mut catalog = sample();
        let before = catalog.clone();
        assert!(matches!(
            catalog.rename_or_update("Gaming Mouse", "Gaming Mouse", dec!(-5), 1),
            Err(StoreError::InvalidValue(_))
        ));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_delete_item() {
        let mut catalog = sample();
        let removed = catalog.delete_item("Mechanical Keyboard").unwrap();
        assert_eq!(removed.quantity, 2);
        assert_eq!(names(&catalog), ["Gaming Mouse", "Laptop Repair"]);
        assert_eq!(
            catalog.delete_item("Mechanical Keyboard"),
            Err(StoreError::NotFound("Mechanical Keyboard".to_owned()))
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample();
        let hits: Vec<_> = catalog.search("MOUSE").map(|(n, _)| n.as_str()).collect();
        assert_eq!(hits, ["Gaming Mouse"]);

        let hits: Vec<_> = catalog.search("a").map(|(n, _)| n.as_str()).collect();
        assert_eq!(hits, ["Gaming Mouse", "Mechanical Keyboard", "Laptop Repair"]);
    }

    #[test]
    fn test_search_empty_query_matches_nothing() {
        let catalog = sample();
        assert_eq!(catalog.search("").count(), 0);
        assert_eq!(catalog.search("   ").count(), 0);
    }

    #[test]
    fn test_search_returns_stored_values() {
        let catalog = sample();
        let (_, entry) = catalog.search("keyb").next().unwrap();
        assert_eq!(entry.price, dec!(2499.50));
        assert_eq!(entry.quantity, 2);
    }

    #[test]
    fn test_every_substring_finds_item() {
        let mut catalog = Catalog::new();
        let name = "SSD 512GB";
        catalog.add_item(name, dec!(2100), 7).unwrap();
        for start in 0..name.len() {
            for end in start + 1..=name.len() {
                let needle = &name[start..end];
                if needle.trim().is_empty() {
                    continue;
                }
                let (found, entry) = catalog.search(needle).next().unwrap();
                assert_eq!(found.as_str(), name);
                assert_eq!(entry.quantity, 7);
            }
        }
    }

    #[test]
    fn test_set_stock_ignores_unknown() {
        let mut catalog = sample();
        catalog.set_stock("Gaming Mouse", 1);
        catalog.set_stock("Unknown", 9);
        assert_eq!(catalog.get("Gaming Mouse").unwrap().quantity, 1);
        assert_eq!(catalog.len(), 3);
    }
}
