//! Catalog and row management module
//!
//! This module provides the `CatalogStore` struct which owns every catalog
//! entry together with its row state.
//!
//! The CatalogStore is responsible for:
//! - Seeding the catalog at startup
//! - Adding items (seeded, custom or accepted suggestions)
//! - Keeping exactly one row per catalog entry, in creation order
//! - Exposing explicit setters for selection, quantity and price

use crate::types::{BillingError, CatalogEntry, RowState};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

/// Owns the catalog and the row registry
///
/// Entries and rows are stored in parallel vectors so that iteration follows
/// creation order. The name index maps each item name to its position.
#[derive(Debug, Default)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
    rows: Vec<RowState>,
    index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        CatalogStore::default()
    }

    /// Create a catalog seeded with the given entries, in order
    pub fn with_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut store = CatalogStore::new();
        for entry in entries {
            store.add_item(&entry.name, entry.unit_price);
        }
        store
    }

    /// Add an item to the catalog with a fresh row
    ///
    /// The new row is unselected with quantity 1 and the given price. If the
    /// name is already present its price is replaced and its row is reset in
    /// place, so the catalog never holds two rows for one name.
    ///
    /// # Arguments
    ///
    /// * `name` - Item name, used verbatim as the catalog key
    /// * `price` - Unit price for the entry and initial row price
    pub fn add_item(&mut self, name: &str, price: Decimal) {
        match self.index.get(name) {
            Some(&pos) => {
                log::debug!("Resetting catalog item '{}' at price {}", name, price);
                self.entries[pos].unit_price = price;
                self.rows[pos] = RowState::new(name, price);
            }
            None => {
                log::debug!("Adding catalog item '{}' at price {}", name, price);
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(CatalogEntry::new(name, price));
                self.rows.push(RowState::new(name, price));
            }
        }
    }

    /// Add a user-typed custom item
    ///
    /// The name is trimmed and the price text parsed with [`parse_price`].
    /// An empty name or unparseable price leaves the catalog unchanged and is
    /// not reported to the caller beyond the `false` return.
    ///
    /// # Returns
    ///
    /// `true` if the item was added (or reset), `false` if the input was ignored
    pub fn add_custom_item(&mut self, raw_name: &str, raw_price: &str) -> bool {
        let name = raw_name.trim();
        if name.is_empty() {
            log::debug!("Ignoring custom item with empty name");
            return false;
        }

        let Some(price) = parse_price(raw_price) else {
            log::debug!("Ignoring custom item '{}': bad price '{}'", name, raw_price);
            return false;
        };

        self.add_item(name, price);
        true
    }

    /// Check whether an item is in the catalog
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Catalog price of an item
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.index.get(name).map(|&pos| self.entries[pos].unit_price)
    }

    /// Row state of an item
    pub fn row(&self, name: &str) -> Option<&RowState> {
        self.index.get(name).map(|&pos| &self.rows[pos])
    }

    /// All catalog entries in creation order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All rows in creation order
    pub fn rows(&self) -> &[RowState] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tick or untick an item for the next bill
    ///
    /// # Errors
    ///
    /// Returns `BillingError::UnknownItem` if the item is not in the catalog.
    pub fn set_selected(&mut self, name: &str, selected: bool) -> Result<(), BillingError> {
        self.update_row(name, |row| row.selected = selected)
    }

    /// Set the quantity of an item. Any integer is accepted.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::UnknownItem` if the item is not in the catalog.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> Result<(), BillingError> {
        self.update_row(name, |row| row.quantity = quantity)
    }

    /// Set the sale price of an item without touching its catalog price
    ///
    /// # Errors
    ///
    /// Returns `BillingError::UnknownItem` if the item is not in the catalog.
    pub fn set_price(&mut self, name: &str, price: Decimal) -> Result<(), BillingError> {
        self.update_row(name, |row| row.editable_price = price)
    }

    /// Untick every row, leaving quantities and prices alone
    pub fn clear_selection(&mut self) {
        for row in &mut self.rows {
            row.selected = false;
        }
    }

    fn update_row<F>(&mut self, name: &str, f: F) -> Result<(), BillingError>
    where
        F: FnOnce(&mut RowState),
    {
        let pos = *self
            .index
            .get(name)
            .ok_or_else(|| BillingError::unknown_item(name))?;
        f(&mut self.rows[pos]);
        Ok(())
    }
}

/// Parse user-entered price text
///
/// Accepts plain decimals (`"95"`, `"-2.50"`) and scientific notation
/// (`"1e3"`) after trimming. Sign is not restricted.
pub fn parse_price(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
