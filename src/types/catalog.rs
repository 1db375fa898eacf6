//! Catalog-related types for the grocery billing desk
//!
//! This module defines the items offered for sale, the reference ingredients
//! the suggestion box searches, and the per-item row state a cashier edits
//! before generating a bill.

use rust_decimal::Decimal;
use serde::Deserialize;

/// An item currently offered for selection
///
/// The name is the unique key of the catalog. Entries are created at startup
/// from the seed list, or on demand when a custom item is added or a
/// suggestion is accepted. They are never removed during a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    /// Display name, unique within the catalog
    pub name: String,

    /// Unit price the row is initialised with
    #[serde(rename = "price")]
    pub unit_price: Decimal,
}

impl CatalogEntry {
    /// Create a new catalog entry
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        CatalogEntry {
            name: name.into(),
            unit_price,
        }
    }
}

/// A known ingredient in the master lookup table
///
/// The master table is read-only and defines the universe the suggestion
/// engine searches. It is a superset of the initial catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MasterIngredient {
    /// Ingredient name, unique within the master table
    pub name: String,

    /// Price used when the ingredient is pulled into the catalog
    #[serde(rename = "price")]
    pub reference_price: Decimal,
}

impl MasterIngredient {
    /// Create a new master ingredient
    pub fn new(name: impl Into<String>, reference_price: Decimal) -> Self {
        MasterIngredient {
            name: name.into(),
            reference_price,
        }
    }
}

/// Mutable per-item state edited before checkout
///
/// One `RowState` exists for every [`CatalogEntry`], created at the same time.
/// Quantity and price are free-form: zero, negative and arbitrary prices are
/// all accepted and flow straight into the bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    /// Name of the catalog entry this row belongs to
    pub item_name: String,

    /// Whether the item is ticked for the next bill
    pub selected: bool,

    /// Quantity as entered
    pub quantity: i64,

    /// Price used at sale time, starts at the catalog price
    pub editable_price: Decimal,
}

impl RowState {
    /// Create a fresh row: unselected, quantity 1, catalog price
    pub fn new(item_name: impl Into<String>, price: Decimal) -> Self {
        RowState {
            item_name: item_name.into(),
            selected: false,
            quantity: 1,
            editable_price: price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_defaults() {
        let row = RowState::new("Milk", Decimal::from(45));

        assert_eq!(row.item_name, "Milk");
        assert!(!row.selected);
        assert_eq!(row.quantity, 1);
        assert_eq!(row.editable_price, Decimal::from(45));
    }

    #[test]
    fn test_catalog_entry_deserializes_price_field() {
        let entry: CatalogEntry = toml::from_str("name = \"Milk\"\nprice = \"45.50\"").unwrap();
        assert_eq!(entry, CatalogEntry::new("Milk", Decimal::new(4550, 2)));
    }
}
