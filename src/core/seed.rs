//! Compiled-in seed data
//!
//! The starting catalog and the master ingredient table used when no
//! configuration file overrides them. Prices are whole rupees.

use crate::types::{CatalogEntry, MasterIngredient};
use rust_decimal::Decimal;

/// Items offered when the desk opens
pub const DEFAULT_CATALOG: &[(&str, i64)] = &[
    ("Milk", 45),
    ("Bread", 25),
    ("Eggs (Dozen)", 60),
    ("Rice (1kg)", 70),
    ("Sugar (1kg)", 50),
    ("Tea (250g)", 120),
    ("Oil (1L)", 150),
];

/// Reference ingredients searched by the suggestion box, A to Z
pub const DEFAULT_MASTER: &[(&str, i64)] = &[
    ("Apple", 120),
    ("Atta (1kg)", 55),
    ("Banana", 40),
    ("Bread", 25),
    ("Butter", 55),
    ("Biscuit", 30),
    ("Cheese", 80),
    ("Curd", 35),
    ("Coffee", 150),
    ("Dal (1kg)", 90),
    ("Eggs (Dozen)", 60),
    ("Flour", 45),
    ("Ghee", 220),
    ("Honey", 180),
    ("Ice Cream", 200),
    ("Jam", 95),
    ("Ketchup", 110),
    ("Lentils", 85),
    ("Milk", 45),
    ("Maida", 50),
    ("Noodles", 60),
    ("Oil (1L)", 150),
    ("Pasta", 75),
    ("Quinoa", 140),
    ("Rice (1kg)", 70),
    ("Salt", 20),
    ("Sugar (1kg)", 50),
    ("Tea (250g)", 120),
    ("Urad Dal", 95),
    ("Vinegar", 65),
    ("Wheat Flour", 55),
    ("Xanthan Gum", 250),
    ("Yeast", 70),
    ("Zucchini", 60),
];

/// The default seed catalog as owned entries
pub fn default_catalog() -> Vec<CatalogEntry> {
    DEFAULT_CATALOG
        .iter()
        .map(|&(name, price)| CatalogEntry::new(name, Decimal::from(price)))
        .collect()
}

/// The default master table as owned ingredients
pub fn default_master() -> Vec<MasterIngredient> {
    DEFAULT_MASTER
        .iter()
        .map(|&(name, price)| MasterIngredient::new(name, Decimal::from(price)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(default_catalog().len(), 7);
        assert_eq!(default_master().len(), 34);
    }

    #[test]
    fn test_master_names_are_unique() {
        let names: HashSet<_> = DEFAULT_MASTER.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), DEFAULT_MASTER.len());
    }

    #[test]
    fn test_master_is_superset_of_catalog_with_same_prices() {
        let master = default_master();
        for entry in default_catalog() {
            let found = master
                .iter()
                .find(|m| m.name == entry.name)
                .unwrap_or_else(|| panic!("{} missing from master table", entry.name));
            assert_eq!(found.reference_price, entry.unit_price);
        }
    }
}
