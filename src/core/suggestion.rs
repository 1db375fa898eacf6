//! Prefix search over the master ingredient table
//!
//! The suggestion engine answers "what could the cashier be typing?" with a
//! case-insensitive prefix match. Results keep master table order.

use crate::core::catalog_store::CatalogStore;
use crate::types::MasterIngredient;

/// Text shown in an empty search box. Typing it verbatim suggests nothing.
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Read-only search over the master ingredient table
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    master: Vec<MasterIngredient>,
    /// Lower-cased names, parallel to `master`
    folded: Vec<String>,
}

impl SuggestionEngine {
    /// Build an engine over the given master table, preserving its order
    pub fn new(master: Vec<MasterIngredient>) -> Self {
        let folded = master.iter().map(|m| m.name.to_lowercase()).collect();
        SuggestionEngine { master, folded }
    }

    /// Names whose lower-cased form starts with the trimmed, lower-cased query
    ///
    /// Empty input and the search placeholder yield no suggestions.
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() || needle == SEARCH_PLACEHOLDER.to_lowercase() {
            return Vec::new();
        }

        self.master
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| folded.starts_with(&needle))
            .map(|(ingredient, _)| ingredient.name.as_str())
            .collect()
    }

    /// Look up a master ingredient by exact name
    pub fn ingredient(&self, name: &str) -> Option<&MasterIngredient> {
        self.master.iter().find(|m| m.name == name)
    }

    /// The whole master table in order
    pub fn master(&self) -> &[MasterIngredient] {
        &self.master
    }

    /// Accept a suggestion into the catalog
    ///
    /// Adds the ingredient at its reference price unless the catalog already
    /// holds that name. Names outside the master table are ignored.
    ///
    /// # Returns
    ///
    /// `true` if a new catalog entry was created
    pub fn accept(&self, name: &str, catalog: &mut CatalogStore) -> bool {
        if catalog.contains(name) {
            return false;
        }
        match self.ingredient(name) {
            Some(ingredient) => {
                catalog.add_item(&ingredient.name, ingredient.reference_price);
                true
            }
            None => {
                log::debug!("Ignoring suggestion '{}': not in master table", name);
                false
            }
        }
    }
}
