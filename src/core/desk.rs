//! Billing desk
//!
//! This module provides the `BillingDesk` that owns all billing state and
//! coordinates the catalog, suggestion engine, bill composer, history writer
//! and purchase sink. Every user action maps to one method here.
//!
//! The desk enforces the checkout rules:
//! - An empty bill (nothing selected, or a zero total) performs no writes
//! - A generated bill is appended to history, then every line is sent to the sink
//! - The first storage failure aborts the checkout; nothing is rolled back

use crate::config::Config;
use crate::core::catalog_store::CatalogStore;
use crate::core::composer::BillComposer;
use crate::core::suggestion::SuggestionEngine;
use crate::core::traits::PurchaseSink;
use crate::io::history::HistoryWriter;
use crate::io::receipt::render_receipt;
use crate::sink::create_sink;
use crate::types::{BillDate, BillOutcome, BillingError, CatalogEntry, MasterIngredient};

/// The billing desk
///
/// Generic over its purchase sink so tests can inspect what was recorded. The
/// binary uses the boxed sink chosen by configuration.
pub struct BillingDesk<S = Box<dyn PurchaseSink>> {
    catalog: CatalogStore,
    suggestions: SuggestionEngine,
    composer: BillComposer,
    history: HistoryWriter,
    sink: S,
}

impl BillingDesk {
    /// Open a desk as described by the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured purchase sink cannot be created.
    pub fn open(config: &Config) -> Result<Self, BillingError> {
        let sink = create_sink(config.sink, &config.data_dir)?;
        Ok(BillingDesk::new(
            config.catalog.clone(),
            config.master.clone(),
            HistoryWriter::new(config.history_dir()),
            sink,
        ))
    }
}

impl<S: PurchaseSink> BillingDesk<S> {
    /// Create a desk from explicit parts
    ///
    /// # Arguments
    ///
    /// * `catalog` - Seed catalog, in display order
    /// * `master` - Master ingredient table, in suggestion order
    /// * `history` - Where receipts are logged
    /// * `sink` - Where sold lines are recorded
    pub fn new(
        catalog: Vec<CatalogEntry>,
        master: Vec<MasterIngredient>,
        history: HistoryWriter,
        sink: S,
    ) -> Self {
        BillingDesk {
            catalog: CatalogStore::with_entries(catalog),
            suggestions: SuggestionEngine::new(master),
            composer: BillComposer,
            history,
            sink,
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Mutable catalog access for row edits
    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    pub fn history(&self) -> &HistoryWriter {
        &self.history
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Master names matching what the cashier typed
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        self.suggestions.suggest(query)
    }

    /// Pull a suggested ingredient into the catalog
    ///
    /// Returns `true` if a new catalog entry was created.
    pub fn accept_suggestion(&mut self, name: &str) -> bool {
        self.suggestions.accept(name, &mut self.catalog)
    }

    /// Add a custom item from raw form text; invalid input is ignored
    ///
    /// Returns `true` if the item was added.
    pub fn add_custom_item(&mut self, raw_name: &str, raw_price: &str) -> bool {
        self.catalog.add_custom_item(raw_name, raw_price)
    }

    /// Generate, log and record a bill for the current selection
    ///
    /// On `BillOutcome::Empty` nothing is written. On success the receipt is
    /// appended to the history for `date`, then one purchase record per line
    /// is sent to the sink, in bill order.
    ///
    /// # Errors
    ///
    /// Returns an error if totals overflow, the history cannot be written, or
    /// the sink rejects a record. Writes that already happened are kept.
    pub fn generate_bill(&mut self, date: &BillDate) -> Result<BillOutcome, BillingError> {
        let outcome = self.composer.compose(&self.catalog, date)?;

        let BillOutcome::Generated(bill) = &outcome else {
            log::debug!("Nothing to bill for {}", date);
            return Ok(BillOutcome::Empty);
        };

        self.history.append_bill(&render_receipt(bill), date.as_str())?;
        for record in bill.purchase_records() {
            self.sink.record_purchase(&record)?;
        }

        log::info!(
            "Generated bill for {}: {} line(s), total {}",
            date,
            bill.lines.len(),
            bill.total
        );
        Ok(outcome)
    }

    /// Dates with logged bills, newest first
    pub fn list_history(&self) -> Result<Vec<String>, BillingError> {
        self.history.list_history()
    }
}
