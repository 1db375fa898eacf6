//! Grocery Billing Library
//! # Overview
//!
//! This library provides the core of a grocery point-of-sale desk: a catalog
//! of items with editable rows, prefix suggestions from a master ingredient
//! table, bill generation, per-date receipt history and purchase recording.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (CatalogEntry, RowState, Bill, etc.)
//! - [`cli`] - CLI arguments parsing, one-shot commands and the interactive session
//! - [`config`] - Optional TOML configuration
//! - [`core`] - Business logic components:
//!   - [`core::catalog_store`] - Catalog entries and their row state
//!   - [`core::suggestion`] - Prefix search over the master table
//!   - [`core::composer`] - Bill composition from selected rows
//!   - [`core::desk`] - Checkout orchestration
//! - [`io`] - Receipt format and per-date history logs
//! - [`sink`] - Pluggable purchase storage (SQLite, CSV, memory)
//!
//! # Checkout
//!
//! A bill contains every selected row in catalog order, priced at
//! `quantity × editable_price`. When nothing is selected or the total is zero
//! the desk reports an empty bill and writes nothing. Otherwise:
//!
//! - The receipt is appended to `billing_history/<date>/bill.txt`
//! - One purchase record per line is sent to the configured sink

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod sink;
pub mod types;

pub use config::Config;
pub use crate::core::{BillComposer, BillingDesk, CatalogStore, PurchaseSink, SuggestionEngine};
pub use io::HistoryWriter;
pub use sink::{create_sink, CsvSink, MemorySink, SinkKind, SqliteSink};
pub use types::{
    Bill, BillDate, BillLine, BillOutcome, BillingError, CatalogEntry, MasterIngredient,
    PurchaseRecord, RowState,
};
