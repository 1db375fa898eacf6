//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `catalog`: Catalog entries, master ingredients and row state
//! - `bill`: Bill dates, lines, outcomes and purchase records
//! - `error`: Error types for the billing desk

pub mod bill;
pub mod catalog;
pub mod error;

pub use bill::{Bill, BillDate, BillLine, BillOutcome, PurchaseRecord, BILL_DATE_FORMAT};
pub use catalog::{CatalogEntry, MasterIngredient, RowState};
pub use error::BillingError;
