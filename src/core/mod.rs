//! Core business logic module
//!
//! This module contains the billing components:
//! - `traits` - Trait abstractions for the storage collaborators
//! - `seed` - Compiled-in seed catalog and master table
//! - `catalog_store` - Catalog entries and their row state
//! - `suggestion` - Prefix search over the master table
//! - `composer` - Bill composition from selected rows
//! - `desk` - Orchestration of checkout, history and purchase recording

pub mod catalog_store;
pub mod composer;
pub mod desk;
pub mod seed;
pub mod suggestion;
pub mod traits;

pub use catalog_store::{parse_price, CatalogStore};
pub use composer::BillComposer;
pub use desk::BillingDesk;
pub use suggestion::{SuggestionEngine, SEARCH_PLACEHOLDER};
pub use traits::PurchaseSink;
