//! Core traits for the collaborators the billing desk writes to
//!
//! The desk does not care how purchases are stored. Any type implementing
//! [`PurchaseSink`] can be plugged in, see the `sink` module for the
//! implementations shipped with the crate.

use crate::types::{BillingError, PurchaseRecord};

/// Receives one record per sold bill line
///
/// Durability and schema are the sink's concern. The desk calls
/// `record_purchase` once per line, in bill order, and stops at the first
/// error.
pub trait PurchaseSink {
    /// Persist a single sold line
    fn record_purchase(&mut self, record: &PurchaseRecord) -> Result<(), BillingError>;
}

impl<S: PurchaseSink + ?Sized> PurchaseSink for Box<S> {
    fn record_purchase(&mut self, record: &PurchaseRecord) -> Result<(), BillingError> {
        (**self).record_purchase(record)
    }
}
