//! In-memory purchase sink

use crate::core::traits::PurchaseSink;
use crate::types::{BillingError, PurchaseRecord};

/// Keeps purchase records in a vector
///
/// Nothing survives the process. Used for dry runs and by tests that need to
/// count sink calls.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Vec<PurchaseRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Records received so far, in call order
    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }
}

impl PurchaseSink for MemorySink {
    fn record_purchase(&mut self, record: &PurchaseRecord) -> Result<(), BillingError> {
        self.records.push(record.clone());
        Ok(())
    }
}
