//! CSV purchase ledger
//!
//! Appends one row per sold line to a CSV file with columns
//! `name,price,quantity,total`. The header is written when the file is
//! created (or found empty); existing ledgers are only ever appended to.

use crate::core::traits::PurchaseSink;
use crate::types::{BillingError, PurchaseRecord};
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Column names of the ledger
pub const LEDGER_HEADER: [&str; 4] = ["name", "price", "quantity", "total"];

/// Append-only CSV purchase ledger
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Create a sink writing to `path`. The file is opened per record.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PurchaseSink for CsvSink {
    fn record_purchase(&mut self, record: &PurchaseRecord) -> Result<(), BillingError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(LEDGER_HEADER)?;
        }
        writer.write_record(&[
            record.name.clone(),
            record.unit_price.to_string(),
            record.quantity.to_string(),
            record.line_total.to_string(),
        ])?;
        writer.flush()?;

        log::debug!("Recorded '{}' in {}", record.name, self.path.display());
        Ok(())
    }
}
