//! Purchase sink module
//!
//! This module provides the implementations of [`PurchaseSink`] that record
//! sold lines, and a factory that selects one at runtime. This mirrors the
//! way the desk is configured: the storage backend is chosen from the config
//! file or the `--sink` flag, never hard-wired.

use crate::core::traits::PurchaseSink;
use crate::types::BillingError;
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub mod ledger;
pub mod memory;
pub mod sqlite;

pub use ledger::CsvSink;
pub use memory::MemorySink;
pub use sqlite::SqliteSink;

/// File name of the SQLite purchase database inside the data directory
pub const DATABASE_FILE_NAME: &str = "purchases.db";

/// File name of the CSV purchase ledger inside the data directory
pub const LEDGER_FILE_NAME: &str = "purchases.csv";

/// Available purchase storage backends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// SQLite database, one row per sold line
    #[default]
    Sqlite,
    /// Append-only CSV ledger
    Csv,
    /// Kept in memory and discarded on exit
    Memory,
}

/// Create a purchase sink of the given kind inside `data_dir`
///
/// The data directory is created if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the backend cannot
/// be initialised (for example the database cannot be opened).
pub fn create_sink(kind: SinkKind, data_dir: &Path) -> Result<Box<dyn PurchaseSink>, BillingError> {
    match kind {
        SinkKind::Sqlite => {
            fs::create_dir_all(data_dir)?;
            Ok(Box::new(SqliteSink::open(&data_dir.join(DATABASE_FILE_NAME))?))
        }
        SinkKind::Csv => {
            fs::create_dir_all(data_dir)?;
            Ok(Box::new(CsvSink::new(data_dir.join(LEDGER_FILE_NAME))))
        }
        SinkKind::Memory => Ok(Box::new(MemorySink::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PurchaseRecord;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn record() -> PurchaseRecord {
        PurchaseRecord {
            name: "Milk".to_string(),
            unit_price: Decimal::from(45),
            quantity: 2,
            line_total: Decimal::from(90),
        }
    }

    #[rstest]
    #[case::sqlite(SinkKind::Sqlite, Some(DATABASE_FILE_NAME))]
    #[case::csv(SinkKind::Csv, Some(LEDGER_FILE_NAME))]
    #[case::memory(SinkKind::Memory, None)]
    fn test_create_sink(#[case] kind: SinkKind, #[case] expected_file: Option<&str>) {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");

        let mut sink = create_sink(kind, &data_dir).unwrap();
        sink.record_purchase(&record()).unwrap();

        if let Some(file) = expected_file {
            assert!(data_dir.join(file).is_file());
        }
    }

    #[test]
    fn test_sink_kind_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            sink: SinkKind,
        }
        let parsed: Wrapper = toml::from_str("sink = \"csv\"").unwrap();
        assert_eq!(parsed.sink, SinkKind::Csv);
    }
}
