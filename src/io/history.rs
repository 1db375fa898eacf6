//! Per-date bill history on disk
//!
//! Receipts are appended to `<root>/<date>/bill.txt`, one directory per bill
//! date. Every append writes the separator marker first, so consecutive bills
//! on the same date accumulate in one human-readable file.
//!
//! # Layout
//!
//! ```text
//! billing_history/
//!   2024-01-02/
//!     bill.txt
//!   2024-01-10/
//!     bill.txt
//! ```

use crate::io::receipt::history_marker;
use crate::types::BillingError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the log file inside each date directory
pub const BILL_FILE_NAME: &str = "bill.txt";

/// Appends receipts to per-date log files and lists past dates
#[derive(Debug, Clone)]
pub struct HistoryWriter {
    root: PathBuf,
}

impl HistoryWriter {
    /// Create a writer rooted at the given directory
    ///
    /// The directory is created lazily on first append or listing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        HistoryWriter { root: root.into() }
    }

    /// Root directory holding one folder per date
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for a date key
    pub fn date_dir(&self, date_key: &str) -> PathBuf {
        self.root.join(date_key)
    }

    /// Log file for a date key
    pub fn bill_file(&self, date_key: &str) -> PathBuf {
        self.date_dir(date_key).join(BILL_FILE_NAME)
    }

    /// Append receipt text to the log for `date_key`
    ///
    /// Creates the date directory if needed, then writes the marker line
    /// followed by the text.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::IoError` if the directory or file cannot be
    /// created or written.
    pub fn append_bill(&self, text: &str, date_key: &str) -> Result<(), BillingError> {
        let dir = self.date_dir(date_key);
        fs::create_dir_all(&dir)?;

        let path = dir.join(BILL_FILE_NAME);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(history_marker().as_bytes())?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        log::info!("Appended bill to {}", path.display());
        Ok(())
    }

    /// Date keys with history, newest first
    ///
    /// Sorting is reverse lexicographic on the folder name, which matches
    /// chronological order for zero-padded `YYYY-MM-DD` keys. Files directly
    /// under the root are skipped.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::IoError` if the root cannot be created or read.
    pub fn list_history(&self) -> Result<Vec<String>, BillingError> {
        fs::create_dir_all(&self.root)?;

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => keys.push(name),
                Err(name) => log::warn!("Skipping non UTF-8 history folder {:?}", name),
            }
        }

        keys.sort_unstable_by(|a, b| b.cmp(a));
        Ok(keys)
    }

    /// Full log contents for a date
    ///
    /// # Errors
    ///
    /// Returns `BillingError::HistoryNotFound` if no bill was logged for the
    /// date, or `BillingError::IoError` if the file cannot be read.
    pub fn read_bills(&self, date_key: &str) -> Result<String, BillingError> {
        let path = self.bill_file(date_key);
        if !path.is_file() {
            return Err(BillingError::history_not_found(date_key));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Ask the host environment to open the folder for a date
    ///
    /// # Errors
    ///
    /// Returns `BillingError::HistoryNotFound` if the folder does not exist,
    /// or `BillingError::IoError` if no opener could be launched.
    pub fn open_entry(&self, date_key: &str) -> Result<(), BillingError> {
        let dir = self.date_dir(date_key);
        if !dir.is_dir() {
            return Err(BillingError::history_not_found(date_key));
        }
        log::debug!("Opening {}", dir.display());
        open::that(&dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn writer() -> (TempDir, HistoryWriter) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let writer = HistoryWriter::new(dir.path().join("billing_history"));
        (dir, writer)
    }

    #[test]
    fn test_append_creates_date_folder_and_file() {
        let (_dir, writer) = writer();

        writer.append_bill("first", "2024-01-02").unwrap();

        let path = writer.bill_file("2024-01-02");
        assert!(path.is_file());
        assert_eq!(fs::read_to_string(path).unwrap(), format!("{}first", history_marker()));
    }

    #[test]
    fn test_same_date_accumulates_in_call_order() {
        let (_dir, writer) = writer();

        writer.append_bill("first receipt", "2024-01-02").unwrap();
        writer.append_bill("second receipt", "2024-01-02").unwrap();

        let contents = writer.read_bills("2024-01-02").unwrap();
        let marker = history_marker();
        assert_eq!(
            contents,
            format!("{marker}first receipt{marker}second receipt")
        );
        assert_eq!(writer.list_history().unwrap(), vec!["2024-01-02"]);
    }

    #[test]
    fn test_different_dates_use_different_files() {
        let (_dir, writer) = writer();

        writer.append_bill("a", "2024-01-02").unwrap();
        writer.append_bill("b", "2024-01-03").unwrap();

        assert!(writer.read_bills("2024-01-02").unwrap().ends_with('a'));
        assert!(writer.read_bills("2024-01-03").unwrap().ends_with('b'));
    }

    #[test]
    fn test_list_history_newest_first() {
        let (_dir, writer) = writer();
        for key in ["2024-01-02", "2024-01-10", "2023-12-31"] {
            fs::create_dir_all(writer.date_dir(key)).unwrap();
        }

        assert_eq!(
            writer.list_history().unwrap(),
            vec!["2024-01-10", "2024-01-02", "2023-12-31"]
        );
    }

    #[test]
    fn test_list_history_creates_missing_root_and_skips_files() {
        let (_dir, writer) = writer();
        assert!(writer.list_history().unwrap().is_empty());
        assert!(writer.root().is_dir());

        fs::write(writer.root().join("notes.txt"), "x").unwrap();
        fs::create_dir_all(writer.date_dir("2024-05-01")).unwrap();
        assert_eq!(writer.list_history().unwrap(), vec!["2024-05-01"]);
    }

    #[test]
    fn test_read_missing_date() {
        let (_dir, writer) = writer();
        assert_eq!(
            writer.read_bills("2024-01-02"),
            Err(BillingError::history_not_found("2024-01-02"))
        );
    }

    #[test]
    fn test_open_missing_date() {
        let (_dir, writer) = writer();
        assert_eq!(
            writer.open_entry("2024-01-02"),
            Err(BillingError::history_not_found("2024-01-02"))
        );
    }
}
