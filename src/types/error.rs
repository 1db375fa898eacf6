//! Error types for the grocery billing desk
//!
//! This module defines all error types that can occur while editing the
//! catalog, generating bills, and writing history or purchase records.
//!
//! # Error Categories
//!
//! - **Storage Errors**: history files, the purchase database, CSV ledgers
//! - **Input Errors**: unknown items, malformed dates, quantities or prices
//! - **Arithmetic Errors**: overflow while computing line or grand totals
//!
//! Invalid custom-item input is deliberately not an error: the catalog
//! ignores it silently.

use thiserror::Error;

/// Main error type for the billing desk
///
/// Storage errors are fatal for the current operation and are reported at the
/// command boundary. Nothing is retried or rolled back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    /// I/O error while reading or writing history files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The purchase database rejected an operation
    #[error("Database error: {message}")]
    DatabaseError {
        /// Description of the database error
        message: String,
    },

    /// Writing the CSV purchase ledger failed
    #[error("CSV error: {message}")]
    CsvError {
        /// Description of the CSV error
        message: String,
    },

    /// The configuration file could not be read or parsed
    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" in {}", p)).unwrap_or_default())]
    ConfigError {
        /// Config file path (if known)
        path: Option<String>,
        /// Description of the problem
        message: String,
    },

    /// A bill date is not a valid `YYYY-MM-DD` date
    #[error("Invalid bill date '{date}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected date text
        date: String,
    },

    /// A row operation referenced an item that is not in the catalog
    #[error("Unknown item '{name}'")]
    UnknownItem {
        /// The item name that was not found
        name: String,
    },

    /// No history exists for the requested date
    #[error("No bill history for {date}")]
    HistoryNotFound {
        /// Requested date key
        date: String,
    },

    /// Computing a line or grand total would overflow
    #[error("Arithmetic overflow computing {operation} for '{item}'")]
    ArithmeticOverflow {
        /// Which total was being computed
        operation: String,
        /// Item involved in the overflow
        item: String,
    },

    /// User-entered text could not be interpreted
    #[error("Invalid {field} '{value}'")]
    InvalidInput {
        /// Name of the field being parsed
        field: String,
        /// The rejected text
        value: String,
    },
}

// Conversion from io::Error to BillingError
impl From<std::io::Error> for BillingError {
    fn from(error: std::io::Error) -> Self {
        BillingError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from rusqlite::Error to BillingError
impl From<rusqlite::Error> for BillingError {
    fn from(error: rusqlite::Error) -> Self {
        BillingError::DatabaseError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BillingError
impl From<csv::Error> for BillingError {
    fn from(error: csv::Error) -> Self {
        BillingError::CsvError {
            message: error.to_string(),
        }
    }
}

// Conversion from toml::de::Error to BillingError
impl From<toml::de::Error> for BillingError {
    fn from(error: toml::de::Error) -> Self {
        BillingError::ConfigError {
            path: None,
            message: error.message().to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BillingError {
    /// Create an InvalidDate error
    pub fn invalid_date(date: &str) -> Self {
        BillingError::InvalidDate {
            date: date.to_string(),
        }
    }

    /// Create an UnknownItem error
    pub fn unknown_item(name: &str) -> Self {
        BillingError::UnknownItem {
            name: name.to_string(),
        }
    }

    /// Create a HistoryNotFound error
    pub fn history_not_found(date: &str) -> Self {
        BillingError::HistoryNotFound {
            date: date.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, item: &str) -> Self {
        BillingError::ArithmeticOverflow {
            operation: operation.to_string(),
            item: item.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: &str, value: &str) -> Self {
        BillingError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Attach a config file path to a ConfigError
    pub fn with_config_path(self, path: &std::path::Path) -> Self {
        match self {
            BillingError::ConfigError { message, .. } => BillingError::ConfigError {
                path: Some(path.display().to_string()),
                message,
            },
            other => other,
        }
    }
}
