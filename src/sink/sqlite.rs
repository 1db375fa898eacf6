//! SQLite purchase store
//!
//! One `purchases` row per sold line. Amounts are stored as decimal text so
//! they round-trip exactly.

use crate::core::traits::PurchaseSink;
use crate::types::{BillingError, PurchaseRecord};
use chrono::Local;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS purchases (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    total TEXT NOT NULL,
    created_at TEXT NOT NULL
);";

/// Purchase sink backed by a SQLite database
pub struct SqliteSink {
    conn: Connection,
}

impl SqliteSink {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub fn open(path: &Path) -> Result<Self, BillingError> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// In-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self, BillingError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, BillingError> {
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteSink { conn })
    }

    /// All stored purchases, oldest first
    pub fn purchases(&self) -> Result<Vec<PurchaseRecord>, BillingError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, price, quantity, total FROM purchases ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (name, price, quantity, total) = row?;
            records.push(PurchaseRecord {
                unit_price: parse_stored_amount(&price)?,
                line_total: parse_stored_amount(&total)?,
                name,
                quantity,
            });
        }
        Ok(records)
    }
}

impl PurchaseSink for SqliteSink {
    fn record_purchase(&mut self, record: &PurchaseRecord) -> Result<(), BillingError> {
        self.conn.execute(
            "INSERT INTO purchases (name, price, quantity, total, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.name,
                record.unit_price.to_string(),
                record.quantity,
                record.line_total.to_string(),
                Local::now().to_rfc3339(),
            ],
        )?;
        log::debug!("Stored purchase of '{}'", record.name);
        Ok(())
    }
}

fn parse_stored_amount(text: &str) -> Result<Decimal, BillingError> {
    Decimal::from_str(text).map_err(|e| BillingError::DatabaseError {
        message: format!("corrupt amount '{}': {}", text, e),
    })
}
