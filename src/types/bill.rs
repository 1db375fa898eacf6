//! Bill-related types for the grocery billing desk
//!
//! This module defines the bill date key, the lines and totals materialised at
//! checkout, and the record handed to the purchase sink for every sold line.

use super::error::BillingError;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Date format used for bill dates and history folder names
///
/// Zero-padded so that lexicographic order equals chronological order.
pub const BILL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated bill date (`YYYY-MM-DD`)
///
/// Bill dates double as history folder names, so they are validated before
/// anything is written to disk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BillDate(String);

impl BillDate {
    /// Parse a bill date, accepting surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidDate` if the text is not a valid
    /// calendar date in `YYYY-MM-DD` form.
    pub fn parse(text: &str) -> Result<Self, BillingError> {
        let trimmed = text.trim();
        let date = NaiveDate::parse_from_str(trimmed, BILL_DATE_FORMAT)
            .map_err(|_| BillingError::invalid_date(trimmed))?;
        Ok(BillDate(date.format(BILL_DATE_FORMAT).to_string()))
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        BillDate(Local::now().format(BILL_DATE_FORMAT).to_string())
    }

    /// The date key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BillDate {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BillDate::parse(s)
    }
}

impl fmt::Display for BillDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One priced line of a bill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillLine {
    pub item_name: String,
    pub quantity: i64,
    pub unit_price_at_sale: Decimal,
    /// quantity × unit_price_at_sale
    pub line_total: Decimal,
}

/// A generated bill
///
/// Created once per checkout and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    pub date: BillDate,
    pub lines: Vec<BillLine>,
    /// Sum of all line totals
    pub total: Decimal,
}

impl Bill {
    /// Purchase records for every line, in bill order
    pub fn purchase_records(&self) -> Vec<PurchaseRecord> {
        self.lines.iter().map(PurchaseRecord::from).collect()
    }
}

/// Result of a checkout attempt
///
/// `Empty` is distinct from a valid bill: it is signalled when nothing is
/// selected or the selected lines sum to zero, and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillOutcome {
    Generated(Bill),
    Empty,
}

impl BillOutcome {
    /// Returns the bill if one was generated
    pub fn bill(&self) -> Option<&Bill> {
        match self {
            BillOutcome::Generated(bill) => Some(bill),
            BillOutcome::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BillOutcome::Empty)
    }
}

/// Record written to the purchase sink for each sold line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: i64,
    pub line_total: Decimal,
}

impl From<&BillLine> for PurchaseRecord {
    fn from(line: &BillLine) -> Self {
        PurchaseRecord {
            name: line.item_name.clone(),
            unit_price: line.unit_price_at_sale,
            quantity: line.quantity,
            line_total: line.line_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("2024-01-02", "2024-01-02")]
    #[case::whitespace("  2024-01-10 ", "2024-01-10")]
    #[case::leap_day("2024-02-29", "2024-02-29")]
    fn test_bill_date_parse_valid(#[case] input: &str, #[case] expected: &str) {
        let date = BillDate::parse(input).unwrap();
        assert_eq!(date.as_str(), expected);
        assert_eq!(date.to_string(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::not_a_date("yesterday")]
    #[case::wrong_order("02-01-2024")]
    #[case::impossible_day("2023-02-29")]
    #[case::path_escape("../2024-01-01")]
    fn test_bill_date_parse_invalid(#[case] input: &str) {
        let result = BillDate::parse(input);
        assert!(matches!(result, Err(BillingError::InvalidDate { .. })));
    }

    #[test]
    fn test_today_is_parseable() {
        let today = BillDate::today();
        assert_eq!(BillDate::parse(today.as_str()).unwrap(), today);
    }

    #[test]
    fn test_purchase_records_follow_line_order() {
        let bill = Bill {
            date: BillDate::parse("2024-01-02").unwrap(),
            lines: vec![
                BillLine {
                    item_name: "Milk".to_string(),
                    quantity: 2,
                    unit_price_at_sale: Decimal::from(45),
                    line_total: Decimal::from(90),
                },
                BillLine {
                    item_name: "Bread".to_string(),
                    quantity: 1,
                    unit_price_at_sale: Decimal::from(25),
                    line_total: Decimal::from(25),
                },
            ],
            total: Decimal::from(115),
        };

        let records = bill.purchase_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Milk");
        assert_eq!(records[0].line_total, Decimal::from(90));
        assert_eq!(records[1].name, "Bread");
        assert_eq!(records[1].quantity, 1);
    }
}
