//! Bill composition
//!
//! Turns the selected rows of a catalog into a [`Bill`]. Composition is pure:
//! it reads the row registry and performs no I/O. Persisting the result is
//! the billing desk's job.

use crate::core::catalog_store::CatalogStore;
use crate::types::{Bill, BillDate, BillLine, BillOutcome, BillingError};
use rust_decimal::Decimal;

/// Composes bills from row state
#[derive(Debug, Clone, Copy, Default)]
pub struct BillComposer;

impl BillComposer {
    /// Compose a bill from every selected row, in creation order
    ///
    /// Line totals are `quantity × editable_price` with no validation of
    /// either value. The outcome is `Empty` when nothing is selected or the
    /// grand total is zero.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::ArithmeticOverflow` if a line total or the grand
    /// total cannot be represented.
    pub fn compose(
        &self,
        catalog: &CatalogStore,
        date: &BillDate,
    ) -> Result<BillOutcome, BillingError> {
        let mut lines = Vec::new();
        let mut total = Decimal::ZERO;

        for row in catalog.rows().iter().filter(|row| row.selected) {
            let line_total = Decimal::from(row.quantity)
                .checked_mul(row.editable_price)
                .ok_or_else(|| BillingError::arithmetic_overflow("line total", &row.item_name))?;

            total = total
                .checked_add(line_total)
                .ok_or_else(|| BillingError::arithmetic_overflow("bill total", &row.item_name))?;

            lines.push(BillLine {
                item_name: row.item_name.clone(),
                quantity: row.quantity,
                unit_price_at_sale: row.editable_price,
                line_total,
            });
        }

        if lines.is_empty() || total.is_zero() {
            return Ok(BillOutcome::Empty);
        }

        Ok(BillOutcome::Generated(Bill {
            date: date.clone(),
            lines,
            total,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::default_catalog;

    fn date() -> BillDate {
        BillDate::parse("2024-01-02").unwrap()
    }

    #[test]
    fn test_nothing_selected_is_empty() {
        let catalog = CatalogStore::with_entries(default_catalog());
        let outcome = BillComposer.compose(&catalog, &date()).unwrap();
        assert_eq!(outcome, BillOutcome::Empty);
    }

    #[test]
    fn test_zero_total_is_empty() {
        let mut catalog = CatalogStore::with_entries(default_catalog());
        catalog.set_selected("Milk", true).unwrap();
        catalog.set_quantity("Milk", 0).unwrap();

        let outcome = BillComposer.compose(&catalog, &date()).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_lines_cancelling_to_zero_is_empty() {
        let mut catalog = CatalogStore::with_entries(default_catalog());
        catalog.set_selected("Milk", true).unwrap();
        catalog.set_selected("Bread", true).unwrap();
        catalog.set_quantity("Bread", -1).unwrap();
        catalog.set_price("Bread", Decimal::from(45)).unwrap();

        let outcome = BillComposer.compose(&catalog, &date()).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_milk_and_bread() {
        let mut catalog = CatalogStore::with_entries(default_catalog());
        catalog.set_selected("Milk", true).unwrap();
        catalog.set_quantity("Milk", 2).unwrap();
        catalog.set_selected("Bread", true).unwrap();

        let outcome = BillComposer.compose(&catalog, &date()).unwrap();
        let bill = outcome.bill().expect("bill should be generated");

        assert_eq!(bill.date, date());
        assert_eq!(bill.total, Decimal::from(115));
        assert_eq!(bill.lines.len(), 2);
        assert_eq!(bill.lines[0].item_name, "Milk");
        assert_eq!(bill.lines[0].line_total, Decimal::from(90));
        assert_eq!(bill.lines[1].item_name, "Bread");
        assert_eq!(bill.lines[1].line_total, Decimal::from(25));
    }

    #[test]
    fn test_follows_creation_order_not_selection_order() {
        let mut catalog = CatalogStore::with_entries(default_catalog());
        catalog.set_selected("Oil (1L)", true).unwrap();
        catalog.set_selected("Milk", true).unwrap();

        let outcome = BillComposer.compose(&catalog, &date()).unwrap();
        let names: Vec<_> = outcome
            .bill()
            .unwrap()
            .lines
            .iter()
            .map(|l| l.item_name.as_str())
            .collect();
        assert_eq!(names, vec!["Milk", "Oil (1L)"]);
    }

    #[test]
    fn test_edited_price_is_used() {
        let mut catalog = CatalogStore::with_entries(default_catalog());
        catalog.set_selected("Tea (250g)", true).unwrap();
        catalog.set_quantity("Tea (250g)", 3).unwrap();
        catalog.set_price("Tea (250g)", Decimal::new(9950, 2)).unwrap();

        let outcome = BillComposer.compose(&catalog, &date()).unwrap();
        let bill = outcome.bill().unwrap();
        assert_eq!(bill.lines[0].unit_price_at_sale, Decimal::new(9950, 2));
        assert_eq!(bill.total, Decimal::new(29850, 2));
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut catalog = CatalogStore::new();
        catalog.add_item("Gold", Decimal::MAX);
        catalog.set_selected("Gold", true).unwrap();
        catalog.set_quantity("Gold", 2).unwrap();

        let result = BillComposer.compose(&catalog, &date());
        assert_eq!(
            result,
            Err(BillingError::arithmetic_overflow("line total", "Gold"))
        );
    }
}
