//! One-shot command handlers
//!
//! Each handler takes an open desk and a writer, so the binary can print to
//! stdout while tests capture output in a buffer.

use super::args::{HistoryAction, ItemSelection};
use crate::core::{BillingDesk, PurchaseSink};
use crate::io::format_amount;
use crate::io::receipt::render_receipt;
use crate::types::{BillDate, BillOutcome, BillingError};
use std::io::Write;

/// Warning shown when a checkout produces an empty bill
pub const EMPTY_BILL_WARNING: &str = "Warning: Please select items";

/// Print every catalog entry with its price
pub fn run_catalog<S: PurchaseSink>(
    desk: &BillingDesk<S>,
    output: &mut dyn Write,
) -> Result<(), BillingError> {
    for entry in desk.catalog().entries() {
        writeln!(output, "{}\t{}", entry.name, format_amount(entry.unit_price))?;
    }
    Ok(())
}

/// Print matching master names, one per line
pub fn run_suggest<S: PurchaseSink>(
    desk: &BillingDesk<S>,
    query: &str,
    output: &mut dyn Write,
) -> Result<(), BillingError> {
    for name in desk.suggest(query) {
        writeln!(output, "{}", name)?;
    }
    Ok(())
}

/// Add custom items, select the requested items and check out
///
/// Items missing from the catalog are pulled from the master table when
/// possible, as if the cashier had accepted the suggestion. Custom items with
/// invalid text are skipped without a message.
///
/// # Errors
///
/// Returns `BillingError::UnknownItem` for an item in neither table, and any
/// error raised while writing the bill.
pub fn run_bill<S: PurchaseSink>(
    desk: &mut BillingDesk<S>,
    date: &BillDate,
    items: &[ItemSelection],
    custom: &[String],
    output: &mut dyn Write,
) -> Result<BillOutcome, BillingError> {
    for raw in custom {
        let (name, price) = raw.rsplit_once('=').unwrap_or((raw.as_str(), ""));
        desk.add_custom_item(name, price);
    }

    for item in items {
        if !desk.catalog().contains(&item.name) {
            desk.accept_suggestion(&item.name);
        }
        let catalog = desk.catalog_mut();
        catalog.set_selected(&item.name, true)?;
        if let Some(quantity) = item.quantity {
            catalog.set_quantity(&item.name, quantity)?;
        }
        if let Some(price) = item.price {
            catalog.set_price(&item.name, price)?;
        }
    }

    let outcome = desk.generate_bill(date)?;
    write_outcome(&outcome, output)?;
    Ok(outcome)
}

/// List, show or open bill history
pub fn run_history<S: PurchaseSink>(
    desk: &BillingDesk<S>,
    action: Option<&HistoryAction>,
    output: &mut dyn Write,
) -> Result<(), BillingError> {
    match action {
        None | Some(HistoryAction::List) => {
            for date in desk.list_history()? {
                writeln!(output, "{}", date)?;
            }
        }
        Some(HistoryAction::Show { date }) => {
            let text = desk.history().read_bills(date.as_str())?;
            writeln!(output, "{}", text.trim_start_matches('\n'))?;
        }
        Some(HistoryAction::Open { date }) => {
            desk.history().open_entry(date.as_str())?;
        }
    }
    Ok(())
}

/// Print a receipt, or the empty-bill warning
pub fn write_outcome(outcome: &BillOutcome, output: &mut dyn Write) -> Result<(), BillingError> {
    match outcome {
        BillOutcome::Generated(bill) => writeln!(output, "{}", render_receipt(bill))?,
        BillOutcome::Empty => writeln!(output, "{}", EMPTY_BILL_WARNING)?,
    }
    Ok(())
}
