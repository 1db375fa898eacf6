//! Receipt text format
//!
//! This module centralizes the human-readable receipt layout written to the
//! history log and shown to the cashier. All functions are pure (no I/O).

use crate::types::Bill;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Currency symbol printed before every amount
pub const CURRENCY: &str = "₹";

/// Line separating consecutive receipts in a history log
pub fn history_marker() -> String {
    format!("\n{}\n", "-".repeat(40))
}

/// Format an amount with at least two decimal places
///
/// Extra fractional digits are kept as-is so the printed value always equals
/// the stored one.
pub fn format_amount(amount: Decimal) -> String {
    let exact = amount.normalize();
    if exact.scale() < 2 {
        format!("{}{:.2}", CURRENCY, exact)
    } else {
        format!("{}{}", CURRENCY, exact)
    }
}

/// Render a bill as receipt text
///
/// Layout: a date header and blank line, one line per item with quantity,
/// unit price and line total, then a blank line and the grand total. There
/// is no trailing newline.
pub fn render_receipt(bill: &Bill) -> String {
    let mut text = format!("Bill Date: {}\n\n", bill.date);

    for line in &bill.lines {
        // writing to a String cannot fail
        let _ = writeln!(
            text,
            "{} x {} @ {} = {}",
            line.item_name,
            line.quantity,
            format_amount(line.unit_price_at_sale),
            format_amount(line.line_total)
        );
    }

    let _ = write!(text, "\nTotal = {}", format_amount(bill.total));
    text
}
