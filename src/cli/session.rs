//! Interactive billing session
//!
//! A line-oriented stand-in for the billing form. Each input line is one user
//! action against the desk; the session keeps the desk (and so the catalog and
//! row state) alive between actions.
//!
//! Item names may contain spaces, so numeric arguments come first:
//! `qty 2 Eggs (Dozen)`, `price 40 Milk`.
//!
//! Errors from a single command are printed and the session carries on.
//! Invalid custom items are ignored without a message.

use super::commands::write_outcome;
use crate::core::{parse_price, BillingDesk, PurchaseSink};
use crate::io::format_amount;
use crate::types::{BillDate, BillingError};
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  search <text>          suggest master items starting with <text>
  pick <n|name>          add a suggestion (number from the last search) to the catalog
  add <name>=<price>     add a custom item
  select <name>          tick an item for the bill
  unselect <name>        untick an item
  clear                  untick every item
  qty <n> <name>         set quantity
  price <amount> <name>  set sale price
  list                   show catalog rows
  date [YYYY-MM-DD]      show or change the bill date
  bill                   generate and record the bill
  history [YYYY-MM-DD]   list bill dates, or show bills for a date
  open <YYYY-MM-DD>      open a history folder
  help                   show this help
  quit                   leave the session";

/// Outcome of one session command
enum Flow {
    Continue,
    Quit,
}

/// Session state kept between commands
pub struct Session<'a, S: PurchaseSink> {
    desk: &'a mut BillingDesk<S>,
    date: BillDate,
    last_suggestions: Vec<String>,
}

impl<'a, S: PurchaseSink> Session<'a, S> {
    pub fn new(desk: &'a mut BillingDesk<S>, date: BillDate) -> Self {
        Session {
            desk,
            date,
            last_suggestions: Vec::new(),
        }
    }

    /// Read commands until `quit` or end of input
    ///
    /// # Errors
    ///
    /// Only failures to read input or write output end the session early;
    /// command errors are printed and reading continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), BillingError> {
        writeln!(output, "Bill date {}. Type 'help' for commands.", self.date)?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.execute(line.trim(), &mut output) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(output, "Error: {}", e)?,
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn execute(&mut self, line: &str, output: &mut dyn Write) -> Result<Flow, BillingError> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "" => {}
            "search" => self.search(rest, output)?,
            "pick" => self.pick(rest, output)?,
            "add" => {
                let (name, price) = rest.rsplit_once('=').unwrap_or((rest, ""));
                if self.desk.add_custom_item(name, price) {
                    let name = name.trim();
                    let price = self.desk.catalog().price_of(name).unwrap_or_default();
                    writeln!(output, "Added {} at {}", name, format_amount(price))?;
                }
            }
            "select" => self.desk.catalog_mut().set_selected(rest, true)?,
            "unselect" => self.desk.catalog_mut().set_selected(rest, false)?,
            "clear" => self.desk.catalog_mut().clear_selection(),
            "qty" => {
                let (amount, name) = split_number(rest, "quantity")?;
                let quantity = amount
                    .parse::<i64>()
                    .map_err(|_| BillingError::invalid_input("quantity", amount))?;
                self.desk.catalog_mut().set_quantity(name, quantity)?;
            }
            "price" => {
                let (amount, name) = split_number(rest, "price")?;
                let price =
                    parse_price(amount).ok_or_else(|| BillingError::invalid_input("price", amount))?;
                self.desk.catalog_mut().set_price(name, price)?;
            }
            "list" => self.list(output)?,
            "date" => {
                if !rest.is_empty() {
                    self.date = BillDate::parse(rest)?;
                }
                writeln!(output, "Bill date {}", self.date)?;
            }
            "bill" => {
                let outcome = self.desk.generate_bill(&self.date)?;
                write_outcome(&outcome, output)?;
            }
            "history" => {
                if rest.is_empty() {
                    for date in self.desk.list_history()? {
                        writeln!(output, "{}", date)?;
                    }
                } else {
                    let date = BillDate::parse(rest)?;
                    let text = self.desk.history().read_bills(date.as_str())?;
                    writeln!(output, "{}", text.trim_start_matches('\n'))?;
                }
            }
            "open" => {
                let date = BillDate::parse(rest)?;
                self.desk.history().open_entry(date.as_str())?;
            }
            "help" => writeln!(output, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(output, "Unknown command '{}'. Type 'help'.", other)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self, text: &str, output: &mut dyn Write) -> Result<(), BillingError> {
        self.last_suggestions = self
            .desk
            .suggest(text)
            .into_iter()
            .map(String::from)
            .collect();

        for (i, name) in self.last_suggestions.iter().enumerate() {
            writeln!(output, "{:>3}. {}", i + 1, name)?;
        }
        Ok(())
    }

    fn pick(&mut self, choice: &str, output: &mut dyn Write) -> Result<(), BillingError> {
        let name = match choice.parse::<usize>() {
            Ok(n) => self
                .last_suggestions
                .get(n.wrapping_sub(1))
                .cloned()
                .ok_or_else(|| BillingError::invalid_input("suggestion number", choice))?,
            Err(_) => choice.to_string(),
        };

        if self.desk.accept_suggestion(&name) {
            let price = self.desk.catalog().price_of(&name).unwrap_or_default();
            writeln!(output, "Added {} at {}", name, format_amount(price))?;
        } else if self.desk.catalog().contains(&name) {
            writeln!(output, "{} is already in the catalog", name)?;
        } else {
            return Err(BillingError::unknown_item(&name));
        }
        self.last_suggestions.clear();
        Ok(())
    }

    fn list(&self, output: &mut dyn Write) -> Result<(), BillingError> {
        for row in self.desk.catalog().rows() {
            writeln!(
                output,
                "[{}] {} x {} @ {}",
                if row.selected { 'x' } else { ' ' },
                row.item_name,
                row.quantity,
                format_amount(row.editable_price)
            )?;
        }
        Ok(())
    }
}

/// Split `"<number> <name>"`
fn split_number<'t>(rest: &'t str, field: &str) -> Result<(&'t str, &'t str), BillingError> {
    rest.split_once(char::is_whitespace)
        .map(|(number, name)| (number, name.trim()))
        .filter(|(_, name)| !name.is_empty())
        .ok_or_else(|| BillingError::invalid_input(field, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::{default_catalog, default_master};
    use crate::io::HistoryWriter;
    use crate::sink::MemorySink;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn desk(dir: &TempDir) -> BillingDesk<MemorySink> {
        BillingDesk::new(
            default_catalog(),
            default_master(),
            HistoryWriter::new(dir.path().join("billing_history")),
            MemorySink::new(),
        )
    }

    fn run(desk: &mut BillingDesk<MemorySink>, script: &str) -> String {
        let mut output = Vec::new();
        let date = BillDate::parse("2024-01-02").unwrap();
        Session::new(desk, date)
            .run(script.as_bytes(), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_full_checkout() {
        let dir = TempDir::new().unwrap();
        let mut desk = desk(&dir);

        let output = run(
            &mut desk,
            "select Milk\nqty 2 Milk\nselect Bread\nbill\nquit\n",
        );

        assert!(output.contains("Total = ₹115.00"));
        assert_eq!(desk.sink().records().len(), 2);
    }

    #[test]
    fn test_search_and_pick_by_number() {
        let dir = TempDir::new().unwrap();
        let mut desk = desk(&dir);

        let output = run(&mut desk, "search b\npick 3\n");

        assert!(output.contains("  1. Banana\n  2. Bread\n  3. Butter\n  4. Biscuit\n"));
        assert!(output.contains("Added Butter at ₹55.00"));
        assert_eq!(desk.catalog().price_of("Butter"), Some(Decimal::from(55)));
    }

    #[test]
    fn test_pick_existing_item_reports_no_duplicate() {
        let dir = TempDir::new().unwrap();
        let mut desk = desk(&dir);

        let output = run(&mut desk, "pick Milk\n");

        assert!(output.contains("Milk is already in the catalog"));
        assert_eq!(desk.catalog().len(), 7);
    }

    #[test]
    fn test_invalid_custom_item_is_silent() {
        let dir = TempDir::new().unwrap();
        let mut desk = desk(&dir);

        let output = run(&mut desk, "add Paneer=abc\nadd =95\nadd Paneer=95\n");

        assert_eq!(output.matches("Added").count(), 1);
        assert!(!output.contains("Error"));
        assert_eq!(desk.catalog().price_of("Paneer"), Some(Decimal::from(95)));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let dir = TempDir::new().unwrap();
        let mut desk = desk(&dir);

        let output = run(&mut desk, "select Tofu\nqty many Milk\ndate 2024-13-01\nlist\n");

        assert!(output.contains("Error: Unknown item 'Tofu'"));
        assert!(output.contains("Error: Invalid quantity 'many'"));
        assert!(output.contains("Error: Invalid bill date '2024-13-01'"));
        assert!(output.contains("[ ] Milk x 1 @ ₹45.00"));
    }

    #[test]
    fn test_empty_bill_warns() {
        let dir = TempDir::new().unwrap();
        let mut desk = desk(&dir);

        let output = run(&mut desk, "bill\n");

        assert!(output.contains(crate::cli::commands::EMPTY_BILL_WARNING));
        assert!(desk.list_history().unwrap().is_empty());
    }

    #[test]
    fn test_clear_unticks_everything() {
        let dir = TempDir::new().unwrap();
        let mut desk = desk(&dir);

        let output = run(&mut desk, "select Milk\nselect Bread\nqty 3 Bread\nclear\nbill\n");

        assert!(output.contains(crate::cli::commands::EMPTY_BILL_WARNING));
        assert!(desk.catalog().rows().iter().all(|r| !r.selected));
        assert_eq!(desk.catalog().row("Bread").unwrap().quantity, 3);
        assert!(desk.sink().records().is_empty());
    }

    #[test]
    fn test_date_change_and_history() {
        let dir = TempDir::new().unwrap();
        let mut desk = desk(&dir);

        let output = run(
            &mut desk,
            "select Salt\nselect Milk\nbill\ndate 2024-01-10\nbill\nhistory\n",
        );

        // Salt is not in the catalog, Milk is
        assert!(output.contains("Error: Unknown item 'Salt'"));
        assert!(output.contains("2024-01-10\n2024-01-02\n"));
    }
}
