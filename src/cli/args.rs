use crate::core::parse_price;
use crate::sink::SinkKind;
use crate::types::{BillDate, BillingError};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Grocery billing desk with item suggestions and dated bill history
#[derive(Parser, Debug)]
#[command(name = "grocery-billing")]
#[command(about = "Grocery billing desk with item suggestions and dated bill history", long_about = None)]
pub struct CliArgs {
    /// Configuration file (TOML)
    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to a TOML config file (default: <data-dir>/billing.toml if present)"
    )]
    pub config: Option<PathBuf>,

    /// Directory holding bill history and purchase storage
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        global = true,
        help = "Directory for bill history and purchase storage (default: billing_data)"
    )]
    pub data_dir: Option<PathBuf>,

    /// Purchase storage backend
    #[arg(
        long = "sink",
        value_name = "SINK",
        global = true,
        help = "Where sold lines are recorded: 'sqlite', 'csv' or 'memory'"
    )]
    pub sink: Option<SinkKind>,

    #[command(subcommand)]
    pub command: Command,
}

/// Desk actions
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog items and prices
    Catalog,

    /// Show master table items starting with QUERY
    Suggest {
        /// Text typed in the search box
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Select items, generate a bill and record it
    Bill {
        /// Bill date (default: today)
        #[arg(long = "date", value_name = "YYYY-MM-DD")]
        date: Option<BillDate>,

        /// Item to bill, optionally with quantity and sale price
        #[arg(long = "item", value_name = "NAME[=QTY[@PRICE]]", required = true)]
        items: Vec<ItemSelection>,

        /// Custom item to add to the catalog before billing
        #[arg(long = "custom", value_name = "NAME=PRICE")]
        custom: Vec<String>,
    },

    /// Browse past bills
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Interactive billing session on stdin
    Session {
        /// Initial bill date (default: today)
        #[arg(long = "date", value_name = "YYYY-MM-DD")]
        date: Option<BillDate>,
    },
}

/// History sub-actions
#[derive(Subcommand, Debug, PartialEq)]
pub enum HistoryAction {
    /// List dates with bills, newest first
    List,
    /// Print all bills logged on DATE
    Show {
        #[arg(value_name = "YYYY-MM-DD")]
        date: BillDate,
    },
    /// Open the folder for DATE with the system file browser
    Open {
        #[arg(value_name = "YYYY-MM-DD")]
        date: BillDate,
    },
}

/// An item picked on the command line: `NAME[=QTY[@PRICE]]`
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSelection {
    pub name: String,
    pub quantity: Option<i64>,
    pub price: Option<Decimal>,
}

impl FromStr for ItemSelection {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, rest) = match s.rsplit_once('=') {
            Some((name, rest)) => (name, Some(rest)),
            None => (s, None),
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(BillingError::invalid_input("item", s));
        }

        let (quantity, price) = match rest {
            None => (None, None),
            Some(rest) => {
                let (qty_text, price_text) = match rest.split_once('@') {
                    Some((qty, price)) => (qty, Some(price)),
                    None => (rest, None),
                };
                let quantity = qty_text
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| BillingError::invalid_input("quantity", qty_text))?;
                let price = price_text
                    .map(|text| {
                        parse_price(text).ok_or_else(|| BillingError::invalid_input("price", text))
                    })
                    .transpose()?;
                (Some(quantity), price)
            }
        };

        Ok(ItemSelection {
            name: name.to_string(),
            quantity,
            price,
        })
    }
}
