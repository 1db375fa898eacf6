// CLI module
// Command-line interface, argument parsing and command dispatch

mod args;
pub mod commands;
pub mod session;

pub use args::{CliArgs, Command, HistoryAction, ItemSelection};
pub use session::Session;

use crate::config::Config;
use crate::core::BillingDesk;
use crate::types::{BillDate, BillingError};
use clap::Parser;
use std::io::{self, Write};

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or --help), clap
/// displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Resolve configuration from the config file and command-line overrides
pub fn load_config(args: &CliArgs) -> Result<Config, BillingError> {
    let mut config = Config::load(args.config.as_deref(), args.data_dir.as_deref())?;
    config.apply_overrides(args.data_dir.as_deref(), args.sink);
    Ok(config)
}

/// Run the selected command against a freshly opened desk
///
/// Command output goes to stdout.
pub fn run(args: CliArgs) -> Result<(), BillingError> {
    let config = load_config(&args)?;
    let mut desk = BillingDesk::open(&config)?;

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match args.command {
        Command::Catalog => commands::run_catalog(&desk, &mut output)?,
        Command::Suggest { query } => commands::run_suggest(&desk, &query, &mut output)?,
        Command::Bill {
            date,
            items,
            custom,
        } => {
            let date = date.unwrap_or_else(BillDate::today);
            commands::run_bill(&mut desk, &date, &items, &custom, &mut output)?;
        }
        Command::History { action } => {
            commands::run_history(&desk, action.as_ref(), &mut output)?
        }
        Command::Session { date } => {
            let date = date.unwrap_or_else(BillDate::today);
            Session::new(&mut desk, date).run(io::stdin().lock(), &mut output)?;
        }
    }

    output.flush()?;
    Ok(())
}
