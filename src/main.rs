//! Grocery billing CLI
//!
//! Command-line front end for the grocery billing desk.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- catalog
//! cargo run -- suggest ch
//! cargo run -- bill --item Milk=2 --item Bread --custom Paneer=95 --item Paneer
//! cargo run -- history show 2024-01-02
//! cargo run -- --sink csv session
//! ```
//!
//! Bill history and purchase storage live under `billing_data/` unless
//! `--data-dir` or the config file says otherwise.
//!
//! # Logging
//!
//! Logs go to stderr at `warn` by default; set `RUST_LOG=debug` to see
//! catalog edits and ignored input.
//!
//! # Exit Codes
//!
//! - 0: Success (including an empty bill, which only prints a warning)
//! - 1: Error (bad config, unknown item, storage failure, etc.)

use env_logger::Env;
use grocery_billing::cli;
use std::process;

fn main() {
    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
