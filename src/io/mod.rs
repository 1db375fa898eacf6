//! I/O module
//!
//! Handles the text artefacts of the desk.
//!
//! # Components
//!
//! - `receipt` - Receipt text format (pure rendering)
//! - `history` - Per-date append-only bill logs on disk

pub mod history;
pub mod receipt;

pub use history::HistoryWriter;
pub use receipt::{format_amount, history_marker, render_receipt};
