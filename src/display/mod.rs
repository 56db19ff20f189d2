//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger entries for terminal display.

pub mod transaction;

pub use transaction::{format_transaction_history, format_transaction_line};
