//! CLI command handlers
//!
//! This module contains the command handlers for the budget CLI.

pub mod ledger;
pub mod report;
pub mod transaction;

pub use ledger::{LedgerArgs, LedgerEntry};
pub use report::{demo_budget, handle_demo_command, handle_report_command, ReportFormat};
pub use transaction::{handle_transactions_command, ListFormat};
