//! Export module for the budget ledger
//!
//! Writes the ledger in machine-readable formats:
//! - CSV: transaction listing (spreadsheet-compatible)
//! - JSON: full ledger document
//! - YAML: full ledger document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_ledger_json, LedgerExport};
pub use yaml::export_ledger_yaml;
