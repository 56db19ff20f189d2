//! JSON Export functionality
//!
//! Exports a ledger and its derived figures to JSON with schema versioning.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Money, Transaction};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Ledger export document
///
/// Amounts are in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    pub category: String,
    pub allocated: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub overrun: bool,

    /// Entries in insertion order
    pub transactions: Vec<Transaction>,
}

impl LedgerExport {
    /// Snapshot a ledger
    pub fn from_budget(budget: &Budget) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            category: budget.category().to_string(),
            allocated: budget.allocated(),
            total_expenses: budget.total_expenses(),
            balance: budget.calculate_balance(),
            overrun: budget.check_overrun(),
            transactions: budget.transactions(),
        }
    }
}

/// Export a ledger to JSON
pub fn export_ledger_json<W: Write>(budget: &Budget, writer: W, pretty: bool) -> LedgerResult<()> {
    let export = LedgerExport::from_budget(budget);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
