//! YAML Export functionality
//!
//! Exports a ledger to YAML for human-readable output.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::models::Budget;

/// Export a ledger to YAML format
pub fn export_ledger_yaml<W: Write>(budget: &Budget, mut writer: W) -> LedgerResult<()> {
    let export = LedgerExport::from_budget(budget);

    writeln!(writer, "# Budget ledger export: {}", export.category)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in cents")
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
