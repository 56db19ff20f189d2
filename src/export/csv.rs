//! CSV Export functionality
//!
//! Exports the transaction listing to CSV.

use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

#[derive(Serialize)]
struct TransactionRow<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    amount: String,
    description: &'a str,
}

/// Export transactions to CSV with a `type,amount,description` header
pub fn export_transactions_csv<'a, W: Write>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    writer: W,
) -> LedgerResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty listing still carries a header
    csv_writer
        .write_record(["type", "amount", "description"])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .serialize(TransactionRow {
                kind: txn.kind().tag(),
                amount: txn.amount().format_plain(),
                description: txn.description(),
            })
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
