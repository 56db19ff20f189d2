//! Transaction display formatting
//!
//! Renders the ledger history as numbered lines, one per entry.

use crate::models::Transaction;

/// Format a single transaction as "<n>. <Kind>: <amount> - <description>"
///
/// `position` is 1-based.
pub fn format_transaction_line(position: usize, txn: &Transaction, symbol: &str) -> String {
    format!(
        "{}. {}: {} - {}",
        position,
        txn.kind(),
        txn.amount().format_with_symbol(symbol),
        txn.description()
    )
}

/// Format the full history with a heading
pub fn format_transaction_history<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    symbol: &str,
) -> String {
    let mut output = String::from("Transaction History:");

    for (i, txn) in transactions.into_iter().enumerate() {
        output.push('\n');
        output.push_str(&format_transaction_line(i + 1, txn, symbol));
    }

    output
}
