//! Transaction listing CLI command
//!
//! Prints the ledger history as text or in an export format.

use clap::ValueEnum;
use std::io::Write;

use super::ledger::LedgerArgs;
use crate::config::Settings;
use crate::display::format_transaction_history;
use crate::error::LedgerResult;
use crate::export::{export_ledger_json, export_ledger_yaml, export_transactions_csv};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListFormat {
    /// Numbered lines for the terminal
    #[default]
    Text,
    /// CSV (type, amount, description)
    Csv,
    /// JSON ledger document
    Json,
    /// YAML ledger document
    Yaml,
}

/// Print the transaction history for a ledger described by `args`
pub fn handle_transactions_command<W: Write>(
    settings: &Settings,
    args: &LedgerArgs,
    format: ListFormat,
    pretty: bool,
    out: &mut W,
) -> LedgerResult<()> {
    let budget = args.build()?;

    match format {
        ListFormat::Text => {
            writeln!(
                out,
                "{}",
                format_transaction_history(budget.iter(), &settings.currency_symbol)
            )?;
        }
        ListFormat::Csv => export_transactions_csv(budget.iter(), &mut *out)?,
        ListFormat::Json => {
            export_ledger_json(&budget, &mut *out, pretty)?;
            writeln!(out)?;
        }
        ListFormat::Yaml => export_ledger_yaml(&budget, &mut *out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn args() -> LedgerArgs {
        LedgerArgs {
            category: "Marketing".into(),
            allocated: Money::from_cents(500000),
            incomes: vec!["200:Sponsorship".parse().unwrap()],
            expenses: vec!["1500:Google Ads".parse().unwrap()],
        }
    }

    fn run(format: ListFormat) -> String {
        let mut out = Vec::new();
        handle_transactions_command(&Settings::default(), &args(), format, false, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_listing() {
        assert_eq!(
            run(ListFormat::Text),
            "Transaction History:\n\
             1. Initial: $5000.00 - Initial allocation\n\
             2. Income: $200.00 - Sponsorship\n\
             3. Expense: $1500.00 - Google Ads\n"
        );
    }

    #[test]
    fn test_csv_listing() {
        let text = run(ListFormat::Csv);
        assert!(text.starts_with("type,amount,description\n"));
        assert!(text.contains("income,200.00,Sponsorship\n"));
    }

    #[test]
    fn test_json_listing() {
        let text = run(ListFormat::Json);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["transactions"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_yaml_listing() {
        assert!(run(ListFormat::Yaml).contains("description: Google Ads"));
    }
}
