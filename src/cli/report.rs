//! Report CLI commands
//!
//! Prints the budget status report for a ledger built from arguments, and
//! the demonstration run.

use clap::ValueEnum;
use std::io::Write;
use tracing::info;

use super::ledger::LedgerArgs;
use crate::config::Settings;
use crate::display::format_transaction_history;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Money};
use crate::reports::BudgetStatusReport;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Plain-text status block
    #[default]
    Text,
    /// One-row CSV summary
    Csv,
}

/// Print the status report for a ledger described by `args`
pub fn handle_report_command<W: Write>(
    settings: &Settings,
    args: &LedgerArgs,
    format: ReportFormat,
    out: &mut W,
) -> LedgerResult<()> {
    let budget = args.build()?;

    match format {
        ReportFormat::Text => write_report(settings, &budget, out),
        ReportFormat::Csv => BudgetStatusReport::generate(&budget).export_csv(&mut *out),
    }
}

/// Build the sample Marketing ledger used by `budget demo`
pub fn demo_budget() -> LedgerResult<Budget> {
    let mut budget = Budget::new("Marketing", Money::from_dollars_cents(5000, 0))?;

    budget.add_income(Money::from_dollars_cents(200, 0), "Sponsorship")?;
    budget.add_expense(Money::from_dollars_cents(1500, 0), "Google Ads")?;
    budget.add_expense(Money::from_dollars_cents(800, 0), "Social Media Campaign")?;
    budget.add_expense(Money::from_dollars_cents(3000, 0), "Influencer Partnership")?;

    Ok(budget)
}

/// Run the demonstration: report, blank line, transaction history
pub fn handle_demo_command<W: Write>(settings: &Settings, out: &mut W) -> LedgerResult<()> {
    let budget = demo_budget()?;
    info!(category = budget.category(), "running demo ledger");

    write_report(settings, &budget, out)?;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format_transaction_history(budget.iter(), &settings.currency_symbol)
    )?;

    Ok(())
}

fn write_report<W: Write>(settings: &Settings, budget: &Budget, out: &mut W) -> LedgerResult<()> {
    let report = BudgetStatusReport::generate(budget);
    writeln!(out, "{}", report.format_terminal(&settings.currency_symbol))
        .map_err(|e| LedgerError::Io(format!("Failed to write report: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        handle_demo_command(&Settings::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Budget Category: Marketing\n"));
        assert!(
            text.contains("⚠️ BUDGET OVERRUN! Exceeded by $300.00\n\nTransaction History:\n")
        );
        assert!(text.contains("1. Initial: $5000.00 - Initial allocation\n"));
        assert!(text.ends_with("5. Expense: $3000.00 - Influencer Partnership\n"));
    }

    #[test]
    fn test_report_with_custom_symbol() {
        let settings = Settings {
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        let args = LedgerArgs {
            category: "Supplies".into(),
            allocated: Money::from_cents(100000),
            incomes: vec![],
            expenses: vec!["400:Paper".parse().unwrap()],
        };

        let mut out = Vec::new();
        handle_report_command(&settings, &args, ReportFormat::Text, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Remaining Budget: €600.00"));
    }

    #[test]
    fn test_report_csv_summary() {
        let args = LedgerArgs {
            category: "Marketing".into(),
            allocated: Money::from_cents(500000),
            incomes: vec!["200:Sponsorship".parse().unwrap()],
            expenses: vec!["5300:Campaigns".parse().unwrap()],
        };

        let mut out = Vec::new();
        handle_report_command(&Settings::default(), &args, ReportFormat::Csv, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "category,allocated,total_income,total_expenses,balance,overrun,remaining\n\
             Marketing,5000.00,200.00,5300.00,-100.00,true,-300.00\n"
        );
    }
}
