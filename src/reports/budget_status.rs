//! Budget Status Report
//!
//! Snapshots a ledger's allocation, spending and balance and renders it
//! either as terminal text or as a one-row CSV summary.

use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Money};

/// Derived figures for one budget at the time of generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatusReport {
    /// Category name
    pub category: String,
    /// Original allocation
    pub allocated: Money,
    /// Income entries, excluding the initial allocation
    pub total_income: Money,
    /// Sum of all expense entries
    pub total_expenses: Money,
    /// Allocation plus income minus expenses
    pub balance: Money,
    /// Whether expenses exceed the allocation
    pub overrun: bool,
}

/// CSV row layout
#[derive(Serialize)]
struct SummaryRow<'a> {
    category: &'a str,
    allocated: String,
    total_income: String,
    total_expenses: String,
    balance: String,
    overrun: bool,
    remaining: String,
}

impl BudgetStatusReport {
    /// Generate a report for the current state of `budget`
    pub fn generate(budget: &Budget) -> Self {
        Self {
            category: budget.category().to_string(),
            allocated: budget.allocated(),
            total_income: budget.total_income(),
            total_expenses: budget.total_expenses(),
            balance: budget.calculate_balance(),
            overrun: budget.check_overrun(),
        }
    }

    /// Allocation minus expenses; negative when overrun
    pub fn remaining(&self) -> Money {
        self.allocated - self.total_expenses
    }

    /// How far expenses exceed the allocation
    pub fn exceeded_by(&self) -> Money {
        self.total_expenses - self.allocated
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut lines = vec![
            format!("Budget Category: {}", self.category),
            format!("Allocated Amount: {}", self.allocated.format_with_symbol(symbol)),
            format!("Total Expenses: {}", self.total_expenses.format_with_symbol(symbol)),
            format!("Current Balance: {}", self.balance.format_with_symbol(symbol)),
        ];

        if self.overrun {
            lines.push(format!(
                "⚠️ BUDGET OVERRUN! Exceeded by {}",
                self.exceeded_by().format_with_symbol(symbol)
            ));
        } else {
            lines.push(format!(
                "Remaining Budget: {}",
                self.remaining().format_with_symbol(symbol)
            ));
        }

        lines.join("\n")
    }

    /// Export the report as a single-row CSV summary
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .serialize(SummaryRow {
                category: &self.category,
                allocated: self.allocated.format_plain(),
                total_income: self.total_income.format_plain(),
                total_expenses: self.total_expenses.format_plain(),
                balance: self.balance.format_plain(),
                overrun: self.overrun,
                remaining: self.remaining().format_plain(),
            })
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        csv_writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        Ok(())
    }
}
