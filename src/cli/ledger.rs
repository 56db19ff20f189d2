//! Ledger construction from command-line arguments
//!
//! Builds a [`Budget`] from a category, an allocation and repeated
//! `--income` / `--expense` entries of the form `AMOUNT:DESCRIPTION`.

use clap::Args;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Money};

/// An `AMOUNT:DESCRIPTION` pair from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub amount: Money,
    pub description: String,
}

impl FromStr for LedgerEntry {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, description) = s.split_once(':').ok_or_else(|| {
            LedgerError::Validation(format!(
                "Invalid entry '{}': expected AMOUNT:DESCRIPTION (e.g. 1500.00:Google Ads)",
                s
            ))
        })?;

        let amount = Money::parse(amount)
            .map_err(|e| LedgerError::Validation(format!("Invalid entry '{}': {}", s, e)))?;

        Ok(Self {
            amount,
            description: description.to_string(),
        })
    }
}

/// Arguments describing one ledger
#[derive(Args, Debug, Clone)]
pub struct LedgerArgs {
    /// Budget category name
    pub category: String,

    /// Allocated amount (e.g., "5000" or "5000.00")
    #[arg(allow_hyphen_values = true)]
    pub allocated: Money,

    /// Income entry as AMOUNT:DESCRIPTION (repeatable)
    #[arg(short, long = "income", value_name = "AMOUNT:DESC", allow_hyphen_values = true)]
    pub incomes: Vec<LedgerEntry>,

    /// Expense entry as AMOUNT:DESCRIPTION (repeatable)
    #[arg(short, long = "expense", value_name = "AMOUNT:DESC", allow_hyphen_values = true)]
    pub expenses: Vec<LedgerEntry>,
}

impl LedgerArgs {
    /// Build the ledger: incomes first, then expenses, each in the order given
    pub fn build(&self) -> LedgerResult<Budget> {
        let mut budget = Budget::new(self.category.as_str(), self.allocated)?;

        for entry in &self.incomes {
            budget.add_income(entry.amount, entry.description.as_str())?;
        }
        for entry in &self.expenses {
            budget.add_expense(entry.amount, entry.description.as_str())?;
        }

        Ok(budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(s: &str) -> LedgerEntry {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_entry() {
        let e = entry("1500.00:Google Ads");
        assert_eq!(e.amount.cents(), 150000);
        assert_eq!(e.description, "Google Ads");
    }

    #[test]
    fn test_parse_entry_keeps_colons_in_description() {
        let e = entry("12:Lunch: team offsite");
        assert_eq!(e.description, "Lunch: team offsite");
        assert_eq!(entry("3:").description, "");
    }

    #[test]
    fn test_parse_entry_errors() {
        assert!("1500".parse::<LedgerEntry>().unwrap_err().is_validation());
        assert!("abc:Ads".parse::<LedgerEntry>().unwrap_err().is_validation());
    }

    #[test]
    fn test_build_ledger() {
        let args = LedgerArgs {
            category: "Marketing".into(),
            allocated: Money::from_cents(500000),
            incomes: vec![entry("200:Sponsorship")],
            expenses: vec![entry("1500:Google Ads"), entry("800:Social Media Campaign")],
        };

        let budget = args.build().unwrap();
        assert_eq!(budget.transactions().len(), 4);
        assert_eq!(budget.total_expenses().cents(), 230000);
        assert_eq!(budget.calculate_balance().cents(), 290000);
    }

    #[test]
    fn test_build_rejects_non_positive_entry() {
        let args = LedgerArgs {
            category: "Ops".into(),
            allocated: Money::from_cents(1000),
            incomes: vec![],
            expenses: vec![entry("0:Nothing")],
        };
        assert!(args.build().unwrap_err().is_invalid_amount());
    }
}
