//! Budget ledger model
//!
//! Holds one category's allocation and its append-only transaction
//! history, and derives balance and overrun status from that history.

use tracing::{debug, warn};

use super::money::Money;
use super::transaction::{Transaction, TransactionKind};
use crate::error::{LedgerError, LedgerResult};
use crate::reports::BudgetStatusReport;

/// Description recorded on the entry created at construction
pub const INITIAL_DESCRIPTION: &str = "Initial allocation";

/// A single budget category with its transaction history
///
/// The first entry is always the `Initial` allocation; entries are only
/// ever appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    category: String,
    allocated: Money,
    transactions: Vec<Transaction>,
}

impl Budget {
    /// Create a budget for `category` with an `allocated` amount
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if `allocated` is not positive.
    pub fn new(category: impl Into<String>, allocated: Money) -> LedgerResult<Self> {
        let category = category.into();
        let initial = Transaction::new(TransactionKind::Initial, allocated, INITIAL_DESCRIPTION)
            .inspect_err(|_| warn!(%category, %allocated, "rejected budget allocation"))?;

        debug!(%category, %allocated, "created budget");

        Ok(Self {
            category,
            allocated,
            transactions: vec![initial],
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn allocated(&self) -> Money {
        self.allocated
    }

    /// Append a transaction
    ///
    /// `Initial` is rejected with [`LedgerError::DuplicateInitial`]: the
    /// allocation entry is only ever created by [`Budget::new`]. Amounts
    /// that are not positive, or that would overflow the inflow or expense
    /// totals, are rejected too. On error the ledger is left unchanged.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<()> {
        if kind == TransactionKind::Initial {
            warn!(category = %self.category, "rejected second initial allocation");
            return Err(LedgerError::DuplicateInitial);
        }

        let description = description.into();
        let txn = Transaction::new(kind, amount, description).inspect_err(|_| {
            warn!(category = %self.category, %kind, %amount, "rejected transaction")
        })?;

        let running_total = if kind.is_inflow() {
            self.sum_where(TransactionKind::is_inflow)
        } else {
            self.total_expenses()
        };
        if running_total.checked_add(amount).is_none() {
            warn!(category = %self.category, %kind, %amount, "rejected overflowing transaction");
            return Err(LedgerError::Overflow {
                category: self.category.clone(),
                amount,
            });
        }

        let was_overrun = self.check_overrun();
        self.transactions.push(txn);
        debug!(category = %self.category, %kind, %amount, "recorded transaction");

        if !was_overrun && self.check_overrun() {
            warn!(
                category = %self.category,
                exceeded_by = %self.overrun_amount(),
                "budget overrun"
            );
        }

        Ok(())
    }

    /// Append an income entry
    pub fn add_income(
        &mut self,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<()> {
        self.add_transaction(TransactionKind::Income, amount, description)
    }

    /// Append an expense entry
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<()> {
        self.add_transaction(TransactionKind::Expense, amount, description)
    }

    fn sum_where(&self, pred: impl Fn(&TransactionKind) -> bool) -> Money {
        self.transactions
            .iter()
            .filter(|t| pred(&t.kind()))
            .map(Transaction::amount)
            .sum()
    }

    /// Income entries only, excluding the initial allocation
    pub fn total_income(&self) -> Money {
        self.sum_where(|k| *k == TransactionKind::Income)
    }

    pub fn total_expenses(&self) -> Money {
        self.sum_where(TransactionKind::is_outflow)
    }

    /// Allocation plus income minus expenses
    pub fn calculate_balance(&self) -> Money {
        self.sum_where(TransactionKind::is_inflow) - self.total_expenses()
    }

    /// True when expenses exceed the original allocation
    ///
    /// Income does not offset this check even though it raises the balance.
    pub fn check_overrun(&self) -> bool {
        self.total_expenses() > self.allocated
    }

    /// Allocation minus expenses (negative when overrun)
    pub fn remaining(&self) -> Money {
        self.allocated - self.total_expenses()
    }

    /// How far expenses exceed the allocation, or zero
    pub fn overrun_amount(&self) -> Money {
        if self.check_overrun() {
            self.total_expenses() - self.allocated
        } else {
            Money::zero()
        }
    }

    /// Render the status report using the default `$` symbol
    pub fn generate_report(&self) -> String {
        BudgetStatusReport::generate(self).format_terminal("$")
    }

    /// Copy of the transaction history in insertion order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Borrowed view of the history, for read-only callers
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }
}
