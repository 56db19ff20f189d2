//! Transaction model
//!
//! A ledger entry is one of three kinds (initial allocation, income,
//! expense) with a strictly positive amount and a free-text description.
//! Entries are immutable once created.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Kind of ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// The allocation recorded when the budget is created
    Initial,
    /// Supplemental money added to the category
    Income,
    /// Money spent from the category
    Expense,
}

impl TransactionKind {
    /// Lowercase tag used in exports ("initial", "income", "expense")
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Whether this kind adds to the balance
    pub fn is_inflow(&self) -> bool {
        matches!(self, Self::Initial | Self::Income)
    }

    /// Whether this kind subtracts from the balance
    pub fn is_outflow(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "Initial"),
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "initial" => Ok(Self::Initial),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "Unknown transaction type '{}': expected initial, income or expense",
                other
            ))),
        }
    }
}

/// A single ledger entry
///
/// Deserialization goes through [`Transaction::new`], so a non-positive
/// amount is rejected there as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: Money,
    description: String,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if `amount` is zero or negative.
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::invalid_amount(amount));
        }

        Ok(Self {
            kind,
            amount,
            description: description.into(),
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Unvalidated wire form of [`Transaction`]
#[derive(Deserialize)]
struct RawTransaction {
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: Money,
    description: String,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = LedgerError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        Transaction::new(raw.kind, raw.amount, raw.description)
    }
}
