//! Core data models for the budget ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: money amounts, transactions and the budget itself.

pub mod budget;
pub mod money;
pub mod transaction;

pub use budget::{Budget, INITIAL_DESCRIPTION};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
