//! budget-ledger - single-category budget tracking
//!
//! This library tracks one budget category's allocation together with an
//! append-only history of income and expense entries. It derives the
//! running balance, flags when expenses exceed the original allocation,
//! and renders a plain-text status report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, transactions and the budget ledger
//! - `reports`: Budget status report
//! - `display`: Terminal formatting for the transaction history
//! - `export`: CSV, JSON and YAML output
//! - `config`: User settings
//! - `cli`: Command handlers for the `budget` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budget_ledger::models::{Budget, Money};
//!
//! let mut budget = Budget::new("Marketing", Money::from_f64(5000.0)?)?;
//! budget.add_income(Money::from_f64(200.0)?, "Sponsorship")?;
//! budget.add_expense(Money::from_f64(5300.0)?, "Campaigns")?;
//!
//! assert_eq!(budget.calculate_balance(), Money::from_f64(-100.0)?);
//! assert!(budget.check_overrun());
//! # Ok::<(), budget_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;

pub use error::{LedgerError, LedgerResult};
pub use models::{Budget, Money, Transaction, TransactionKind};
