//! Reports module for the budget ledger
//!
//! Provides the budget status report: allocation, spending, balance and
//! overrun state for a single category.

pub mod budget_status;

pub use budget_status::BudgetStatusReport;
