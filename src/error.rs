//! Custom error types for the budget ledger
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{Money, MoneyParseError};

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A transaction (or the initial allocation) was given a non-positive amount
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: Money },

    /// Appending would push a running total past the representable range
    #[error("Amount {amount} would overflow the totals of budget '{category}'")]
    Overflow { category: String, amount: Money },

    /// The ledger already holds its initial allocation
    #[error("Ledger already has an initial allocation; use income or expense entries")]
    DuplicateInitial,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create an "invalid amount" error
    pub fn invalid_amount(amount: Money) -> Self {
        Self::InvalidAmount { amount }
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<MoneyParseError> for LedgerError {
    fn from(err: MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
