//! Configuration module for the budget ledger
//!
//! Display and logging preferences, optionally loaded from a JSON file.

pub mod settings;

pub use settings::Settings;
