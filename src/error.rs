//! Custom error types for ynab-ledger
//!
//! This module defines the error hierarchy for the converter using thiserror
//! for ergonomic error definitions. Every variant is fatal: a conversion
//! either produces a complete ledger or nothing at all. Non-fatal conditions
//! are reported as [`crate::models::Warning`] records instead.

use thiserror::Error;

/// The main error type for ynab-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A memo mentions a split but doesn't follow the `(Split i/n)` form
    #[error("Unexpected split memo: '{memo}'")]
    MalformedSplit { memo: String },

    /// A split group was flushed with a member count different from its total
    #[error("Missing a split: expected {expected} parts, found {found}")]
    IncompleteSplit { expected: usize, found: usize },

    /// A transfer appeared as one of several line items
    #[error("A split transfer is not supported (payee '{payee}')")]
    SplitTransfer { payee: String },

    /// Rows grouped into one transaction disagree on their grouping key
    #[error("Rows of one transaction disagree on flag, check number, date, cleared or running balance")]
    InconsistentGrouping,

    /// Account or transfer target without an Assets/Liabilities classification
    #[error("No account type specified for account '{account}'")]
    MissingAccountType { account: String },

    /// Amount text that can't be parsed with the active culture
    #[error("Invalid amount '{text}' for culture {culture}")]
    InvalidAmount { text: String, culture: String },

    /// Culture name not present in the built-in table
    #[error("Unsupported culture: {0}")]
    UnknownCulture(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),
}

impl LedgerError {
    /// Create a "missing account type" error
    pub fn missing_account_type(account: impl Into<String>) -> Self {
        Self::MissingAccountType {
            account: account.into(),
        }
    }

    /// Create an "invalid amount" error
    pub fn invalid_amount(text: impl Into<String>, culture: impl Into<String>) -> Self {
        Self::InvalidAmount {
            text: text.into(),
            culture: culture.into(),
        }
    }

    /// Check if this error comes from split reassembly
    pub fn is_split_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedSplit { .. } | Self::IncompleteSplit { .. } | Self::SplitTransfer { .. }
        )
    }

    /// Check if this is a lookup failure in the account classification
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MissingAccountType { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for ynab-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
