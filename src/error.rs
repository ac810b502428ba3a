use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected user input. The store is left untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Please enter an amount")]
    MissingAmount,
    #[error("Please enter a valid amount (got '{0}')")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),
    #[error("Please select a date")]
    MissingDate,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown category '{0}' (food, transport, entertainment, bills, shopping)")]
    UnknownCategory(String),
    #[error("Unknown filter '{0}' (all or a category)")]
    UnknownFilter(String),
}

/// Failure to mirror the ledger into storage. Never fatal: the in-memory store stays authoritative.
#[derive(Debug, Error)]
pub(crate) enum PersistenceError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
