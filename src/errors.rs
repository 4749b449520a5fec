use thiserror::Error;

use crate::ledger::ExpenseId;

/// Error type that captures rejected ledger operations.
///
/// Every variant is recoverable: the ledger is left exactly as it was before the call.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Insufficient balance: expense of {amount} exceeds remaining balance of {balance}")]
    InsufficientBalance { amount: f64, balance: f64 },
    #[error("Budget has already been set")]
    AlreadySet,
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failures while rendering or saving a CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl<W> From<csv::IntoInnerError<W>> for ExportError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        ExportError::Io(err.into_error())
    }
}
