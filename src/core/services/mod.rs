pub mod expense_service;
pub mod export_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use export_service::ExportService;
pub use summary_service::{LedgerTotals, SummaryService};

use crate::errors::{ExportError, LedgerError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("{0}")]
    Invalid(String),
}
