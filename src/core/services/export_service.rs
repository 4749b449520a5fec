use std::path::Path;

use tracing::info;

use crate::core::services::{ServiceError, ServiceResult};
use crate::export::write_csv;
use crate::ledger::Ledger;

pub struct ExportService;

impl ExportService {
    /// Saves the ledger as CSV. An empty ledger is refused rather than exported.
    pub fn export(ledger: &Ledger, path: &Path) -> ServiceResult<usize> {
        if ledger.is_empty() {
            return Err(ServiceError::Invalid("No expenses to export!".into()));
        }
        write_csv(ledger.records(), path)?;
        info!(path = %path.display(), rows = ledger.len(), "expenses exported");
        Ok(ledger.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseDraft;
    use tempfile::tempdir;

    #[test]
    fn refuses_empty_ledger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        let err = ExportService::export(&Ledger::new(), &path).unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(ref msg) if msg.contains("No expenses")));
        assert!(!path.exists());
    }

    #[test]
    fn writes_every_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        let mut ledger = Ledger::new();
        ledger.set_budget(50.0).unwrap();
        ledger
            .add_expense(ExpenseDraft::new("Tea", 2.0, "2024-01-01", "Food"))
            .unwrap();

        assert_eq!(ExportService::export(&ledger, &path).unwrap(), 1);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Title,Amount,Date,Category\nTea,2,2024-01-01,Food");
    }
}
