use crate::errors::{LedgerError, Result};
use crate::ledger::ExpenseDraft;

/// Checks that a budget amount is a positive finite number.
pub fn validate_budget(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::InvalidInput(format!(
            "budget must be a positive number, got {amount}"
        )));
    }
    Ok(())
}

/// Checks every required expense field; the first failing field is reported.
pub fn validate_draft(draft: &ExpenseDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(LedgerError::InvalidInput("title must not be empty".into()));
    }
    if !draft.amount.is_finite() || draft.amount <= 0.0 {
        return Err(LedgerError::InvalidInput(format!(
            "amount must be a positive number, got {}",
            draft.amount
        )));
    }
    if draft.date.trim().is_empty() {
        return Err(LedgerError::InvalidInput("date is required".into()));
    }
    if draft.category.trim().is_empty() {
        return Err(LedgerError::InvalidInput("category is required".into()));
    }
    Ok(())
}
