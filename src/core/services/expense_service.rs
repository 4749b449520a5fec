//! Entry-boundary helpers for budget and expense mutations.

use tracing::{info, warn};

use crate::core::input::{parse_amount, ExpenseInput};
use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{ExpenseId, ExpenseRecord, Ledger};

/// Applies raw user input to a ledger, logging refused operations.
pub struct ExpenseService;

impl ExpenseService {
    /// Parses and applies the one-time budget.
    pub fn set_budget(ledger: &mut Ledger, raw_amount: &str) -> ServiceResult<f64> {
        let result = parse_amount(raw_amount).and_then(|amount| {
            ledger.set_budget(amount)?;
            Ok(amount)
        });
        match result {
            Ok(amount) => {
                info!(amount, "budget locked");
                Ok(amount)
            }
            Err(err) => {
                warn!(error = %err, "budget refused");
                Err(err.into())
            }
        }
    }

    /// Adds an expense built from raw field text.
    pub fn add(ledger: &mut Ledger, input: ExpenseInput) -> ServiceResult<ExpenseRecord> {
        input
            .into_draft()
            .and_then(|draft| ledger.add_expense(draft))
            .map_err(|err| {
                warn!(error = %err, "expense refused");
                ServiceError::from(err)
            })
    }

    /// Replaces the expense `id` with a record built from raw field text.
    pub fn edit(
        ledger: &mut Ledger,
        id: ExpenseId,
        input: ExpenseInput,
    ) -> ServiceResult<ExpenseRecord> {
        input
            .into_draft()
            .and_then(|draft| ledger.edit_expense(id, draft))
            .map_err(|err| {
                warn!(%id, error = %err, "edit refused");
                ServiceError::from(err)
            })
    }

    /// Removes the expense `id`; returns whether it existed.
    pub fn remove(ledger: &mut Ledger, id: ExpenseId) -> bool {
        ledger.delete_expense(id)
    }
}
