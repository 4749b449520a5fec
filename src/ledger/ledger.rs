use tracing::debug;

use super::validation::{validate_budget, validate_draft};
use super::{Amounted, ExpenseDraft, ExpenseId, ExpenseRecord};
use crate::errors::{LedgerError, Result};

/// In-memory store of the budget and the expenses logged against it.
///
/// The balance is never stored; it is always `budget - sum(amounts)`.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    budget: Option<f64>,
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the budget. Only the first successful call takes effect.
    pub fn set_budget(&mut self, amount: f64) -> Result<()> {
        if self.budget.is_some() {
            return Err(LedgerError::AlreadySet);
        }
        validate_budget(amount)?;
        self.budget = Some(amount);
        debug!(amount, "budget set");
        Ok(())
    }

    pub fn budget(&self) -> Option<f64> {
        self.budget
    }

    pub fn is_budget_set(&self) -> bool {
        self.budget.is_some()
    }

    pub fn total_expenses(&self) -> f64 {
        self.records.iter().map(Amounted::amount).sum()
    }

    pub fn balance(&self) -> f64 {
        self.budget.unwrap_or(0.0) - self.total_expenses()
    }

    /// Validates and appends a new expense, returning the stored record.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        validate_draft(&draft)?;
        ensure_affordable(draft.amount, self.balance())?;
        Ok(self.push(draft))
    }

    /// Removes the expense with `id`; returns whether anything was removed.
    pub fn delete_expense(&mut self, id: ExpenseId) -> bool {
        match self.position(id) {
            Some(index) => {
                let removed = self.records.remove(index);
                debug!(%id, amount = removed.amount, "expense deleted");
                true
            }
            None => false,
        }
    }

    /// Replaces the expense with `id` by a new record built from `draft`.
    ///
    /// The replacement gets a new identifier and moves to the end of insertion order.
    /// The old amount counts as freed when checking affordability. Nothing changes
    /// unless the replacement is valid and affordable.
    pub fn edit_expense(&mut self, id: ExpenseId, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        let index = self.position(id).ok_or(LedgerError::NotFound(id))?;
        validate_draft(&draft)?;
        let available = self.balance() + self.records[index].amount;
        ensure_affordable(draft.amount, available)?;

        self.records.remove(index);
        let record = self.push(draft);
        debug!(old = %id, new = %record.id, "expense replaced");
        Ok(record)
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Records whose identifier starts with `prefix`.
    pub fn matching_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a ExpenseRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.id.matches_prefix(prefix))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    fn push(&mut self, draft: ExpenseDraft) -> ExpenseRecord {
        let record = ExpenseRecord::from_draft(draft);
        debug!(id = %record.id, amount = record.amount, "expense added");
        self.records.push(record.clone());
        record
    }
}

fn ensure_affordable(amount: f64, balance: f64) -> Result<()> {
    if amount > balance {
        return Err(LedgerError::InsufficientBalance { amount, balance });
    }
    Ok(())
}
