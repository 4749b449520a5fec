#![allow(dead_code)]

use expense_tracker::ledger::{ExpenseDraft, ExpenseRecord, Ledger};

/// Ledger with the given budget and no expenses.
pub fn ledger_with_budget(budget: f64) -> Ledger {
    let mut ledger = Ledger::new();
    ledger.set_budget(budget).expect("valid budget");
    ledger
}

pub fn draft(title: &str, amount: f64, date: &str, category: &str) -> ExpenseDraft {
    ExpenseDraft::new(title, amount, date, category)
}

/// Adds each `(title, amount, date, category)` in order and returns the stored records.
pub fn add_all(ledger: &mut Ledger, entries: &[(&str, f64, &str, &str)]) -> Vec<ExpenseRecord> {
    entries
        .iter()
        .map(|(title, amount, date, category)| {
            ledger
                .add_expense(draft(title, *amount, date, category))
                .expect("affordable expense")
        })
        .collect()
}
