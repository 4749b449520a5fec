//! Budget ledger: expense records, the one-time budget, and the derived balance.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod validation;

pub use expense_domain::{
    Amounted, BadgeClass, Category, ExpenseDraft, ExpenseId, ExpenseRecord, SHORT_ID_LEN,
};
pub use ledger::Ledger;
