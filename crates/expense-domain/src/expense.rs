//! Domain models for expense records.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::common::*;

/// A single expense logged against the budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub title: String,
    pub amount: f64,
    /// Kept exactly as entered; only consulted for ordering.
    pub date: String,
    /// Kept exactly as entered, even when outside the known [`Category`] set.
    pub category: String,
}

impl ExpenseRecord {
    /// Materialises a draft under a freshly generated identifier.
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        Self {
            id: ExpenseId::new(),
            title: draft.title.trim().to_string(),
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
        }
    }

    pub fn category_class(&self) -> Category {
        Category::classify(&self.category)
    }

    /// Returns the editable fields of this record.
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            title: self.title.clone(),
            amount: self.amount,
            date: self.date.clone(),
            category: self.category.clone(),
        }
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// User-supplied fields for a new or replacement expense, not yet validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    pub date: String,
    pub category: String,
}

impl ExpenseDraft {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            date: date.into(),
            category: category.into(),
        }
    }
}
