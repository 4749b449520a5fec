//! Presentation rows derived from expense records.

use serde::Serialize;

use crate::category::{BadgeClass, Category};
use crate::common::ExpenseId;

/// Presentation-ready view of one expense. Never persisted; rebuilt on every projection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayRow {
    /// Identifier of the originating record, used to wire edit/delete actions.
    pub id: ExpenseId,
    pub title: String,
    /// `"<currency label> <amount>"`.
    pub amount: String,
    pub date: String,
    pub category: String,
    pub badge: BadgeClass,
}

impl DisplayRow {
    pub fn badge_category(&self) -> Category {
        self.badge.category()
    }
}
