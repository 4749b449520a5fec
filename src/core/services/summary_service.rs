use serde::Serialize;

use crate::ledger::Ledger;
use crate::view::{project, DisplayRow};

/// Figures consumed by the render boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedgerTotals {
    pub budget: f64,
    pub expenses: f64,
    pub balance: f64,
}

pub struct SummaryService;

impl SummaryService {
    pub fn totals(ledger: &Ledger) -> LedgerTotals {
        LedgerTotals {
            budget: ledger.budget().unwrap_or(0.0),
            expenses: ledger.total_expenses(),
            balance: ledger.balance(),
        }
    }

    pub fn rows(ledger: &Ledger, filter: &str, currency: &str) -> Vec<DisplayRow> {
        project(ledger.records(), filter, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseDraft;

    #[test]
    fn totals_are_consistent() {
        let mut ledger = Ledger::new();
        ledger.set_budget(100.0).unwrap();
        ledger
            .add_expense(ExpenseDraft::new("Lunch", 20.0, "2024-01-01", "Food"))
            .unwrap();

        let totals = SummaryService::totals(&ledger);
        assert_eq!(
            totals,
            LedgerTotals {
                budget: 100.0,
                expenses: 20.0,
                balance: 80.0
            }
        );
        assert_eq!(totals.budget - totals.expenses, totals.balance);
    }

    #[test]
    fn empty_ledger_reports_zeroes() {
        let totals = SummaryService::totals(&Ledger::new());
        assert_eq!(totals.budget, 0.0);
        assert_eq!(totals.expenses, 0.0);
        assert_eq!(totals.balance, 0.0);
    }

    #[test]
    fn totals_serialize_as_flat_object() {
        let mut ledger = Ledger::new();
        ledger.set_budget(50.0).unwrap();
        let json = serde_json::to_value(SummaryService::totals(&ledger)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "budget": 50.0, "expenses": 0.0, "balance": 50.0 })
        );
    }
}
