//! Data-entry boundary: turns raw field text into validated primitives.

use crate::errors::{LedgerError, Result};
use crate::ledger::ExpenseDraft;

/// Parses a decimal amount as typed by the user.
///
/// Only syntax is checked here; positivity is enforced by the ledger.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidInput("amount is required".into()));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| LedgerError::InvalidInput(format!("`{trimmed}` is not a number")))?;
    if !value.is_finite() {
        return Err(LedgerError::InvalidInput(format!(
            "`{trimmed}` is not a finite number"
        )));
    }
    Ok(value)
}

/// Raw expense fields exactly as they arrive from the entry form or command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: String,
    pub date: String,
    pub category: String,
}

impl ExpenseInput {
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            date: date.into(),
            category: category.into(),
        }
    }

    /// Parses the amount and trims surrounding whitespace from the text fields.
    ///
    /// Only the edges are trimmed: inner spacing and letter case of the date and
    /// category reach the ledger unchanged.
    pub fn into_draft(self) -> Result<ExpenseDraft> {
        let amount = parse_amount(&self.amount)?;
        Ok(ExpenseDraft {
            title: self.title.trim().to_string(),
            amount,
            date: self.date.trim().to_string(),
            category: self.category.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_decimals() {
        assert_eq!(parse_amount(" 12.50 ").unwrap(), 12.5);
        assert_eq!(parse_amount("100").unwrap(), 100.0);
    }

    #[test]
    fn rejects_blank_and_garbage() {
        for raw in ["", "   ", "abc", "12,5", "NaN", "inf"] {
            assert!(
                matches!(parse_amount(raw), Err(LedgerError::InvalidInput(_))),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn negative_amounts_parse_and_are_left_to_the_ledger() {
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
    }

    #[test]
    fn into_draft_trims_text_fields() {
        let draft = ExpenseInput::new(" Lunch ", "20", " 2024-01-01 ", " Food ")
            .into_draft()
            .unwrap();
        assert_eq!(draft, ExpenseDraft::new("Lunch", 20.0, "2024-01-01", "Food"));
    }

    #[test]
    fn into_draft_keeps_inner_text_of_date_and_category() {
        let draft = ExpenseInput::new("Tea", "2", " 1 Jan  2024 ", " eating OUT ")
            .into_draft()
            .unwrap();
        assert_eq!(draft.date, "1 Jan  2024");
        assert_eq!(draft.category, "eating OUT");
    }
}
