//! Derived, presentation-ready views over ledger records.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::currency::format_labeled;
use crate::ledger::ExpenseRecord;

pub use expense_domain::DisplayRow;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filters, orders and annotates `records` for display.
///
/// Rows whose title contains `filter` (case-insensitively) are kept, newest date first.
/// Equal dates keep insertion order; dates that do not parse as `YYYY-MM-DD` sort last.
/// The output depends only on the arguments.
pub fn project(records: &[ExpenseRecord], filter: &str, currency: &str) -> Vec<DisplayRow> {
    let needle = filter.to_lowercase();
    let mut matched: Vec<(Option<NaiveDate>, &ExpenseRecord)> = records
        .iter()
        .filter(|record| needle.is_empty() || record.title.to_lowercase().contains(&needle))
        .map(|record| (sort_key(&record.date), record))
        .collect();

    matched.sort_by(|(a, _), (b, _)| newest_first(*a, *b));

    matched
        .into_iter()
        .map(|(_, record)| to_row(record, currency))
        .collect()
}

fn to_row(record: &ExpenseRecord, currency: &str) -> DisplayRow {
    DisplayRow {
        id: record.id,
        title: record.title.clone(),
        amount: format_labeled(currency, record.amount),
        date: record.date.clone(),
        category: record.category.clone(),
        badge: record.category_class().badge(),
    }
}

fn sort_key(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

fn newest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
