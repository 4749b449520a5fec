mod common;

use common::{add_all, draft, ledger_with_budget};
use expense_tracker::errors::LedgerError;
use expense_tracker::ledger::{ExpenseId, Ledger};

#[test]
fn lunch_then_unaffordable_trip() {
    let mut ledger = ledger_with_budget(100.0);

    ledger
        .add_expense(draft("Lunch", 20.0, "2024-01-01", "Food"))
        .unwrap();
    assert_eq!(ledger.balance(), 80.0);

    let err = ledger
        .add_expense(draft("Trip", 90.0, "2024-01-02", "Travel"))
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::InsufficientBalance {
            amount: 90.0,
            balance: 80.0
        }
    );
    assert_eq!(ledger.balance(), 80.0);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn balance_tracks_every_valid_add() {
    let mut ledger = ledger_with_budget(500.0);
    let entries = [
        ("Coffee", 3.5, "2024-01-01", "Food"),
        ("Train", 42.0, "2024-01-02", "Travel"),
        ("Shoes", 80.25, "2024-01-03", "Shopping"),
        ("Power", 61.0, "2024-01-04", "Bills"),
    ];

    let mut spent = 0.0;
    for (title, amount, date, category) in entries {
        ledger
            .add_expense(draft(title, amount, date, category))
            .unwrap();
        spent += amount;
        assert_eq!(ledger.balance(), 500.0 - spent);
        assert_eq!(ledger.total_expenses(), spent);
    }
}

#[test]
fn spending_the_exact_balance_is_allowed() {
    let mut ledger = ledger_with_budget(50.0);
    add_all(&mut ledger, &[("Groceries", 50.0, "2024-01-01", "Food")]);
    assert_eq!(ledger.balance(), 0.0);

    let err = ledger
        .add_expense(draft("Gum", 0.5, "2024-01-02", "Food"))
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
}

#[test]
fn without_budget_every_expense_is_refused() {
    let mut ledger = Ledger::new();
    let err = ledger
        .add_expense(draft("Lunch", 1.0, "2024-01-01", "Food"))
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientBalance { balance, .. } if balance == 0.0));
    assert!(ledger.is_empty());
}

#[test]
fn budget_is_set_once() {
    let mut ledger = ledger_with_budget(100.0);
    assert_eq!(ledger.set_budget(200.0), Err(LedgerError::AlreadySet));
    assert_eq!(ledger.budget(), Some(100.0));
}

#[test]
fn second_delete_is_a_noop() {
    let mut ledger = ledger_with_budget(100.0);
    let records = add_all(&mut ledger, &[("Lunch", 20.0, "2024-01-01", "Food")]);
    let id = records[0].id;

    assert!(ledger.delete_expense(id));
    assert_eq!(ledger.balance(), 100.0);
    assert!(!ledger.delete_expense(id));
    assert_eq!(ledger.balance(), 100.0);
}

#[test]
fn ids_are_never_reused() {
    let mut ledger = ledger_with_budget(100.0);
    let first = add_all(&mut ledger, &[("Lunch", 20.0, "2024-01-01", "Food")]);
    ledger.delete_expense(first[0].id);
    let second = add_all(&mut ledger, &[("Lunch", 20.0, "2024-01-01", "Food")]);
    assert_ne!(first[0].id, second[0].id);
}

#[test]
fn failed_edits_keep_the_original_record() {
    let mut ledger = ledger_with_budget(100.0);
    let records = add_all(
        &mut ledger,
        &[
            ("Lunch", 20.0, "2024-01-01", "Food"),
            ("Taxi", 30.0, "2024-01-02", "Travel"),
        ],
    );
    let before = ledger.clone();

    let invalid = ledger.edit_expense(records[0].id, draft("   ", 10.0, "2024-01-01", "Food"));
    assert!(matches!(invalid, Err(LedgerError::InvalidInput(_))));

    // 50 free plus the 20 released by the old amount.
    let unaffordable = ledger.edit_expense(records[0].id, draft("Feast", 70.5, "2024-01-01", "Food"));
    assert!(matches!(
        unaffordable,
        Err(LedgerError::InsufficientBalance { .. })
    ));

    assert_eq!(ledger.records(), before.records());
    assert_eq!(ledger.balance(), 50.0);
}

#[test]
fn edit_can_spend_the_released_amount() {
    let mut ledger = ledger_with_budget(100.0);
    let records = add_all(
        &mut ledger,
        &[
            ("Lunch", 20.0, "2024-01-01", "Food"),
            ("Taxi", 30.0, "2024-01-02", "Travel"),
        ],
    );

    let replacement = ledger
        .edit_expense(records[0].id, draft("Feast", 70.0, "2024-01-01", "Food"))
        .unwrap();

    assert_ne!(replacement.id, records[0].id);
    assert!(ledger.expense(records[0].id).is_none());
    assert_eq!(ledger.records().last(), Some(&replacement));
    assert_eq!(ledger.records()[0].title, "Taxi");
    assert_eq!(ledger.balance(), 0.0);
}

#[test]
fn editing_an_unknown_id_is_not_found() {
    let mut ledger = ledger_with_budget(100.0);
    let id = ExpenseId::new();
    assert_eq!(
        ledger.edit_expense(id, draft("Lunch", 1.0, "2024-01-01", "Food")),
        Err(LedgerError::NotFound(id))
    );
}
