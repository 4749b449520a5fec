use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_tracker::export::to_csv;
use expense_tracker::ledger::{ExpenseDraft, Ledger};
use expense_tracker::view::project;

const CATEGORIES: [&str; 6] = ["Food", "Travel", "Shopping", "Bills", "General", "Misc"];

fn build_sample_ledger(count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    if ledger.set_budget(count as f64 * 100.0).is_err() {
        return ledger;
    }

    for idx in 0..count {
        let date = format!("2024-{:02}-{:02}", idx % 12 + 1, idx % 28 + 1);
        let draft = ExpenseDraft::new(
            format!("Expense {idx}"),
            1.0 + (idx % 50) as f64,
            date,
            CATEGORIES[idx % CATEGORIES.len()],
        );
        if ledger.add_expense(draft).is_err() {
            break;
        }
    }
    ledger
}

fn bench_projection(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("project_10k_unfiltered", |b| {
        b.iter(|| project(black_box(ledger.records()), "", "USD"))
    });

    c.bench_function("project_10k_filtered", |b| {
        b.iter(|| project(black_box(ledger.records()), "expense 9", "USD"))
    });

    c.bench_function("export_csv_10k", |b| {
        b.iter(|| to_csv(black_box(ledger.records())))
    });
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
