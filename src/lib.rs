#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps a session ledger of expenses against a fixed budget,
//! projects it into display rows, and exports it as CSV.

pub mod cli;
pub mod core;
pub mod currency;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense tracker tracing initialized.");
    });
}
