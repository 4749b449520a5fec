//! expense-domain
//!
//! Pure domain models for the expense tracker (expenses, categories, display rows).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod expense;
pub mod row;

pub use category::*;
pub use common::*;
pub use expense::*;
pub use row::*;
