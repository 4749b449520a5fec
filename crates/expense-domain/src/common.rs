//! Shared identifiers and the amount contract for ledger entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the abbreviated identifier shown to users.
pub const SHORT_ID_LEN: usize = 8;

/// Opaque identifier of an expense. Freshly generated for every created record
/// and never handed out twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the abbreviated form used in listings.
    pub fn short(&self) -> String {
        let mut short = self.0.simple().to_string();
        short.truncate(SHORT_ID_LEN);
        short
    }

    /// Returns `true` when `prefix` matches the start of the simple (dash-less) form.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let needle = prefix.trim().replace('-', "").to_ascii_lowercase();
        !needle.is_empty() && self.0.simple().to_string().starts_with(&needle)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ExpenseId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}
