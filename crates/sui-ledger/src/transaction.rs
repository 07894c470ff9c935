//! Normalized five-field ledger entry.

use serde::Serialize;

/// A completed, directed movement of value between two named accounts.
///
/// For income and expense rows one side is a `category:subcategory`
/// pseudo-account. Fields are serialized in declaration order, which is the
/// column order of the output file: time, from, to, value, description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// When the movement happened, verbatim from the export.
    pub time: String,
    /// Account the value leaves.
    pub from: String,
    /// Account the value enters.
    pub to: String,
    /// Amount, verbatim from the export.
    pub value: String,
    /// Free-text remark.
    pub description: String,
}

impl Transaction {
    /// Output row in column order.
    #[must_use]
    pub fn fields(&self) -> [&str; 5] {
        [&self.time, &self.from, &self.to, &self.value, &self.description]
    }
}
