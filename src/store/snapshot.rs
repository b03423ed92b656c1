//! Ledger state snapshot

use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// The four fields a rendering layer reads
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    /// Member name draft
    pub input_member: String,

    /// Expense draft
    pub input_expense: Expense,

    /// Registered members, in insertion order
    pub members: Vec<String>,

    /// Committed expenses, in insertion order
    pub expenses: Vec<Expense>,
}
