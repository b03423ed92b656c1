//! Expense model
//!
//! An expense records who paid, what for, and how much. The description is
//! the expense's identity within a ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single recorded expense, or the draft of one
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Who paid. Not required to name a registered member.
    pub paid_by: String,

    /// What the expense was for; unique among committed expenses once trimmed
    pub description: String,

    /// Amount paid
    pub amount: Money,
}

impl Expense {
    /// Create a new expense
    pub fn new(paid_by: impl Into<String>, description: impl Into<String>, amount: Money) -> Self {
        Self {
            paid_by: paid_by.into(),
            description: description.into(),
            amount,
        }
    }

    /// The empty draft a ledger starts with and resets to after a commit
    pub fn empty() -> Self {
        Self::default()
    }

    /// The canonical description used for uniqueness checks
    pub fn trimmed_description(&self) -> &str {
        self.description.trim()
    }

    /// A copy of this expense with its description trimmed
    pub fn normalized(&self) -> Self {
        Self {
            description: self.trimmed_description().to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} paid {} for {}", self.paid_by, self.amount, self.description)
    }
}
