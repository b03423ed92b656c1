//! Audit entry data structures
//!
//! Defines the journal line format: which ledger change happened, to which
//! entity, with the values that were added or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Change;

/// Types of committed changes that are journaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    MemberAdded,
    ExpenseAdded,
    ExpensesRemoved,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::MemberAdded => write!(f, "ADD MEMBER"),
            Operation::ExpenseAdded => write!(f, "ADD EXPENSE"),
            Operation::ExpensesRemoved => write!(f, "REMOVE EXPENSE"),
        }
    }
}

/// Types of entities held by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Member,
    Expense,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Member => write!(f, "Member"),
            EntityType::Expense => write!(f, "Expense"),
        }
    }
}

/// A single journal line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Member name or expense description
    pub entity_id: String,

    /// Removed values (for removals)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Added values (for additions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Build the journal entry for a ledger change.
    ///
    /// Draft updates are not journaled and yield `None`.
    pub fn from_change(change: &Change) -> Option<Self> {
        let (operation, entity_type, entity_id, before, after) = match change {
            Change::InputMemberUpdated | Change::InputExpenseUpdated => return None,
            Change::MemberAdded(name) => (
                Operation::MemberAdded,
                EntityType::Member,
                name.clone(),
                None,
                serde_json::to_value(name).ok(),
            ),
            Change::ExpenseAdded(expense) => (
                Operation::ExpenseAdded,
                EntityType::Expense,
                expense.description.clone(),
                None,
                serde_json::to_value(expense).ok(),
            ),
            Change::ExpensesRemoved {
                description,
                removed,
            } => (
                Operation::ExpensesRemoved,
                EntityType::Expense,
                description.clone(),
                serde_json::to_value(removed).ok(),
                None,
            ),
        };

        Some(Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            before,
            after,
        })
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} '{}'",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        )
    }
}
