//! Synchronous change notification
//!
//! Listeners are plain callbacks invoked in registration order, on the calling
//! thread, before the mutating action returns.

use std::fmt;

use super::snapshot::LedgerSnapshot;
use crate::models::Expense;

/// What a mutation changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    InputMemberUpdated,
    InputExpenseUpdated,
    MemberAdded(String),
    ExpenseAdded(Expense),
    ExpensesRemoved { description: String, removed: Vec<Expense> },
}

impl Change {
    /// Whether this change touched the committed lists rather than a draft
    pub fn is_commit(&self) -> bool {
        !matches!(self, Self::InputMemberUpdated | Self::InputExpenseUpdated)
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputMemberUpdated => write!(f, "member draft updated"),
            Self::InputExpenseUpdated => write!(f, "expense draft updated"),
            Self::MemberAdded(name) => write!(f, "added member '{}'", name),
            Self::ExpenseAdded(expense) => write!(
                f,
                "added expense '{}' ({} paid {})",
                expense.description, expense.paid_by, expense.amount
            ),
            Self::ExpensesRemoved {
                description,
                removed,
            } => write!(f, "removed {} expense(s) '{}'", removed.len(), description),
        }
    }
}

/// Delivered to every listener after a mutation
#[derive(Debug)]
pub struct Notification<'a> {
    pub change: Change,
    pub snapshot: &'a LedgerSnapshot,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Notification<'_>)>;

/// Registered listeners in subscription order
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, notification: &Notification<'_>) {
        for (_, listener) in self.entries.iter_mut() {
            listener(notification);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
