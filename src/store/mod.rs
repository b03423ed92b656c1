//! Ledger store for warikan
//!
//! The store owns a session's members, expenses, and input drafts. It has no
//! global instance: the composition root builds one and hands it to whatever
//! renders it, and tests build as many as they like.
//!
//! # Example
//!
//! ```
//! use warikan::models::{Expense, Money};
//! use warikan::store::{LedgerStore, Outcome};
//!
//! let mut store = LedgerStore::new();
//! store.update_input_member("Alice");
//! assert_eq!(store.add_member(), Outcome::Accepted);
//!
//! store.update_input_expense(Expense::new("Alice", "Lunch", Money::from_units(12)));
//! store.add_expense();
//! assert_eq!(store.expenses().len(), 1);
//! ```

mod ledger;
mod outcome;
mod snapshot;
mod subscription;

pub use ledger::{LedgerAction, LedgerStore};
pub use outcome::{Outcome, RejectReason};
pub use snapshot::LedgerSnapshot;
pub use subscription::{Change, Notification, SubscriptionId};
