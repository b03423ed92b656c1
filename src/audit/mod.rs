//! Audit journal for warikan
//!
//! Records every committed ledger change (members added, expenses added or
//! removed) in an append-only JSONL file. Draft edits are not recorded.
//!
//! # Example
//!
//! ```rust,ignore
//! use warikan::audit::AuditLogger;
//! use warikan::store::LedgerStore;
//!
//! let mut store = LedgerStore::new();
//! AuditLogger::new(paths.audit_log()).attach(&mut store);
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
