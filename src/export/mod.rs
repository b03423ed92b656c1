//! Export module for warikan
//!
//! One-way export of the current session:
//! - CSV: expenses for spreadsheets
//! - JSON: members and expenses with schema versioning
//!
//! Exports are never read back; the ledger lives only as long as the session.

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_snapshot_json, LedgerExport, EXPORT_SCHEMA_VERSION};
