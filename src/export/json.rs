//! JSON export of a session snapshot
//!
//! Writes the committed members and expenses with schema versioning. Drafts
//! are not exported. Amounts are integers in minor units (`1200` is 12.00).

use crate::error::WarikanResult;
use crate::models::Expense;
use crate::store::LedgerStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full session export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub members: Vec<String>,

    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub member_count: usize,
    pub expense_count: usize,
}

impl LedgerExport {
    pub fn from_store(store: &LedgerStore) -> Self {
        let members = store.members().to_vec();
        let expenses = store.expenses().to_vec();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                member_count: members.len(),
                expense_count: expenses.len(),
            },
            members,
            expenses,
        }
    }
}

/// Write the snapshot as pretty-printed JSON
pub fn export_snapshot_json<W: Write>(store: &LedgerStore, writer: &mut W) -> WarikanResult<()> {
    let export = LedgerExport::from_store(store);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_export_shape() {
        let mut store = LedgerStore::new();
        store.update_input_member("Alice");
        store.add_member();
        store.update_input_expense(Expense::new("Alice", "Lunch", Money::from_units(12)));
        store.add_expense();
        store.update_input_member("draft only");

        let mut buffer = Vec::new();
        export_snapshot_json(&store, &mut buffer).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(json["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(json["members"], serde_json::json!(["Alice"]));
        assert_eq!(json["expenses"][0]["description"], "Lunch");
        assert_eq!(json["expenses"][0]["paidBy"], "Alice");
        assert_eq!(json["expenses"][0]["amount"], 1200);
        assert_eq!(json["metadata"]["expense_count"], 1);
        assert!(json.get("inputMember").is_none());
    }
}
