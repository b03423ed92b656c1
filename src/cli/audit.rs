//! Audit journal viewing

use std::io::Write;

use clap::Args;

use crate::audit::AuditLogger;
use crate::error::WarikanResult;

#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Show only the N most recent entries
    #[arg(short = 'n', long, value_name = "N")]
    pub recent: Option<usize>,
}

/// Print journal entries, oldest first
pub fn handle_audit_command(logger: &AuditLogger, args: AuditArgs, out: &mut impl Write) -> WarikanResult<()> {
    let entries = match args.recent {
        Some(count) => logger.read_recent(count)?,
        None => logger.read_all()?,
    };

    if entries.is_empty() {
        writeln!(out, "No audit entries in {}", logger.path().display())?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(out, "{}", entry.format_human_readable())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use crate::store::LedgerStore;
    use tempfile::TempDir;

    fn journal_with_three_commits(temp_dir: &TempDir) -> AuditLogger {
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut store = LedgerStore::new();
        logger.clone().attach(&mut store);

        store.update_input_member("Alice");
        store.add_member();
        store.update_input_expense(Expense::new("Alice", "Lunch", Money::from_units(12)));
        store.add_expense();
        store.remove_expense("Lunch");
        logger
    }

    #[test]
    fn test_lists_every_entry() {
        let temp_dir = TempDir::new().unwrap();
        let logger = journal_with_three_commits(&temp_dir);

        let mut out = Vec::new();
        handle_audit_command(&logger, AuditArgs { recent: None }, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("ADD MEMBER Member 'Alice'"));
        assert!(lines[2].ends_with("REMOVE EXPENSE Expense 'Lunch'"));
    }

    #[test]
    fn test_recent_limits_output() {
        let temp_dir = TempDir::new().unwrap();
        let logger = journal_with_three_commits(&temp_dir);

        let mut out = Vec::new();
        handle_audit_command(&logger, AuditArgs { recent: Some(1) }, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("REMOVE EXPENSE"));
    }

    #[test]
    fn test_empty_journal() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        let mut out = Vec::new();
        handle_audit_command(&logger, AuditArgs { recent: None }, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("No audit entries"));
    }
}
