//! Display formatting for terminal output
//!
//! Plain-text renderings of the ledger used by the interactive session.

pub mod expense;
pub mod member;

pub use expense::format_expense_table;
pub use member::format_member_list;
