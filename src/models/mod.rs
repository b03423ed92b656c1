//! Core data models for warikan
//!
//! The ledger domain is small: members are trimmed names, expenses record who
//! paid how much for what, and amounts are integer minor units.

pub mod expense;
pub mod member;
pub mod money;

pub use expense::Expense;
pub use member::{contains_member, normalize_member};
pub use money::{Money, MoneyParseError};
