//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging clap
//! argument parsing with the store and the form endpoint.

pub mod audit;
pub mod contact;
pub mod export;
pub mod session;
mod words;

pub use audit::{handle_audit_command, AuditArgs};
pub use contact::{handle_contact_command, ContactArgs, FormArg};
pub use export::ExportFormat;
pub use session::{Flow, Session};
