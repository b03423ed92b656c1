//! warikan - shared expense record keeping
//!
//! This library provides the core of the warikan application: an in-memory
//! ledger of members and the expenses they paid, plus the validation layer
//! for the companion site's newsletter and contact forms.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `store`: The ledger store, its actions, and change subscriptions
//! - `models`: Expenses, member names, and money amounts
//! - `forms`: Newsletter/contact form validation and submission replies
//! - `audit`: JSONL journal of committed ledger changes
//! - `export`: JSON and CSV export of a session
//! - `display`: Plain-text tables
//! - `cli`: Command handlers and the interactive session
//! - `config`: Paths and settings
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use warikan::config::{WarikanPaths, Settings};
//! use warikan::store::LedgerStore;
//!
//! let paths = WarikanPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = LedgerStore::new();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod store;

pub use error::{WarikanError, WarikanResult};
pub use store::LedgerStore;
