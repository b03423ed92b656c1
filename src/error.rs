//! Custom error types for warikan
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Ledger validation failures are not errors:
//! the store reports them through [`crate::store::Outcome`] instead.

use thiserror::Error;

/// The main error type for warikan operations
#[derive(Error, Debug)]
pub enum WarikanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Invalid user input outside the ledger (amounts, command arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Interactive session errors
    #[error("Session error: {0}")]
    Session(String),

    /// A submission sink refused or failed to handle an accepted form
    #[error("Submission error: {0}")]
    Submission(String),
}

impl From<std::io::Error> for WarikanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WarikanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for WarikanError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for warikan operations
pub type WarikanResult<T> = Result<T, WarikanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WarikanError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WarikanError = io_err.into();
        assert!(matches!(err, WarikanError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: WarikanError = json_err.into();
        assert!(matches!(err, WarikanError::Json(_)));
    }
}
