//! Submission replies
//!
//! The shape every form submission returns: a status, a message, and error
//! messages keyed by field name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validation messages keyed by wire field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// Messages for one field; empty if the field passed
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Failing fields, sorted by name
    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Every message, field by field
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Error,
}

/// The result of submitting a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReply {
    pub status: ReplyStatus,

    /// HTTP-style status code: 200, 400, or 500
    pub code: u16,

    pub message: String,

    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub field_errors: FieldErrors,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub form_errors: Vec<String>,
}

impl SubmissionReply {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Success,
            code: 200,
            message: message.into(),
            field_errors: FieldErrors::default(),
            form_errors: Vec::new(),
        }
    }

    /// Reply for a payload that failed validation
    pub fn invalid(field_errors: FieldErrors) -> Self {
        let summary: Vec<&str> = field_errors.messages().collect();
        Self {
            status: ReplyStatus::Error,
            code: 400,
            message: format!("Validation error: {}", summary.join(", ")),
            field_errors,
            form_errors: Vec::new(),
        }
    }

    /// Reply for a payload that could not be read at all
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Error,
            code: 400,
            message: "Validation error".to_string(),
            field_errors: FieldErrors::default(),
            form_errors: vec![detail.into()],
        }
    }

    /// Reply for an accepted payload the handler failed to process
    pub fn server_error() -> Self {
        let message = "A server error occurred. Please try again later.";
        Self {
            status: ReplyStatus::Error,
            code: 500,
            message: message.to_string(),
            field_errors: FieldErrors::default(),
            form_errors: vec![message.to_string()],
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ReplyStatus::Success
    }

    pub fn status_code(&self) -> u16 {
        self.code
    }
}
