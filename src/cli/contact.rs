//! Contact and newsletter form commands
//!
//! Feeds a JSON payload through the form endpoint and reports the reply.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::error::{WarikanError, WarikanResult};
use crate::forms::{FormEndpoint, FormKind, SubmissionReply, SubmissionSink};

/// Which form to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    /// Personal contact form (name, email, message)
    Personal,
    /// Corporate contact form (contactName, email, inquiry, categories)
    Corporate,
    /// Newsletter sign-up (email)
    Newsletter,
}

impl From<FormArg> for FormKind {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Personal => FormKind::PersonalContact,
            FormArg::Corporate => FormKind::CorporateContact,
            FormArg::Newsletter => FormKind::Newsletter,
        }
    }
}

/// Arguments for `warikan contact`
#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Form to submit
    #[arg(value_enum)]
    pub form: FormArg,

    /// JSON payload
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub json: Option<String>,

    /// Read the JSON payload from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Submit the payload named by `args`
pub fn handle_contact_command<S: SubmissionSink>(
    endpoint: &FormEndpoint<S>,
    args: ContactArgs,
) -> WarikanResult<SubmissionReply> {
    let body = match (args.json, args.file) {
        (Some(json), _) => json,
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            WarikanError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?,
        (None, None) => {
            return Err(WarikanError::Validation(
                "either --json or --file is required".into(),
            ))
        }
    };

    Ok(endpoint.submit_json(args.form.into(), &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inline_payload() {
        let args = ContactArgs {
            form: FormArg::Newsletter,
            json: Some(r#"{"email":"a@example.com"}"#.into()),
            file: None,
        };
        let reply = handle_contact_command(&FormEndpoint::new(), args).unwrap();
        assert!(reply.is_success());
    }

    #[test]
    fn test_payload_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inquiry.json");
        std::fs::write(&path, r#"{"contactName":"A","email":"x","inquiry":"","categories":[]}"#).unwrap();

        let args = ContactArgs {
            form: FormArg::Corporate,
            json: None,
            file: Some(path),
        };
        let reply = handle_contact_command(&FormEndpoint::new(), args).unwrap();
        assert_eq!(reply.status_code(), 400);
        assert_eq!(reply.field_errors.field_names().len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let args = ContactArgs {
            form: FormArg::Personal,
            json: None,
            file: Some(PathBuf::from("/nonexistent/payload.json")),
        };
        let err = handle_contact_command(&FormEndpoint::new(), args).unwrap_err();
        assert!(matches!(err, WarikanError::Io(_)));
    }
}
