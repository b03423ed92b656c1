//! Form submission endpoint
//!
//! Validates a payload, hands accepted payloads to a sink, and turns every
//! path into a [`SubmissionReply`].

use crate::error::{WarikanError, WarikanResult};

use super::reply::SubmissionReply;
use super::schema::{CorporateContactForm, Form, FormKind, NewsletterForm, PersonalContactForm};

/// Receives payloads that passed validation
pub trait SubmissionSink {
    fn accept(&self, kind: FormKind, payload: &serde_json::Value) -> WarikanResult<()>;
}

/// Sink that records accepted payloads in the log and nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn accept(&self, kind: FormKind, payload: &serde_json::Value) -> WarikanResult<()> {
        tracing::info!(form = %kind, %payload, "submission accepted");
        Ok(())
    }
}

/// Validates and dispatches form submissions
#[derive(Debug, Default)]
pub struct FormEndpoint<S = LogSink> {
    sink: S,
}

impl FormEndpoint<LogSink> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SubmissionSink> FormEndpoint<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Validate a typed form and pass it to the sink
    pub fn submit<F: Form>(&self, form: &F) -> SubmissionReply {
        if let Err(field_errors) = form.validate() {
            tracing::debug!(form = %F::KIND, fields = ?field_errors.field_names(), "submission rejected");
            return SubmissionReply::invalid(field_errors);
        }

        let result = serde_json::to_value(form)
            .map_err(WarikanError::from)
            .and_then(|payload| self.sink.accept(F::KIND, &payload));

        match result {
            Ok(()) => SubmissionReply::success(F::KIND.success_message()),
            Err(err) => {
                tracing::error!(form = %F::KIND, error = %err, "submission handler failed");
                SubmissionReply::server_error()
            }
        }
    }

    /// Parse a JSON payload for `kind` and submit it
    pub fn submit_json(&self, kind: FormKind, body: &str) -> SubmissionReply {
        tracing::info!(form = %kind, "submission received");
        match kind {
            FormKind::Newsletter => self.submit_parsed::<NewsletterForm>(body),
            FormKind::PersonalContact => self.submit_parsed::<PersonalContactForm>(body),
            FormKind::CorporateContact => self.submit_parsed::<CorporateContactForm>(body),
        }
    }

    fn submit_parsed<F: Form>(&self, body: &str) -> SubmissionReply {
        match serde_json::from_str::<F>(body) {
            Ok(form) => self.submit(&form),
            Err(err) => {
                tracing::debug!(form = %F::KIND, error = %err, "malformed payload");
                SubmissionReply::malformed(format!("Invalid payload: {}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        seen: RefCell<Vec<(FormKind, serde_json::Value)>>,
    }

    impl SubmissionSink for RecordingSink {
        fn accept(&self, kind: FormKind, payload: &serde_json::Value) -> WarikanResult<()> {
            self.seen.borrow_mut().push((kind, payload.clone()));
            Ok(())
        }
    }

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn accept(&self, _kind: FormKind, _payload: &serde_json::Value) -> WarikanResult<()> {
            Err(WarikanError::Submission("mail server down".into()))
        }
    }

    #[test]
    fn test_valid_newsletter_reaches_sink() {
        let endpoint = FormEndpoint::with_sink(RecordingSink::default());
        let reply = endpoint.submit_json(FormKind::Newsletter, r#"{"email":"a@example.com"}"#);

        assert!(reply.is_success());
        assert_eq!(reply.message, "Thanks for subscribing to the newsletter!");
        let seen = endpoint.sink.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1["email"], "a@example.com");
    }

    #[test]
    fn test_invalid_payload_skips_sink() {
        let endpoint = FormEndpoint::with_sink(RecordingSink::default());
        let reply = endpoint.submit(&PersonalContactForm {
            name: "A".into(),
            email: "nope".into(),
            message: "short".into(),
        });

        assert_eq!(reply.status_code(), 400);
        assert_eq!(reply.field_errors.field_names(), vec!["email", "message", "name"]);
        assert!(endpoint.sink.seen.borrow().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let reply = FormEndpoint::new().submit_json(FormKind::CorporateContact, "[1, 2");
        assert_eq!(reply.status_code(), 400);
        assert_eq!(reply.form_errors.len(), 1);
        assert!(reply.field_errors.is_empty());
    }

    #[test]
    fn test_sink_failure_is_server_error() {
        let endpoint = FormEndpoint::with_sink(FailingSink);
        let reply = endpoint.submit(&NewsletterForm {
            email: "a@example.com".into(),
        });

        assert_eq!(reply.status_code(), 500);
        assert!(reply.field_errors.is_empty());
        assert_eq!(
            reply.form_errors,
            vec!["A server error occurred. Please try again later.".to_string()]
        );
    }
}
