//! Newsletter and contact form submissions
//!
//! The companion site posts three kinds of forms. This module owns their
//! payload types, the validation rules, and the reply shape: a status plus
//! error messages keyed by field name.

mod endpoint;
mod reply;
mod rules;
mod schema;

pub use endpoint::{FormEndpoint, LogSink, SubmissionSink};
pub use reply::{FieldErrors, ReplyStatus, SubmissionReply};
pub use rules::is_valid_email;
pub use schema::{CorporateContactForm, Form, FormKind, NewsletterForm, PersonalContactForm};
