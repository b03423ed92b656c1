//! Form payloads and their validation rules
//!
//! Fields default to empty so a payload with missing keys still reaches
//! validation and comes back with field-level messages.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::reply::FieldErrors;
use super::rules::{char_len, is_valid_email};

const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Which form a payload belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Newsletter,
    PersonalContact,
    CorporateContact,
}

impl FormKind {
    /// Message returned with a successful submission
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Newsletter => "Thanks for subscribing to the newsletter!",
            Self::PersonalContact | Self::CorporateContact => "Your inquiry has been received.",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Newsletter => write!(f, "newsletter"),
            Self::PersonalContact => write!(f, "personal contact"),
            Self::CorporateContact => write!(f, "corporate contact"),
        }
    }
}

/// A submittable form
pub trait Form: Serialize + DeserializeOwned {
    const KIND: FormKind;

    /// Check every rule, collecting all failures
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Newsletter sign-up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterForm {
    #[serde(default)]
    pub email: String,
}

impl Form for NewsletterForm {
    const KIND: FormKind = FormKind::Newsletter;

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if !is_valid_email(&self.email) {
            errors.add("email", EMAIL_MESSAGE);
        }
        errors.into_result()
    }
}

/// Contact form for individuals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl Form for PersonalContactForm {
    const KIND: FormKind = FormKind::PersonalContact;

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        let name_len = char_len(&self.name);
        if name_len < 2 {
            errors.add("name", "Name must be at least 2 characters");
        } else if name_len > 50 {
            errors.add("name", "Name must be at most 50 characters");
        }

        if !is_valid_email(&self.email) {
            errors.add("email", EMAIL_MESSAGE);
        }

        let message_len = char_len(&self.message);
        if message_len < 10 {
            errors.add("message", "Inquiry must be at least 10 characters");
        } else if message_len > 1000 {
            errors.add("message", "Inquiry must be at most 1000 characters");
        }

        errors.into_result()
    }
}

/// Contact form for businesses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateContactForm {
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub inquiry: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Form for CorporateContactForm {
    const KIND: FormKind = FormKind::CorporateContact;

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if char_len(&self.contact_name) < 2 {
            errors.add("contactName", "Name must be at least 2 characters");
        }
        if !is_valid_email(&self.email) {
            errors.add("email", EMAIL_MESSAGE);
        }
        if char_len(&self.inquiry) < 10 {
            errors.add("inquiry", "Inquiry must be at least 10 characters");
        }
        if self.categories.is_empty() {
            errors.add("categories", "Select at least one category");
        }

        errors.into_result()
    }
}
