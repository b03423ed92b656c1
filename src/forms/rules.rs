//! Field rules shared by the form schemas

use std::sync::OnceLock;

use regex::Regex;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

/// Check an email address the way the site's form library does.
///
/// The local part may not start with a dot, and no `..` may appear anywhere.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_pattern().is_match(value)
}

/// Length in UTF-16 code units, the unit the site's length limits count in.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count as two.
pub fn char_len(value: &str) -> usize {
    value.encode_utf16().count()
}
