//! Member names
//!
//! Members are plain display names. The ledger keeps them as trimmed strings;
//! this module holds the normalization rule shared by the store and the
//! session.

/// Trim a raw member name into its canonical form.
///
/// Returns `None` when nothing but whitespace remains.
pub fn normalize_member(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Check whether `members` already holds `name` (exact, case-sensitive)
pub fn contains_member(members: &[String], name: &str) -> bool {
    members.iter().any(|m| m == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_member("  Alice "), Some("Alice"));
        assert_eq!(normalize_member("   "), None);
        assert_eq!(normalize_member(""), None);
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let members = vec!["Alice".to_string()];
        assert!(contains_member(&members, "Alice"));
        assert!(!contains_member(&members, "alice"));
    }
}
