//! Member display formatting

/// Format members as a numbered list in insertion order
pub fn format_member_list(members: &[String]) -> String {
    if members.is_empty() {
        return "No members yet.\n".to_string();
    }

    let mut output = String::new();
    for (index, name) in members.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", index + 1, name));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_member_list(&[]), "No members yet.\n");
    }

    #[test]
    fn test_numbered_list() {
        let members = vec!["Alice".to_string(), "Bob".to_string()];
        assert_eq!(format_member_list(&members), "  1. Alice\n  2. Bob\n");
    }
}
