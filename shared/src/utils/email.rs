//! Email address utilities
//!
//! All lookups and cache keys use the normalized form; raw addresses never
//! appear in log output.

/// Normalize an email address for storage and lookup.
///
/// The normalized form (trimmed, lowercased) is the unique account key, so
/// `A@X.com` and `a@x.com ` resolve to the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether a string is a syntactically valid email address
pub fn is_valid_email(email: &str) -> bool {
    validator::validate_email(email.trim())
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain:
/// `dairo@example.com` -> `d***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email(" user@example.com "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("dairo@example.com"), "d***@example.com");
        assert_eq!(mask_email("bad-input"), "***");
        assert_eq!(mask_email("@example.com"), "***");
    }
}
