//! Input guards applied before any request is issued.

/// Trim a user query; `None` means the trigger must be ignored.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Country codes travel lowercase (`us`, `gb`), matching the backend default.
#[must_use]
pub fn normalize_country(raw: &str) -> Option<String> {
    normalize_query(raw).map(|code| code.to_lowercase())
}

/// Checkout only requires an `@` somewhere in the address.
#[must_use]
pub fn plausible_email(raw: &str) -> bool {
    raw.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_query_rejects_blank_input() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t\n"), None);
    }

    #[test]
    fn normalize_query_trims_surrounding_whitespace() {
        assert_eq!(normalize_query("  example.com "), Some("example.com".to_owned()));
        assert_eq!(normalize_query("best seo tool"), Some("best seo tool".to_owned()));
    }

    #[test]
    fn normalize_country_lowercases_and_drops_blank() {
        assert_eq!(normalize_country(" GB "), Some("gb".to_owned()));
        assert_eq!(normalize_country("us"), Some("us".to_owned()));
        assert_eq!(normalize_country("  "), None);
    }

    #[test]
    fn plausible_email_checks_only_for_at_sign() {
        assert!(plausible_email("a@b"));
        assert!(plausible_email("@"));
        assert!(!plausible_email("user.example.com"));
        assert!(!plausible_email(""));
    }
}
