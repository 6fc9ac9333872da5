//! Strict bare-domain grammar: RFC-shaped labels, alphabetic final label, no scheme or path.

use regex::Regex;
use std::sync::LazyLock;

/// Each label is 1-63 chars, alphanumeric at both ends with alphanumerics or
/// hyphens between. The final label is two or more ASCII letters.
static STRICT_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("strict-domain pattern is valid")
});

/// Returns true if `input` is a bare domain name under the strict label rules.
pub fn matches_strict_domain(input: &str) -> bool {
    STRICT_DOMAIN.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_domains() {
        assert!(matches_strict_domain("example.com"));
        assert!(matches_strict_domain("sub.example.co.uk"));
        assert!(matches_strict_domain("a-b.c-d.example"));
        assert!(matches_strict_domain("x1.io"));
        assert!(matches_strict_domain("EXAMPLE.COM"));
    }

    #[test]
    fn hyphens_only_inside_labels() {
        assert!(!matches_strict_domain("-example.com"));
        assert!(!matches_strict_domain("example-.com"));
        assert!(!matches_strict_domain("sub.-example.com"));
        assert!(matches_strict_domain("ex--ample.com"));
    }

    #[test]
    fn label_length_bounds() {
        let max_label = "a".repeat(63);
        let too_long = "a".repeat(64);
        assert!(matches_strict_domain(&format!("{max_label}.com")));
        assert!(!matches_strict_domain(&format!("{too_long}.com")));
    }

    #[test]
    fn final_label_must_be_letters() {
        assert!(!matches_strict_domain("example.c"));
        assert!(!matches_strict_domain("example.c0m"));
        assert!(!matches_strict_domain("192.168.0.1"));
        assert!(matches_strict_domain("example.technology"));
    }

    #[test]
    fn rejects_schemes_paths_and_empty_labels() {
        assert!(!matches_strict_domain("https://example.com"));
        assert!(!matches_strict_domain("example.com/"));
        assert!(!matches_strict_domain("example..com"));
        assert!(!matches_strict_domain(".example.com"));
        assert!(!matches_strict_domain("example"));
        assert!(!matches_strict_domain(""));
    }
}
