//! Result of one completed check.

use crate::history::ValidationRecord;
use crate::validator;

/// Classification of one input plus the link to offer when it is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    record: ValidationRecord,
    link: Option<String>,
}

impl CheckResult {
    /// Classifies `input` (already trimmed) and stamps it with `timestamp`.
    pub fn evaluate(input: &str, timestamp: i64) -> Self {
        let is_valid = validator::classify(input);
        let link = is_valid.then(|| validator::normalize(input));
        Self {
            record: ValidationRecord::new(input, is_valid, timestamp),
            link,
        }
    }

    /// The input as submitted.
    pub fn input(&self) -> &str {
        self.record.url()
    }

    pub fn is_valid(&self) -> bool {
        self.record.is_valid()
    }

    /// Normalized absolute link; `None` for invalid input.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn record(&self) -> &ValidationRecord {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_gets_link() {
        let r = CheckResult::evaluate("example.com", 42);
        assert!(r.is_valid());
        assert_eq!(r.link(), Some("https://example.com"));
        assert_eq!(r.input(), "example.com");
        assert_eq!(r.record().timestamp(), 42);
    }

    #[test]
    fn schemed_input_keeps_scheme() {
        let r = CheckResult::evaluate("http://example.com/a", 0);
        assert_eq!(r.link(), Some("http://example.com/a"));
        assert_eq!(r.record().url(), "http://example.com/a");
    }

    #[test]
    fn invalid_input_has_no_link() {
        let r = CheckResult::evaluate("not a url", 0);
        assert!(!r.is_valid());
        assert_eq!(r.link(), None);
        assert!(!r.record().is_valid());
    }
}
