//! One past check outcome.

use serde::{Deserialize, Serialize};

/// Outcome of a single check. Immutable once created; a new check produces a
/// new record. Serialized as `{"url", "isValid", "timestamp"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRecord {
    url: String,
    is_valid: bool,
    timestamp: i64,
}

impl ValidationRecord {
    /// `url` is the trimmed input as submitted, not the normalized link.
    pub fn new(url: impl Into<String>, is_valid: bool, timestamp: i64) -> Self {
        Self {
            url: url.into(),
            is_valid,
            timestamp,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Milliseconds since the UNIX epoch when the check ran.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
