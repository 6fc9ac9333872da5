//! Bounded most-recent-first sequence of records.

use serde::{Deserialize, Deserializer, Serialize};

use super::record::ValidationRecord;

/// Maximum number of records kept in a [`HistoryLog`].
pub const HISTORY_LIMIT: usize = 5;

/// Ordered log of past checks, newest first, never longer than [`HISTORY_LIMIT`].
///
/// Values are replaced rather than edited: [`HistoryLog::with_entry`] returns a
/// new log and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<ValidationRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from records already ordered newest first, keeping the first
    /// [`HISTORY_LIMIT`].
    pub fn from_records(mut records: Vec<ValidationRecord>) -> Self {
        records.truncate(HISTORY_LIMIT);
        Self { entries: records }
    }

    /// Returns a new log with `entry` prepended and the oldest records dropped
    /// past [`HISTORY_LIMIT`].
    pub fn with_entry(&self, entry: ValidationRecord) -> Self {
        let mut entries = Vec::with_capacity(HISTORY_LIMIT);
        entries.push(entry);
        entries.extend(self.entries.iter().take(HISTORY_LIMIT - 1).cloned());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent record, if any.
    pub fn latest(&self) -> Option<&ValidationRecord> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationRecord> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ValidationRecord] {
        &self.entries
    }
}

impl<'de> Deserialize<'de> for HistoryLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ValidationRecord>::deserialize(deserializer).map(Self::from_records)
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a ValidationRecord;
    type IntoIter = std::slice::Iter<'a, ValidationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
