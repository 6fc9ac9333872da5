//! Persistence of the history log through a key-value store.

use anyhow::{Context, Result};

use super::log::HistoryLog;
use super::record::ValidationRecord;
use crate::storage::KeyValueStore;

/// Storage key the history is kept under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "validationHistory";

/// Loads, records and clears the history log, persisting after every change.
///
/// Persistence is best effort: failures are logged and the in-memory result is
/// still returned, so the displayed log always reflects the user's action.
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the persisted log. Absent, unreadable or corrupt state yields an
    /// empty log; the cause is logged.
    pub fn load(&self) -> HistoryLog {
        match self.try_load() {
            Ok(Some(log)) => {
                tracing::debug!(key = %self.key, entries = log.len(), "loaded history");
                log
            }
            Ok(None) => HistoryLog::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, "discarding unreadable history: {:#}", e);
                HistoryLog::new()
            }
        }
    }

    /// Prepends `entry` to `log`, truncates, persists, and returns the new log.
    /// `log` itself is not modified.
    pub fn record(&self, log: &HistoryLog, entry: ValidationRecord) -> HistoryLog {
        let next = log.with_entry(entry);
        if let Err(e) = self.persist(&next) {
            tracing::warn!(key = %self.key, "history not persisted: {:#}", e);
        }
        next
    }

    /// Removes the persisted log and returns an empty one.
    pub fn clear(&self) -> HistoryLog {
        match self.storage.remove(&self.key) {
            Ok(()) => tracing::debug!(key = %self.key, "cleared history"),
            Err(e) => tracing::warn!(key = %self.key, "history not removed: {}", e),
        }
        HistoryLog::new()
    }

    fn try_load(&self) -> Result<Option<HistoryLog>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };
        let log: HistoryLog = serde_json::from_str(&raw).context("parse persisted history")?;
        Ok(Some(log))
    }

    fn persist(&self, log: &HistoryLog) -> Result<()> {
        let json = serde_json::to_string_pretty(log).context("serialize history")?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, entries = log.len(), "persisted history");
        Ok(())
    }
}
