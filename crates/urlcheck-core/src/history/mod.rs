//! Bounded history of recent checks and its persistence.

mod log;
mod record;
mod store;

pub use log::{HistoryLog, HISTORY_LIMIT};
pub use record::ValidationRecord;
pub use store::{HistoryStore, DEFAULT_STORAGE_KEY};
