//! `urlcheck history` – list recent checks, newest first.

use anyhow::Result;
use std::io::Write;
use urlcheck_core::clock::{Clock, SystemClock};
use urlcheck_core::history::{HistoryLog, HistoryStore};
use urlcheck_core::storage::FileStore;

pub fn run_history(store: &HistoryStore<FileStore>, out: &mut impl Write) -> Result<()> {
    print_history(out, &store.load(), SystemClock.now_millis())
}

/// Prints `log` as a table, with ages relative to `now_millis`.
pub(crate) fn print_history(out: &mut impl Write, log: &HistoryLog, now_millis: i64) -> Result<()> {
    if log.is_empty() {
        writeln!(out, "No recent checks.")?;
        return Ok(());
    }
    writeln!(out, "Recent checks:")?;
    for record in log {
        let status = if record.is_valid() { "VALID" } else { "INVALID" };
        writeln!(
            out,
            "  {:<9}{:<12}{}",
            status,
            format_age(now_millis, record.timestamp()),
            record.url()
        )?;
    }
    Ok(())
}

/// Short human-readable age of `timestamp` as seen at `now` (both in ms).
pub(crate) fn format_age(now: i64, timestamp: i64) -> String {
    let secs = now.saturating_sub(timestamp).max(0) / 1000;
    match secs {
        0..=4 => "just now".to_string(),
        5..=59 => format!("{secs}s ago"),
        60..=3_599 => format!("{}m ago", secs / 60),
        3_600..=86_399 => format!("{}h ago", secs / 3_600),
        _ => format!("{}d ago", secs / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlcheck_core::history::ValidationRecord;

    const NOW: i64 = 1_700_000_000_000;

    fn render(log: &HistoryLog) -> String {
        let mut out = Vec::new();
        print_history(&mut out, log, NOW).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_history_says_so() {
        assert_eq!(render(&HistoryLog::new()), "No recent checks.\n");
    }

    #[test]
    fn history_lists_newest_first_with_ages() {
        let log = HistoryLog::new()
            .with_entry(ValidationRecord::new("old.com", true, NOW - 120_000))
            .with_entry(ValidationRecord::new("bad input", false, NOW - 10_000));
        assert_eq!(
            render(&log),
            "Recent checks:\n  INVALID  10s ago     bad input\n  VALID    2m ago      old.com\n"
        );
    }

    #[test]
    fn run_history_reads_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(FileStore::new(dir.path()));
        let mut out = Vec::new();
        run_history(&store, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No recent checks.\n");

        let now = SystemClock.now_millis();
        store.record(&HistoryLog::new(), ValidationRecord::new("example.com", true, now));
        let mut out = Vec::new();
        run_history(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("VALID    just now    example.com"));
    }

    #[test]
    fn recent_checks_read_as_just_now() {
        assert_eq!(format_age(NOW, NOW), "just now");
        assert_eq!(format_age(NOW, NOW - 4_999), "just now");
        // Clock skew: a future timestamp is not negative.
        assert_eq!(format_age(NOW, NOW + 60_000), "just now");
    }

    #[test]
    fn ages_scale_by_unit() {
        assert_eq!(format_age(NOW, NOW - 5_000), "5s ago");
        assert_eq!(format_age(NOW, NOW - 90_000), "1m ago");
        assert_eq!(format_age(NOW, NOW - 2 * 3_600_000), "2h ago");
        assert_eq!(format_age(NOW, NOW - 3 * 86_400_000), "3d ago");
    }
}
