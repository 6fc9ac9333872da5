//! `urlcheck check <input>` – classify an input, show its link, and record the outcome.

use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use urlcheck_core::clock::SystemClock;
use urlcheck_core::history::HistoryStore;
use urlcheck_core::session::ValidationSession;
use urlcheck_core::storage::FileStore;

use super::history::print_history;

pub async fn run_check(
    store: HistoryStore<FileStore>,
    input: &str,
    delay: Duration,
    out: &mut impl Write,
) -> Result<()> {
    let session = ValidationSession::open(store, SystemClock, delay);

    if !delay.is_zero() && !input.trim().is_empty() {
        write!(out, "Checking {} ...", input.trim())?;
        out.flush()?;
    }

    let Some(result) = session.submit(input).await? else {
        writeln!(out, "Enter a URL or domain to check.")?;
        return Ok(());
    };
    if !delay.is_zero() {
        writeln!(out)?;
    }

    if result.is_valid() {
        writeln!(out, "{:<9}{}", "VALID", result.input())?;
        if let Some(link) = result.link() {
            writeln!(out, "{:<9}{}", "Link:", link)?;
        }
    } else {
        writeln!(out, "{:<9}{}", "INVALID", result.input())?;
    }

    writeln!(out)?;
    print_history(out, &session.history(), result.record().timestamp())?;
    Ok(())
}
