//! `urlcheck clear` – drop all recorded checks.

use anyhow::Result;
use std::io::Write;
use urlcheck_core::history::HistoryStore;
use urlcheck_core::storage::FileStore;

pub fn run_clear(store: &HistoryStore<FileStore>, out: &mut impl Write) -> Result<()> {
    store.clear();
    writeln!(out, "History cleared.")?;
    Ok(())
}
