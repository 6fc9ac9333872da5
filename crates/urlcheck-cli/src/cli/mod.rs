//! CLI for urlcheck.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlcheck_core::config;
use urlcheck_core::history::HistoryStore;
use urlcheck_core::storage::FileStore;

use commands::{run_check, run_clear, run_history};

/// Top-level CLI for urlcheck.
#[derive(Debug, Parser)]
#[command(name = "urlcheck")]
#[command(about = "urlcheck: check whether input is a well-formed URL or domain", long_about = None)]
pub struct Cli {
    /// Directory for persisted history (overrides `state_dir` in config.toml).
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check whether INPUT is a valid URL or domain and record the outcome.
    Check {
        /// URL or domain to check (surrounding whitespace is ignored).
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Report the result immediately instead of after the configured delay.
        #[arg(long)]
        no_delay: bool,
    },

    /// Show recent checks, newest first.
    History,

    /// Clear the check history.
    Clear,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let state_dir = match cli.state_dir.or_else(|| cfg.state_dir.clone()) {
            Some(dir) => dir,
            None => FileStore::default_dir()?,
        };
        let store = HistoryStore::with_key(FileStore::new(state_dir), cfg.storage_key.clone());
        let mut out = std::io::stdout().lock();

        match cli.command {
            CliCommand::Check { input, no_delay } => {
                let delay = if no_delay {
                    std::time::Duration::ZERO
                } else {
                    cfg.check_delay()
                };
                run_check(store, &input, delay, &mut out).await?;
            }
            CliCommand::History => run_history(&store, &mut out)?,
            CliCommand::Clear => run_clear(&store, &mut out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
