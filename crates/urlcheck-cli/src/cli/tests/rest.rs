//! Tests for history, clear, and global options.

use super::parse;
use clap::Parser;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_history() {
    match parse(&["urlcheck", "history"]).command {
        CliCommand::History => {}
        _ => panic!("expected History"),
    }
}

#[test]
fn cli_parse_clear() {
    match parse(&["urlcheck", "clear"]).command {
        CliCommand::Clear => {}
        _ => panic!("expected Clear"),
    }
}

#[test]
fn cli_parse_state_dir_before_or_after_subcommand() {
    let cli = parse(&["urlcheck", "--state-dir", "/tmp/uc", "history"]);
    assert_eq!(cli.state_dir.as_deref(), Some(Path::new("/tmp/uc")));

    let cli = parse(&["urlcheck", "clear", "--state-dir", "/tmp/uc2"]);
    assert_eq!(cli.state_dir.as_deref(), Some(Path::new("/tmp/uc2")));
}

#[test]
fn cli_parse_state_dir_defaults_to_none() {
    assert!(parse(&["urlcheck", "history"]).state_dir.is_none());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(crate::cli::Cli::try_parse_from(["urlcheck", "ping"]).is_err());
}
