//! Global flags and argument errors.

use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "agentgate",
        "config",
        "--config",
        "/tmp/gate.toml",
        "--log-file",
        "/tmp/gate.log",
        "--json",
    ])
    .unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/gate.toml")));
    assert_eq!(cli.log_file.as_deref(), Some(Path::new("/tmp/gate.log")));
    assert!(cli.json);
    assert!(matches!(cli.command, CliCommand::Config));
}

#[test]
fn cli_parse_defaults() {
    let cli = Cli::try_parse_from(["agentgate", "config"]).unwrap();
    assert!(cli.config.is_none());
    assert!(cli.log_file.is_none());
    assert!(!cli.json);
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["agentgate"]).is_err());
}

#[test]
fn cli_rejects_unknown_policy() {
    assert!(Cli::try_parse_from(["agentgate", "url", "http://h/", "--policy", "strict"]).is_err());
}

#[test]
fn cli_rejects_param_without_equals() {
    assert!(Cli::try_parse_from(["agentgate", "url", "http://h/", "--param", "vin"]).is_err());
}

#[test]
fn cli_binding_text_conflicts_with_file() {
    assert!(Cli::try_parse_from(["agentgate", "binding", "SELECT", "--file", "q.rq"]).is_err());
}
