// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::push::strategy::PushStrategy;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_command_runs_push() {
    let cli = Cli::try_parse_from(["gpush"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.push.strategy.is_none());
    assert!(cli.push.directory.is_none());
    assert!(cli.global.to_config_overrides().is_empty());
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["gpush", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_strategy_names() {
    let cases = [
        ("current", PushStrategy::CurrentBranch),
        ("all", PushStrategy::AllBranches),
        ("current-tags", PushStrategy::CurrentBranchWithTags),
        ("all-tags", PushStrategy::AllBranchesWithTags),
    ];
    for (name, expected) in cases {
        let cli = Cli::try_parse_from(["gpush", "--strategy", name]).unwrap();
        assert_eq!(cli.push.strategy, Some(expected), "--strategy {name}");
    }
}

#[test]
fn test_parse_unknown_strategy_fails() {
    assert!(Cli::try_parse_from(["gpush", "--strategy", "everything"]).is_err());
}

#[test]
fn test_parse_directory() {
    let cli = Cli::try_parse_from(["gpush", "-C", "/tmp/repo"]).unwrap();
    assert_eq!(cli.push.directory, Some(PathBuf::from("/tmp/repo")));
}

#[test]
fn test_parse_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["gpush", "options", "-l", "5", "--dry"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.dry);
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["gpush", "-l", "7"]).is_err());
}

#[test]
fn test_config_overrides_order() {
    let cli = Cli::try_parse_from([
        "gpush",
        "-s",
        "remote.name=upstream",
        "-l",
        "4",
        "--log-file",
        "/tmp/gpush.log",
        "--dry",
    ])
    .unwrap();

    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "remote.name=upstream",
            "global.output_log_level=4",
            "global.file_log_level=4",
            "global.log_file=/tmp/gpush.log",
            "global.dry=true",
        ]
    );
}

#[test]
fn test_file_log_level_overrides_console_level() {
    let cli = Cli::try_parse_from(["gpush", "-l", "2", "--file-log-level", "5"]).unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        ["global.output_log_level=2", "global.file_log_level=5"]
    );
}

#[test]
fn test_parse_repeated_inis() {
    let cli = Cli::try_parse_from(["gpush", "-i", "a.toml", "--ini", "b.toml", "inis"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Inis)));
    assert_eq!(
        cli.global.inis,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
}
