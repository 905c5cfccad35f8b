// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::global::GlobalOptions;
use crate::cli::setup::SetupArgs;
use crate::cli::{Cli, Command};
use crate::export::ExportFormat;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["vsenv", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));

    let cli = Cli::try_parse_from(["vsenv", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["vsenv"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_setup_format() {
    let cli = Cli::try_parse_from(["vsenv", "setup", "--format", "powershell"]).unwrap();
    match cli.command {
        Some(Command::Setup(args)) => assert_eq!(args.format, Some(ExportFormat::Powershell)),
        other => panic!("expected setup, got {other:?}"),
    }
}

#[test]
fn test_parse_setup_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["vsenv", "setup", "-f", "fish"]).is_err());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "vsenv",
        "-l",
        "5",
        "--file-log-level",
        "6",
        "--log-file",
        "vsenv.log",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "--vs-version",
        "[17.0,18.0)",
        "--vswhere-path",
        "tools",
        "--no-default-config",
        "locate",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Locate)));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.no_default_config);
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "global.log_level",
            "5",
        ),
        (
            "global.file_log_level",
            "6",
        ),
        (
            "global.log_file",
            "vsenv.log",
        ),
        (
            "discovery.vs_version",
            "[17.0,18.0)",
        ),
        (
            "discovery.vswhere_path",
            "tools",
        ),
    ]
    "#);
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["vsenv", "-l", "6", "diff"]).is_ok());
    assert!(Cli::try_parse_from(["vsenv", "-l", "7", "diff"]).is_err());
}

#[test]
fn test_empty_inputs_are_not_overrides() {
    let global = GlobalOptions {
        vs_version: Some(String::new()),
        vswhere_path: Some("  ".to_string()),
        ..GlobalOptions::default()
    };
    assert!(global.to_config_overrides().is_empty());

    let setup = SetupArgs {
        format: None,
        github_env: Some(String::new()),
    };
    assert!(setup.to_config_overrides().is_empty());
}

#[test]
fn test_setup_overrides() {
    let setup = SetupArgs {
        format: Some(ExportFormat::Json),
        github_env: Some("env.txt".to_string()),
    };
    assert_eq!(
        setup.to_config_overrides(),
        vec![
            ("export.format".to_string(), "json".to_string()),
            ("export.github_env".to_string(), "env.txt".to_string()),
        ]
    );
}
