// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::core::env::vcvars::Shell;
use crate::export::ExportFormat;
use crate::logging::LogLevel;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_default_config() {
    let config = Config::default();
    let options: Vec<_> = config
        .format_options()
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    insta::assert_snapshot!(options.join("\n"), @r"
    discovery.vs_version   = latest
    discovery.vswhere_path =
    export.format          = github
    export.github_env      =
    global.file_log_level  = 5
    global.log_file        =
    global.log_level       = 3
    shell.program          =
    ");
}

#[test]
fn test_parse_full_config() {
    let config = Config::parse(
        r#"
        [global]
        log_level = 4
        file_log_level = 6
        log_file = "vsenv.log"

        [discovery]
        vs_version = "[17.0,18.0)"
        vswhere_path = 'D:\tools'

        [shell]
        program = 'C:\Windows\System32\cmd.exe'

        [export]
        format = "powershell"
        github_env = "env.txt"
        "#,
    )
    .unwrap();

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::DUMP);
    assert_eq!(config.global.log_file, Some(PathBuf::from("vsenv.log")));
    assert_eq!(config.discovery.vs_version, "[17.0,18.0)");
    assert_eq!(config.discovery.vswhere_path, Some(PathBuf::from(r"D:\tools")));
    assert_eq!(config.export.format, ExportFormat::Powershell);
    assert_eq!(config.export.github_env, Some(PathBuf::from("env.txt")));
    assert_eq!(
        config.shell(),
        Shell::new(r"C:\Windows\System32\cmd.exe")
    );
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = Config::parse("[export]\nformat = \"json\"\n").unwrap();
    assert_eq!(config.export.format, ExportFormat::Json);
    assert_eq!(config.discovery.vs_version, "latest");
    assert_eq!(config.global.log_level, LogLevel::INFO);
}

#[test]
fn test_unknown_keys_rejected() {
    assert!(Config::parse("[discovery]\nversion = \"17\"\n").is_err());
    assert!(Config::parse("[paths]\nprefix = \"x\"\n").is_err());
}

#[test]
fn test_invalid_values_rejected() {
    assert!(Config::parse("[global]\nlog_level = 7\n").is_err());
    assert!(Config::parse("[export]\nformat = \"fish\"\n").is_err());
}

#[test]
fn test_empty_version_rejected() {
    let err = Config::parse("[discovery]\nvs_version = \"  \"\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'vs_version' in section '[discovery]': must not be empty (use 'latest' for the newest installation)"
    );
}

#[test]
fn test_version_is_trimmed() {
    let config = Config::parse("[discovery]\nvs_version = \" 17.0 \"\n").unwrap();
    assert_eq!(config.discovery.vs_version, "17.0");
}

#[test]
fn test_env_overrides_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[discovery]\nvs_version = \"16.0\"\n")
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env(&[
            ("VSENV_DISCOVERY__VS_VERSION", "17.0"),
            ("VSENV_DISCOVERY__VSWHERE_PATH", "/opt/vswhere"),
            ("VSENV_GLOBAL__LOG_LEVEL", "4"),
            ("VSENV_EXPORT__FORMAT", "bash"),
            ("UNRELATED", "x"),
        ]))
        .build()
        .unwrap();

    // stays a string, "17.0" is not turned into 17
    assert_eq!(config.discovery.vs_version, "17.0");
    assert_eq!(
        config.discovery.vswhere_path.as_deref(),
        Some(Path::new("/opt/vswhere"))
    );
    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(config.export.format, ExportFormat::Bash);
}

#[test]
fn test_overrides_beat_env() {
    let config = ConfigLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env(&[("VSENV_DISCOVERY__VS_VERSION", "17.0")]))
        .set("discovery.vs_version", "[16.0,17.0)")
        .set("export.format", "cmd")
        .build()
        .unwrap();

    assert_eq!(config.discovery.vs_version, "[16.0,17.0)");
    assert_eq!(config.export.format, ExportFormat::Cmd);
}

#[test]
fn test_required_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(dir.path().join("missing.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_optional_file_and_loaded_files() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(&present, "[export]\nformat = \"cmd\"\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(dir.path().join("absent.toml"))
        .add_toml_file_optional(&present);

    assert_eq!(loader.loaded_files(), vec![("optional".to_string(), present.clone())]);
    assert_eq!(
        loader.format_loaded_files(),
        vec![format!("1. [optional] {}", present.display())]
    );

    let config = loader.build().unwrap();
    assert_eq!(config.export.format, ExportFormat::Cmd);
}

#[test]
fn test_discovery_query_from_config() {
    let config =
        Config::parse("[discovery]\nvs_version = \"17.0\"\nvswhere_path = \"bin\"\n").unwrap();
    let query = config.discovery_query();

    assert_eq!(query.requested_version(), "17.0");
    assert!(!query.wants_latest());
    assert_eq!(query.override_path(), Some(Path::new("bin")));

    assert!(Config::default().discovery_query().wants_latest());
}
