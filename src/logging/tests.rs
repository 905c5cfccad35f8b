// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(9), None);
    assert_eq!(LogLevel::try_from(4).ok(), Some(LogLevel::DEBUG));
}

#[test]
fn test_filter_directives() {
    let directives: Vec<_> = [
        LogLevel::SILENT,
        LogLevel::ERROR,
        LogLevel::INFO,
        LogLevel::TRACE,
        LogLevel::DUMP,
    ]
    .into_iter()
    .map(LogLevel::to_filter_directives)
    .collect();

    assert_eq!(
        directives,
        vec![
            "off",
            "error,vsenv=error",
            "warn,vsenv=info",
            "warn,vsenv=trace",
            "trace",
        ]
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(config.ansi());
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let ok: LogLevel = serde_json::from_str("5").unwrap();
    assert_eq!(ok, LogLevel::TRACE);
    assert!(serde_json::from_str::<LogLevel>("12").is_err());
}
