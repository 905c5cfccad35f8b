// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]     log_level, file_log_level, log_file
//! [discovery]  vs_version, vswhere_path
//! [shell]      program
//! [export]     format, github_env
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::vs::query::LATEST;
use crate::export::ExportFormat;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output on stderr (0-6).
    pub log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file log when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Which installation to look for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// `latest` or a vswhere version range such as `[17.0,18.0)`.
    pub vs_version: String,
    /// Directory containing `vswhere.exe`.
    pub vswhere_path: Option<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            vs_version: LATEST.to_string(),
            vswhere_path: None,
        }
    }
}

/// Command interpreter running `vcvarsall.bat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Defaults to `COMSPEC`, then `cmd.exe`.
    pub program: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// File the `github` format appends to.
    pub github_env: Option<PathBuf>,
}
