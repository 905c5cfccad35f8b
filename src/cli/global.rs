// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE         ← Additional config files (can repeat)
//! --log-level N         ← Console verbosity (0-6)
//! --file-log-level N    ← File verbosity
//! --log-file FILE       ← global.log_file
//! --vs-version V        ← discovery.vs_version  (or INPUT_VS-VERSION)
//! --vswhere-path DIR    ← discovery.vswhere_path (or INPUT_VSWHERE-PATH)
//!
//! Precedence: CLI flags > VSENV_* > --config > vsenv.toml > defaults
//! ```
//!
//! `INPUT_*` are the variables GitHub Actions sets for action inputs. Empty
//! values count as unset.

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level.
    #[arg(
        long = "file-log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Visual Studio version range passed to vswhere, or 'latest'.
    #[arg(long = "vs-version", value_name = "VERSION", env = "INPUT_VS-VERSION")]
    pub vs_version: Option<String>,

    /// Directory containing vswhere.exe.
    #[arg(long = "vswhere-path", value_name = "DIR", env = "INPUT_VSWHERE-PATH")]
    pub vswhere_path: Option<String>,

    /// Disables loading `vsenv.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.log_level".to_string(), level.to_string()));
        }

        if let Some(level) = self.file_log_level {
            overrides.push(("global.file_log_level".to_string(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".to_string(), path.display().to_string()));
        }

        if let Some(version) = non_empty(self.vs_version.as_deref()) {
            overrides.push(("discovery.vs_version".to_string(), version.to_string()));
        }

        if let Some(dir) = non_empty(self.vswhere_path.as_deref()) {
            overrides.push(("discovery.vswhere_path".to_string(), dir.to_string()));
        }

        overrides
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
