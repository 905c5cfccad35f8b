// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exporting the environment diff to whatever runs next.
//!
//! ```text
//! EnvironmentDiff --apply()--> dyn EnvSink
//!                               +-- GithubEnvSink  NAME<<DELIM ... >> $GITHUB_ENV
//!                               +-- ShellSink      set / $env: / export lines on stdout
//!                               +-- JsonSink       one object on stdout
//! ```
//!
//! Sink failures are plain I/O errors (`anyhow`), not pipeline errors.

pub mod github;
pub mod shell;


use crate::core::env::types::EnvironmentDiff;
use crate::error::{ConfigError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, trace};

pub use github::{GithubEnvSink, workflow_error};
pub use shell::{JsonSink, ShellSink};

/// Destination for exported variables.
pub trait EnvSink {
    /// Registers `name=value` for subsequent steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn export(&mut self, name: &str, value: &str) -> Result<()>;

    /// Flushes anything buffered. Called once after the last `export`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Output format of `vsenv setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Append to the `GITHUB_ENV` file.
    #[default]
    Github,
    /// `set "NAME=VALUE"` lines for cmd.exe.
    Cmd,
    /// `$env:NAME = 'VALUE'` lines.
    Powershell,
    /// `export NAME='VALUE'` lines.
    Bash,
    /// A single JSON object.
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Github => "github",
            Self::Cmd => "cmd",
            Self::Powershell => "powershell",
            Self::Bash => "bash",
            Self::Json => "json",
        })
    }
}

/// Exports every entry of `diff` through `sink`, then finishes it.
///
/// # Errors
///
/// Returns the first error reported by the sink.
pub fn apply(diff: &EnvironmentDiff, sink: &mut dyn EnvSink) -> Result<()> {
    for (name, value) in diff.iter() {
        trace!(name, value, "export");
        sink.export(name, value)?;
    }
    sink.finish()?;
    debug!(count = diff.len(), "exported variables");
    Ok(())
}

/// Creates the sink for `format`.
///
/// Shell and JSON formats write to stdout.
///
/// # Errors
///
/// Returns `ConfigError::MissingKey` if `format` is `github` and no
/// `GITHUB_ENV` file is known.
pub fn sink_for(format: ExportFormat, github_env: Option<&Path>) -> Result<Box<dyn EnvSink>> {
    let sink: Box<dyn EnvSink> = match format {
        ExportFormat::Github => {
            let path = github_env.ok_or_else(|| ConfigError::MissingKey {
                section: "export".to_string(),
                key: "github_env".to_string(),
            })?;
            Box::new(GithubEnvSink::new(path))
        }
        ExportFormat::Cmd => Box::new(ShellSink::cmd(std::io::stdout())),
        ExportFormat::Powershell => Box::new(ShellSink::powershell(std::io::stdout())),
        ExportFormat::Bash => Box::new(ShellSink::bash(std::io::stdout())),
        ExportFormat::Json => Box::new(JsonSink::new(std::io::stdout())),
    };
    Ok(sink)
}
