// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 anyhow::Result (glue, CLI, sinks)
//!                         |
//!        +----------------+----------------+
//!        v                v                v
//!   SetupError       ConfigError      ProcessError
//!   (pipeline)       (settings)       (spawn/lookup)
//!
//! SetupError kinds, all terminal:
//!   PlatformUnsupported  ToolNotFound  NoInstallation
//!   ScriptMissing        ExecFailed    ParseEmpty
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type for the environment capture pipeline.
pub type SetupResult<T> = std::result::Result<T, SetupError>;

/// Failures of the environment capture pipeline.
///
/// Every variant aborts the run before anything is exported.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The host is not running Windows.
    #[error("Visual Studio environments can only be captured on Windows (running on {os})")]
    PlatformUnsupported { os: &'static str },

    /// The discovery utility does not exist at the resolved path.
    #[error("vswhere.exe not found at: {}", path.display())]
    ToolNotFound { path: PathBuf },

    /// vswhere ran but reported no matching installation.
    #[error("no Visual Studio installation with C++ tools found (version: {version})")]
    NoInstallation { version: String },

    /// The installation exists but lacks the environment script.
    #[error("vcvarsall.bat not found at: {}", path.display())]
    ScriptMissing { path: PathBuf },

    /// A subprocess exited non-zero or produced unusable output.
    #[error("{command} failed with exit code {code}: {}", stderr_or_placeholder(.stderr))]
    ExecFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The environment script ran but no variables could be parsed.
    #[error("no environment variables captured from {command}: {}", stderr_or_placeholder(.stderr))]
    ParseEmpty { command: String, stderr: String },
}

fn stderr_or_placeholder(stderr: &str) -> &str {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        "<no error output>"
    } else {
        trimmed
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Missing required configuration value.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed while waiting on the child or reading its output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

#[cfg(test)]
mod tests;
