// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub Actions environment file.
//!
//! ```text
//! NAME<<ghadelimiter_0
//! VALUE
//! ghadelimiter_0
//! ```
//!
//! The multi-line form is used for every variable so values may contain
//! anything. The delimiter never occurs in the name or the value.

use super::EnvSink;
use crate::error::Result;
use anyhow::Context;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Appends variables to the file named by `GITHUB_ENV`.
///
/// Records are buffered and written with one append in [`EnvSink::finish`],
/// so a failure mid-way leaves the file untouched.
#[derive(Debug)]
pub struct GithubEnvSink {
    path: PathBuf,
    buffer: String,
}

impl GithubEnvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer: String::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EnvSink for GithubEnvSink {
    fn export(&mut self, name: &str, value: &str) -> Result<()> {
        let delimiter = delimiter_for(name, value);
        writeln!(self.buffer, "{name}<<{delimiter}\n{value}\n{delimiter}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open GITHUB_ENV file: {}", self.path.display()))?;
        file.write_all(self.buffer.as_bytes())
            .with_context(|| format!("Failed to write GITHUB_ENV file: {}", self.path.display()))?;
        self.buffer.clear();
        Ok(())
    }
}

/// First `ghadelimiter_<n>` that occurs in neither `name` nor `value`.
#[must_use]
pub fn delimiter_for(name: &str, value: &str) -> String {
    (0u64..)
        .map(|n| format!("{DELIMITER_PREFIX}{n}"))
        .find(|candidate| !name.contains(candidate.as_str()) && !value.contains(candidate.as_str()))
        .unwrap_or_else(|| DELIMITER_PREFIX.to_string())
}

/// An `::error::` workflow command carrying `message`.
///
/// ```
/// use vsenv::export::workflow_error;
///
/// assert_eq!(workflow_error("50% done\nfailed"), "::error::50%25 done%0Afailed");
/// ```
#[must_use]
pub fn workflow_error(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}
