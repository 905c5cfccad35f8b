// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `setup` and `diff` commands.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::pipeline::{self, Pipeline};

const GITHUB_ENV_VAR: &str = "GITHUB_ENV";

/// Captures the environment and exports the changed variables.
///
/// # Errors
///
/// Returns an error if:
/// - The host is not Windows.
/// - The `github` format is selected without a `GITHUB_ENV` file.
/// - Any pipeline stage fails (nothing is exported then).
/// - Writing the exports fails.
pub async fn run_setup_command(config: &Config) -> Result<()> {
    pipeline::ensure_supported_platform()?;

    let github_env = github_env_path(config);
    let mut sink = export::sink_for(config.export.format, github_env.as_deref())?;

    let pipeline = Pipeline::new(config.discovery_query(), config.shell());
    pipeline::setup(&pipeline, sink.as_mut()).await?;
    Ok(())
}

/// Prints the variables `setup` would export as `NAME=VALUE` lines.
///
/// # Errors
///
/// Returns the first failing stage's error.
pub async fn run_diff_command(config: &Config) -> Result<()> {
    let pipeline = Pipeline::new(config.discovery_query(), config.shell());
    let diff = pipeline::diff(&pipeline).await?;
    for (name, value) in diff.iter() {
        println!("{name}={value}");
    }
    Ok(())
}

/// `export.github_env`, then the `GITHUB_ENV` variable.
fn github_env_path(config: &Config) -> Option<PathBuf> {
    config.export.github_env.clone().or_else(|| {
        std::env::var_os(GITHUB_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}
