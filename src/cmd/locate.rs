// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::{self, Pipeline};

/// Prints the root of the installation `setup` would use.
///
/// # Errors
///
/// Returns the pipeline's `SetupError` if no usable installation is found.
pub async fn run_locate_command(config: &Config) -> Result<()> {
    let pipeline = Pipeline::new(config.discovery_query(), config.shell());
    let installation = pipeline::locate(&pipeline).await?;
    println!("{}", installation.root().display());
    Ok(())
}
