// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setup command arguments.

use clap::Args;

use super::global::non_empty;
use crate::export::ExportFormat;

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupArgs {
    /// How to export the variables (default: export.format, then github).
    #[arg(short = 'f', long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// File the github format appends to (default: export.github_env, then $GITHUB_ENV).
    #[arg(long = "github-env", value_name = "FILE")]
    pub github_env: Option<String>,
}

impl SetupArgs {
    /// Converts the arguments to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = Vec::new();

        if let Some(format) = self.format {
            overrides.push(("export.format".to_string(), format.to_string()));
        }

        if let Some(path) = non_empty(self.github_env.as_deref()) {
            overrides.push(("export.github_env".to_string(), path.to_string()));
        }

        overrides
    }
}
