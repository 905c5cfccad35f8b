// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for vsenv.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. vsenv.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. VSENV_* env vars
//! 5. CLI flags / action inputs
//! ```
//!
//! # Environment Variable Mapping
//!
//! Sections and keys are separated by a double underscore, so keys may
//! contain single ones:
//!
//! ```text
//! VSENV_DISCOVERY__VS_VERSION=17.0   → discovery.vs_version = "17.0"
//! VSENV_EXPORT__FORMAT=json          → export.format = "json"
//! VSENV_GLOBAL__LOG_LEVEL=4          → global.log_level = 4
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::env::vcvars::Shell;
use crate::core::vs::DiscoveryQuery;
use crate::error::{ConfigError, Result};

pub use loader::ConfigLoader;
use types::{DiscoveryConfig, ExportConfig, GlobalConfig, ShellConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vsenv.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "VSENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub discovery: DiscoveryConfig,
    pub shell: ShellConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vsenv::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("vsenv.toml")
    ///     .with_env_prefix("VSENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validates values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `discovery.vs_version` is blank.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        let version = self.discovery.vs_version.trim();
        if version.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "discovery".to_string(),
                key: "vs_version".to_string(),
                message: "must not be empty (use 'latest' for the newest installation)"
                    .to_string(),
            }
            .into());
        }
        if version.len() != self.discovery.vs_version.len() {
            self.discovery.vs_version = version.to_string();
        }
        Ok(())
    }

    /// The discovery query for this configuration.
    #[must_use]
    pub fn discovery_query(&self) -> DiscoveryQuery {
        DiscoveryQuery::builder()
            .requested_version(self.discovery.vs_version.clone())
            .maybe_override_path(self.discovery.vswhere_path.clone())
            .build()
    }

    /// The configured shell, or `COMSPEC`/`cmd.exe`.
    #[must_use]
    pub fn shell(&self) -> Shell {
        self.shell
            .program
            .as_ref()
            .map_or_else(Shell::default, Shell::new)
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_discovery_options(&mut options);
        self.format_shell_options(&mut options);
        self.format_export_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), display_opt(self.global.log_file.as_ref()));
    }

    fn format_discovery_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "discovery.vs_version".into(),
            self.discovery.vs_version.clone(),
        );
        options.insert(
            "discovery.vswhere_path".into(),
            display_opt(self.discovery.vswhere_path.as_ref()),
        );
    }

    fn format_shell_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "shell.program".into(),
            display_opt(self.shell.program.as_ref()),
        );
    }

    fn format_export_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("export.format".into(), self.export.format.to_string());
        options.insert(
            "export.github_env".into(),
            display_opt(self.export.github_env.as_ref()),
        );
    }
}

fn display_opt(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
