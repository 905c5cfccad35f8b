// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for vsenv.

use crate::cli::global::GlobalOptions;
use crate::config::{ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};

/// Builds the loader for `global`, with `overrides` applied last.
///
/// `vsenv.toml` comes first unless disabled, then every `--config` file,
/// then `VSENV_*` variables, then the overrides.
#[must_use]
pub fn build_config_loader(global: &GlobalOptions, overrides: &[(String, String)]) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in overrides {
        loader = loader.set(key, value.as_str());
    }
    loader
}

/// Display current configuration options.
pub fn run_options_command(config: &crate::config::Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_inis_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
