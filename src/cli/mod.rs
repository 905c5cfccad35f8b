// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for vsenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! vsenv [global options] <command>
//! setup [--format F] [--github-env FILE]   (default)
//! locate
//! diff
//! options
//! inis
//! version
//! ```

pub mod global;
pub mod setup;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::setup::SetupArgs;
use clap::{Parser, Subcommand};

/// Visual Studio Developer Environment Capture
///
/// Exports the variables `vcvarsall.bat` sets for x64.
#[derive(Debug, Parser)]
#[command(
    name = "vsenv",
    author,
    version,
    about = "Visual Studio Developer Environment Capture",
    long_about = "vsenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Finds the newest Visual Studio installation with the C++ x64\n\
                  toolset, runs its vcvarsall.bat and exports every variable it\n\
                  added or changed. Without a command, `setup` is run.",
    after_help = "CONFIG FILES:\n\n\
                  vsenv reads `vsenv.toml` from the current directory if it\n\
                  exists. Additional files can be given with --config; they are\n\
                  loaded afterwards and override it. VSENV_<SECTION>__<KEY>\n\
                  variables override files, command-line flags override\n\
                  everything. Use --no-default-config to skip `vsenv.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Captures the environment and exports the changed variables.
    Setup(SetupArgs),

    /// Prints the root of the installation that would be used.
    Locate,

    /// Prints the variables `setup` would export, without exporting them.
    Diff,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
