// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Finding `vswhere.exe`.
//!
//! First match wins:
//! 1. `<override_path>\vswhere.exe`, not checked for existence
//! 2. `vswhere` on `PATH`
//! 3. `%ProgramFiles(x86)%\Microsoft Visual Studio\Installer\vswhere.exe`

use super::query::DiscoveryQuery;
use crate::core::process::builder::ProcessBuilder;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, trace};

pub const VSWHERE_EXE: &str = "vswhere.exe";

const VSWHERE_NAME: &str = "vswhere";
const PROGRAM_FILES_X86_VAR: &str = "ProgramFiles(x86)";
const PROGRAM_FILES_X86_DEFAULT: &str = r"C:\Program Files (x86)";
const INSTALLER_DIR: [&str; 2] = ["Microsoft Visual Studio", "Installer"];

/// Resolves the path to `vswhere.exe`.
///
/// Always produces a candidate; whether it exists is checked by the resolver.
#[must_use]
pub fn locate(query: &DiscoveryQuery) -> PathBuf {
    locate_with(
        query,
        ProcessBuilder::find,
        || std::env::var_os(PROGRAM_FILES_X86_VAR),
    )
}

/// [`locate`] with the `PATH` search and the `ProgramFiles(x86)` lookup supplied
/// by the caller. Neither is called when the query has an override directory.
pub fn locate_with(
    query: &DiscoveryQuery,
    search: impl FnOnce(&str) -> Option<PathBuf>,
    program_files: impl FnOnce() -> Option<OsString>,
) -> PathBuf {
    if let Some(dir) = query.override_path() {
        let path = dir.join(VSWHERE_EXE);
        trace!(path = %path.display(), "using vswhere from override directory");
        return path;
    }

    if let Some(path) = search(VSWHERE_NAME) {
        debug!(path = %path.display(), "found vswhere on PATH");
        return path;
    }

    let root = program_files()
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(PROGRAM_FILES_X86_DEFAULT), PathBuf::from);
    let path = INSTALLER_DIR
        .iter()
        .fold(root, |path, part| path.join(part))
        .join(VSWHERE_EXE);
    debug!(path = %path.display(), "falling back to installer directory");
    path
}
