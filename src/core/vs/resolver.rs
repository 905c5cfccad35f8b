// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Asking vswhere for the installation root.
//!
//! ```text
//! resolve(tool, query)
//!   tool missing?            --> ToolNotFound
//!   run vswhere (stdout streamed line by line into `captured`)
//!   exit code != 0?          --> ExecFailed (even if a path was printed)
//!   captured path empty?     --> NoInstallation
//!   vcvarsall.bat missing?   --> ScriptMissing
//!   --> Installation
//! ```
//!
//! vswhere writes to a pipe in the OEM code page, so both streams are decoded
//! as OEM.

use super::query::DiscoveryQuery;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{SetupError, SetupResult};
use crate::utility::encoding::Encoding;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

/// Component every usable installation must have.
pub const VC_TOOLS_COMPONENT: &str = "Microsoft.VisualStudio.Component.VC.Tools.x86.x64";

/// A Visual Studio installation with the C++ toolset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    root: PathBuf,
    vcvarsall: PathBuf,
}

impl Installation {
    /// Installation root as reported by vswhere.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn vcvarsall(&self) -> &Path {
        &self.vcvarsall
    }
}

/// Arguments passed to vswhere for `query`.
#[must_use]
pub fn query_args(query: &DiscoveryQuery) -> Vec<String> {
    let mut args: Vec<String> = [
        "-latest",
        "-requires",
        VC_TOOLS_COMPONENT,
        "-property",
        "installationPath",
        "-products",
        "*",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    if !query.wants_latest() {
        args.push("-version".to_string());
        args.push(query.requested_version().to_string());
    }
    args
}

/// `<root>\VC\Auxiliary\Build\vcvarsall.bat`
#[must_use]
pub fn vcvarsall_path(root: &Path) -> PathBuf {
    root.join("VC")
        .join("Auxiliary")
        .join("Build")
        .join("vcvarsall.bat")
}

/// Runs vswhere at `tool` and returns the matching installation.
///
/// # Errors
///
/// - `SetupError::ToolNotFound` if `tool` does not exist.
/// - `SetupError::ExecFailed` if vswhere cannot be run or exits non-zero.
/// - `SetupError::NoInstallation` if vswhere printed no path.
/// - `SetupError::ScriptMissing` if the installation has no `vcvarsall.bat`.
pub async fn resolve(tool: &Path, query: &DiscoveryQuery) -> SetupResult<Installation> {
    if !tool.exists() {
        return Err(SetupError::ToolNotFound {
            path: tool.to_path_buf(),
        });
    }

    let args = query_args(query);
    debug!(tool = %tool.display(), version = query.requested_version(), "querying installations");

    let captured = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&captured);

    let output = ProcessBuilder::new(tool)
        .args(&args)
        .name("vswhere")
        .stdout_encoding(Encoding::Oem)
        .stderr_encoding(Encoding::Oem)
        .capture_stderr()
        .on_stdout_line(move |line| {
            let line = line.trim();
            if !line.is_empty() {
                *sink.lock().unwrap_or_else(PoisonError::into_inner) = line.to_string();
            }
        })
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .map_err(|e| SetupError::ExecFailed {
            command: "vswhere".to_string(),
            code: -1,
            stderr: format!("{e:#}"),
        })?;

    if !output.success() {
        return Err(SetupError::ExecFailed {
            command: "vswhere".to_string(),
            code: output.exit_code(),
            stderr: output.stderr().to_string(),
        });
    }

    let root = std::mem::take(&mut *captured.lock().unwrap_or_else(PoisonError::into_inner));
    if root.is_empty() {
        return Err(SetupError::NoInstallation {
            version: query.requested_version().to_string(),
        });
    }

    let root = PathBuf::from(root);
    let vcvarsall = vcvarsall_path(&root);
    if !vcvarsall.exists() {
        return Err(SetupError::ScriptMissing { path: vcvarsall });
    }

    trace!(root = %root.display(), "resolved installation");
    Ok(Installation { root, vcvarsall })
}
