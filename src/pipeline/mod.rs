// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment capture pipeline.
//!
//! ```text
//! ensure_supported_platform()        not Windows --> PlatformUnsupported
//!   |
//!   v
//! vs::locate(query)                  ToolPath
//!   |
//!   v
//! vs::resolve(tool, query)           Installation { root, vcvarsall }
//!   |
//!   v
//! vcvars::invoke(shell, vcvarsall)   EnvironmentBlock
//!   |
//!   v
//! block::parse() + diff::diff()      EnvironmentDiff (empty map --> ParseEmpty)
//!   |
//!   v
//! export::apply(diff, sink)          only after every stage succeeded
//! ```
//!
//! Stages run strictly in order. The first failure ends the run and nothing
//! is exported.


use crate::core::env::diff::diff as diff_environments;
use crate::core::env::types::{EnvironmentDiff, EnvironmentMap};
use crate::core::env::vcvars::{self, Shell, TARGET_ARCH};
use crate::core::env::{block, current_env};
use crate::core::vs::{self, DiscoveryQuery, Installation};
use crate::error::{Result, SetupError, SetupResult};
use crate::export::{self, EnvSink};
use std::path::Path;
use tracing::{debug, info, trace};

/// Everything a run needs, fixed before it starts.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    query: DiscoveryQuery,
    shell: Shell,
}

impl Pipeline {
    #[must_use]
    pub const fn new(query: DiscoveryQuery, shell: Shell) -> Self {
        Self { query, shell }
    }

    #[must_use]
    pub const fn query(&self) -> &DiscoveryQuery {
        &self.query
    }

    #[must_use]
    pub const fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Finds vswhere and asks it for the installation.
    ///
    /// # Errors
    ///
    /// Returns the resolver's `SetupError`.
    pub async fn locate(&self) -> SetupResult<Installation> {
        let tool = vs::locate(&self.query);
        vs::resolve(&tool, &self.query).await
    }

    /// Runs the environment script of `installation` and diffs the result
    /// against `ambient`.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::ExecFailed` from the script invocation, or
    /// `SetupError::ParseEmpty` if no variables could be parsed.
    pub async fn capture(
        &self,
        installation: &Installation,
        ambient: &EnvironmentMap,
    ) -> SetupResult<EnvironmentDiff> {
        let output = vcvars::invoke(&self.shell, installation.vcvarsall(), TARGET_ARCH).await?;
        let captured = block::parse(&output.block);

        if captured.is_empty() {
            return Err(SetupError::ParseEmpty {
                command: script_name(installation.vcvarsall()),
                stderr: output.stderr,
            });
        }
        trace!(count = captured.len(), "parsed environment");

        let diff = diff_environments(&captured, ambient);
        debug!(captured = captured.len(), changed = diff.len(), "computed environment diff");
        Ok(diff)
    }

    /// `locate` then `capture` against `ambient`.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's `SetupError`.
    pub async fn run(
        &self,
        ambient: &EnvironmentMap,
    ) -> SetupResult<(Installation, EnvironmentDiff)> {
        let installation = self.locate().await?;
        debug!(root = %installation.root().display(), "using installation");
        let diff = self.capture(&installation, ambient).await?;
        Ok((installation, diff))
    }

    /// `run` against `ambient`, then exports the diff through `sink`.
    ///
    /// The sink is untouched unless every stage succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's `SetupError`, or the sink's I/O error.
    pub async fn export(
        &self,
        ambient: &EnvironmentMap,
        sink: &mut dyn EnvSink,
    ) -> Result<EnvironmentDiff> {
        let (installation, diff) = self.run(ambient).await?;
        export::apply(&diff, sink)?;
        info!(
            root = %installation.root().display(),
            exported = diff.len(),
            "Visual Studio environment ready"
        );
        Ok(diff)
    }
}

/// Fails with `SetupError::PlatformUnsupported` anywhere but Windows.
///
/// # Errors
///
/// See above.
pub fn ensure_supported_platform() -> SetupResult<()> {
    if cfg!(windows) {
        Ok(())
    } else {
        Err(SetupError::PlatformUnsupported {
            os: std::env::consts::OS,
        })
    }
}

/// Runs the whole pipeline and exports the diff through `sink`.
///
/// # Errors
///
/// Returns the pipeline's `SetupError` (nothing exported), or the sink's
/// I/O error.
pub async fn setup(pipeline: &Pipeline, sink: &mut dyn EnvSink) -> Result<EnvironmentDiff> {
    ensure_supported_platform()?;
    pipeline.export(&current_env(), sink).await
}

/// Resolves the installation without running its script.
///
/// # Errors
///
/// Returns the locator or resolver's `SetupError`.
pub async fn locate(pipeline: &Pipeline) -> SetupResult<Installation> {
    ensure_supported_platform()?;
    pipeline.locate().await
}

/// Runs the pipeline up to the diff without exporting.
///
/// # Errors
///
/// Returns the first failing stage's `SetupError`.
pub async fn diff(pipeline: &Pipeline) -> SetupResult<EnvironmentDiff> {
    ensure_supported_platform()?;
    let (_, diff) = pipeline.run(&current_env()).await?;
    Ok(diff)
}

fn script_name(script: &Path) -> String {
    script.file_name().map_or_else(
        || script.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
