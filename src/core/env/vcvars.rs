// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Visual Studio environment capture through `vcvarsall.bat`.
//!
//! ```text
//! cmd.exe /u /s /c ""<vcvarsall.bat>" x64 >nul && set"
//!          |  |                        |   |       |
//!          |  |                        |   |       +-- dump, only if the script succeeded
//!          |  |                        |   +-- script chatter discarded
//!          |  |                        +-- single target architecture
//!          |  +-- strip only the outer quotes
//!          +-- built-in commands write UTF-16LE
//! ```
//!
//! Without `/s`, cmd drops the first and last quote whenever the quoted path
//! holds a special character, so `C:\Program Files (x86)\...` would run
//! `C:\Program`.

use super::types::EnvironmentBlock;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{SetupError, SetupResult};
use crate::utility::encoding::{Encoding, bytes_to_utf8};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// The only architecture environments are captured for.
pub const TARGET_ARCH: &str = "x64";

const UNICODE_FLAG: &str = "/u";
const STRIP_QUOTES_FLAG: &str = "/s";
const COMMAND_FLAG: &str = "/c";
const DEFAULT_SHELL: &str = "cmd.exe";

/// Command interpreter used to run the environment script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: PathBuf,
}

impl Shell {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `COMSPEC` when set, `cmd.exe` otherwise.
    #[must_use]
    pub fn from_comspec(comspec: Option<OsString>) -> Self {
        comspec
            .filter(|value| !value.is_empty())
            .map_or_else(|| Self::new(DEFAULT_SHELL), Self::new)
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The text following `/s /c`, wrapped in the quotes `/s` strips.
    #[must_use]
    pub fn script_command(script: &Path, arch: &str) -> String {
        format!("\"\"{}\" {arch} >nul && set\"", script.display())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::from_comspec(std::env::var_os("COMSPEC"))
    }
}

/// What the environment script invocation produced.
#[derive(Debug, Clone)]
pub struct ScriptOutput {
    pub block: EnvironmentBlock,
    /// Decoded stderr, kept for diagnostics.
    pub stderr: String,
}

/// Runs `script` for `arch` and captures the resulting environment listing.
///
/// Output is never forwarded to the log: the listing is large and the
/// script's own chatter goes to `nul`.
///
/// # Errors
///
/// Returns `SetupError::ExecFailed` if the shell cannot be spawned, exits
/// non-zero, or prints nothing.
pub async fn invoke(shell: &Shell, script: &Path, arch: &str) -> SetupResult<ScriptOutput> {
    let command = script_display_name(script);
    debug!(
        script = %script.display(),
        arch,
        shell = %shell.program().display(),
        "running environment script"
    );

    let output = ProcessBuilder::new(shell.program())
        .args([UNICODE_FLAG, STRIP_QUOTES_FLAG, COMMAND_FLAG])
        .raw_arg(Shell::script_command(script, arch))
        .name(command.clone())
        .silent_stdout()
        .silent_stderr()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .map_err(|e| SetupError::ExecFailed {
            command: command.clone(),
            code: -1,
            stderr: format!("{e:#}"),
        })?;

    let stderr = decode_stderr(output.stderr_raw());

    if !output.success() || output.stdout_raw().is_empty() {
        return Err(SetupError::ExecFailed {
            command,
            code: output.exit_code(),
            stderr,
        });
    }

    trace!(bytes = output.stdout_raw().len(), "captured environment block");
    Ok(ScriptOutput {
        block: EnvironmentBlock::new(output.stdout_raw().to_vec()),
        stderr,
    })
}

/// `cmd /u` writes its own errors as UTF-16; tools the batch file runs use the OEM page.
fn decode_stderr(bytes: &[u8]) -> String {
    bytes_to_utf8(Encoding::sniff(bytes), bytes)
        .trim()
        .to_string()
}

fn script_display_name(script: &Path) -> String {
    script.file_name().map_or_else(
        || script.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
