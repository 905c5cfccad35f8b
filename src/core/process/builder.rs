// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new / find
//!  • arg/args/raw_arg/flag/name
//!  • capture_stdout/stderr/output, silent_stdout/stderr
//!  • stdout_encoding/stderr_encoding, on_stdout_line
//!
//! ProcessFlags: ALLOW_FAILURE
//! StreamFlags: FORWARD_TO_LOG (default), KEEP_IN_STRING, KEEP_RAW
//! ```

use bitflags::bitflags;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::utility::encoding::Encoding;

bitflags! {
    /// Flags controlling process execution behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// Don't fail if the process exits with a non-zero status
        const ALLOW_FAILURE = 0x01;
    }
}

bitflags! {
    /// Flags controlling stream handling for stdout/stderr.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u32 {
        /// Forward decoded lines to tracing logs
        const FORWARD_TO_LOG = 0x01;
        /// Keep decoded lines in a string
        const KEEP_IN_STRING = 0x04;
        /// Keep the undecoded bytes
        const KEEP_RAW = 0x08;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::FORWARD_TO_LOG
    }
}

/// Callback invoked with each decoded stdout line, in emission order.
pub struct LineCallback(Box<dyn FnMut(&str) + Send>);

impl LineCallback {
    pub(super) fn call(&mut self, line: &str) {
        (self.0)(line);
    }
}

impl fmt::Debug for LineCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LineCallback(..)")
    }
}

/// Output from a completed process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
    stdout_raw: Vec<u8>,
    stderr_raw: Vec<u8>,
}

impl ProcessOutput {
    pub(super) fn new(
        exit_code: i32,
        (stdout, stdout_raw): (String, Vec<u8>),
        (stderr, stderr_raw): (String, Vec<u8>),
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            stdout_raw,
            stderr_raw,
        }
    }

    /// Returns the process exit code (0 = success, -1 when killed by a signal).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Decoded stdout lines joined by `\n` (if `KEEP_IN_STRING` was set).
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Decoded stderr lines joined by `\n` (if `KEEP_IN_STRING` was set).
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Undecoded stdout bytes (if `KEEP_RAW` was set).
    #[must_use]
    pub fn stdout_raw(&self) -> &[u8] {
        &self.stdout_raw
    }

    /// Undecoded stderr bytes (if `KEEP_RAW` was set).
    #[must_use]
    pub fn stderr_raw(&self) -> &[u8] {
        &self.stderr_raw
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Configuration for a stream (stdout or stderr).
#[derive(Debug, Default)]
pub(super) struct StreamConfig {
    flags: StreamFlags,
    encoding: Encoding,
    callback: Option<LineCallback>,
}

impl StreamConfig {
    pub(super) const fn flags(&self) -> StreamFlags {
        self.flags
    }

    pub(super) const fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub(super) fn take_callback(&mut self) -> Option<LineCallback> {
        self.callback.take()
    }

    const fn set_flags(&mut self, flags: StreamFlags) {
        self.flags = flags;
    }

    const fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }
}

/// Builder for configuring and running a process.
#[derive(Debug)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    /// Appended verbatim after `args` on Windows; regular arguments elsewhere.
    raw_args: Vec<String>,
    flags: ProcessFlags,
    stdout: StreamConfig,
    stderr: StreamConfig,
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// A bare name is resolved via PATH by the OS when the process spawns.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            raw_args: Vec::new(),
            flags: ProcessFlags::empty(),
            stdout: StreamConfig::default(),
            stderr: StreamConfig::default(),
            name: None,
        }
    }

    /// Finds the full path to an executable in PATH.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string_lossy().into_owned());
        }
        self
    }

    /// Adds an argument that is passed to the command line without quoting.
    ///
    /// `cmd.exe` parses its own command line, so `"script.bat" x64 >nul && set`
    /// must reach it exactly as written.
    #[must_use]
    pub fn raw_arg(mut self, arg: impl Into<String>) -> Self {
        self.raw_args.push(arg.into());
        self
    }

    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    #[must_use]
    pub const fn stdout_encoding(mut self, encoding: Encoding) -> Self {
        self.stdout.set_encoding(encoding);
        self
    }

    #[must_use]
    pub const fn stderr_encoding(mut self, encoding: Encoding) -> Self {
        self.stderr.set_encoding(encoding);
        self
    }

    /// Convenience: forward stdout to the log and keep it in a string.
    #[must_use]
    pub const fn capture_stdout(mut self) -> Self {
        self.stdout
            .set_flags(StreamFlags::FORWARD_TO_LOG.union(StreamFlags::KEEP_IN_STRING));
        self
    }

    /// Convenience: forward stderr to the log and keep it in a string.
    #[must_use]
    pub const fn capture_stderr(mut self) -> Self {
        self.stderr
            .set_flags(StreamFlags::FORWARD_TO_LOG.union(StreamFlags::KEEP_IN_STRING));
        self
    }

    #[must_use]
    pub const fn capture_output(self) -> Self {
        self.capture_stdout().capture_stderr()
    }

    /// Keep stdout as raw bytes only; nothing is decoded or logged.
    #[must_use]
    pub const fn silent_stdout(mut self) -> Self {
        self.stdout.set_flags(StreamFlags::KEEP_RAW);
        self
    }

    /// Keep stderr as raw bytes only; nothing is decoded or logged.
    #[must_use]
    pub const fn silent_stderr(mut self) -> Self {
        self.stderr.set_flags(StreamFlags::KEEP_RAW);
        self
    }

    /// Calls `callback` with every decoded stdout line as it arrives.
    #[must_use]
    pub fn on_stdout_line(mut self, callback: impl FnMut(&str) + Send + 'static) -> Self {
        self.stdout.callback = Some(LineCallback(Box::new(callback)));
        self
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    pub(super) fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) fn raw_args_slice(&self) -> &[String] {
        &self.raw_args
    }

    pub(super) const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    pub(super) const fn stdout_config(&self) -> &StreamConfig {
        &self.stdout
    }

    pub(super) const fn stderr_config(&self) -> &StreamConfig {
        &self.stderr
    }

    pub(super) const fn stdout_config_mut(&mut self) -> &mut StreamConfig {
        &mut self.stdout
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
