// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("vswhere.exe")
//!   .args() .raw_arg() .capture_stdout() .on_stdout_line()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr (decoded lines and/or raw bytes)
//!       --> ProcessOutput { exit_code, stdout, stderr, raw }
//! ```

pub mod builder;
mod io;
mod runner;
