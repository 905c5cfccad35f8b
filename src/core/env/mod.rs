// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment capture and comparison.
//!
//! # Architecture
//!
//! ```text
//! vcvars::invoke()  --> EnvironmentBlock (UTF-16LE bytes)
//! block::parse()    --> EnvironmentMap   (captured)
//! current_env()     --> EnvironmentMap   (ambient)
//! diff::diff()      --> EnvironmentDiff  (to export)
//! ```
//!
//! - **Exact names**: no case folding, `Path` and `PATH` differ
//! - **Add/overwrite only**: ambient-only variables are never removed
//! - **UTF-8 internal**: decoding happens at the process boundary

pub mod block;
pub mod diff;
pub mod types;
pub mod vcvars;


use types::EnvironmentMap;

/// Captures the current process environment.
///
/// Names or values that are not valid Unicode are converted lossily.
#[must_use]
pub fn current_env() -> EnvironmentMap {
    std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect()
}
