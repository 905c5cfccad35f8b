// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Visual Studio installation discovery via vswhere.
//!
//! ```text
//! DiscoveryQuery { requested_version, override_path }
//!   |
//!   v
//! locator::locate()     override dir --> PATH --> ProgramFiles(x86) fallback
//!   |
//!   v
//! resolver::resolve()   vswhere -latest -requires VC.Tools -property installationPath
//!   |
//!   v
//! Installation { root, vcvarsall }
//! ```
//!
//! Nothing is cached: every run queries vswhere again.

pub mod locator;
pub mod query;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use locator::locate;
pub use query::DiscoveryQuery;
pub use resolver::{Installation, resolve};
