// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!    vs        env     process
//!     |         |         |
//!  vswhere   vcvarsall  Builder
//!  Query     parse/diff Output
//!  Install              StreamFlags
//! ```
//!
//! Nothing here is Windows-only at compile time; the pipeline refuses to
//! run elsewhere.

pub mod env;
pub mod process;
pub mod vs;
