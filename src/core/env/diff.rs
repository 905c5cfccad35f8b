// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Captured-vs-ambient comparison.

use super::types::{EnvironmentDiff, EnvironmentMap};

/// Entries of `captured` that `ambient` lacks or binds to another value.
///
/// Ambient-only variables never appear: nothing is ever unset.
#[must_use]
pub fn diff(captured: &EnvironmentMap, ambient: &EnvironmentMap) -> EnvironmentDiff {
    captured
        .iter()
        .filter(|&(name, value)| ambient.get(name) != Some(value))
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}
