// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for captured environments.
//!
//! ```text
//! EnvironmentBlock  raw UTF-16LE bytes from `cmd /u ... && set`
//! EnvironmentMap    BTreeMap<String, String>, names kept as-is
//! EnvironmentDiff   sorted (name, value) pairs to export
//! ```

use std::collections::BTreeMap;

/// Undecoded output of the environment script invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentBlock(Vec<u8>);

impl EnvironmentBlock {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Variable name to value.
///
/// Names are compared exactly; `Path` and `PATH` are different keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentMap(BTreeMap<String, String>);

impl EnvironmentMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a copy with `name` bound to `value`, replacing any earlier binding.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentMap {
    /// Later pairs overwrite earlier ones with the same name.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |map, (k, v)| map.with(k, v))
    }
}

/// Variables whose captured value is new or different from the ambient one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentDiff(Vec<(String, String)>);

impl EnvironmentDiff {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for EnvironmentDiff {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
