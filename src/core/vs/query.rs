// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use bon::Builder;
use std::path::{Path, PathBuf};

/// Version selector meaning "newest installation".
pub const LATEST: &str = "latest";

/// What to look for and where to find vswhere.
///
/// Built once from configuration and passed down unchanged.
///
/// ```
/// use vsenv::core::vs::DiscoveryQuery;
///
/// let query = DiscoveryQuery::builder().build();
/// assert!(query.wants_latest());
///
/// let query = DiscoveryQuery::builder().requested_version("[17.0,18.0)").build();
/// assert_eq!(query.requested_version(), "[17.0,18.0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct DiscoveryQuery {
    /// Version range passed to `vswhere -version`, or `latest`.
    #[builder(into, default = LATEST.to_string())]
    requested_version: String,

    /// Directory holding `vswhere.exe`; skips every other lookup when set.
    #[builder(into)]
    override_path: Option<PathBuf>,
}

impl Default for DiscoveryQuery {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DiscoveryQuery {
    #[must_use]
    pub fn requested_version(&self) -> &str {
        &self.requested_version
    }

    #[must_use]
    pub fn override_path(&self) -> Option<&Path> {
        self.override_path.as_deref()
    }

    #[must_use]
    pub fn wants_latest(&self) -> bool {
        self.requested_version == LATEST
    }
}
