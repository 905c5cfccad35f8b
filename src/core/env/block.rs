// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsing of `set` listings.
//!
//! ```text
//! EnvironmentBlock (UTF-16LE)
//!   --> decode --> trim end --> lines (CRLF or LF)
//!   --> NAME=VALUE (split on first '=')
//!   --> fold into EnvironmentMap (last write wins)
//! ```

use super::types::{EnvironmentBlock, EnvironmentMap};
use crate::utility::encoding::{Encoding, bytes_to_utf8};

/// Decodes and parses the output of `cmd /u /c ... && set`.
#[must_use]
pub fn parse(block: &EnvironmentBlock) -> EnvironmentMap {
    let text = bytes_to_utf8(Encoding::Utf16Le, block.as_bytes());
    parse_listing(text.trim_start_matches('\u{feff}'))
}

/// Parses an already decoded `NAME=VALUE` listing.
///
/// Lines without `=` and lines with an empty name are skipped. Values keep
/// everything after the first `=`, including further `=` characters.
#[must_use]
pub fn parse_listing(text: &str) -> EnvironmentMap {
    text.trim_end().lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once('=')?;
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}
