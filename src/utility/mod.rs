// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   bytes_to_utf8()  UTF-16LE/CP1252/OEM --> UTF-8
//!   Encoding::sniff  UTF-16LE vs OEM for stderr
//!   EncodedBuffer    streaming line splitter
//! ```

pub mod encoding;
