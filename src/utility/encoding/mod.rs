// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding for process output.
//!
//! ```text
//! cmd /u ... && set   --> UTF-16LE --+
//! vswhere             --> OEM -------+--(decode)--> UTF-8 String
//! batch file stderr   --> OEM/ACP ---+
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences become U+FFFD.

use encoding_rs::{IBM866, UTF_16LE, WINDOWS_1252};
use std::borrow::Cow;

/// Encoding of a process output stream.
///
/// - `Utf8`: UTF-8 (65001)
/// - `Utf16Le`: UTF-16 LE (1200), what `cmd /u` emits for built-in commands
/// - `Acp`: Active Code Page, typically Windows-1252
/// - `Oem`: OEM Code Page, typically IBM437/866
/// - `Unknown`: treated as UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Unknown,
    Utf8,
    Utf16Le,
    Acp,
    Oem,
}

impl Encoding {
    /// Guesses whether `bytes` are UTF-16LE or a single-byte code page.
    ///
    /// `cmd /u` writes its own messages as UTF-16 while tools called from a
    /// batch file write in the OEM code page, so stderr can be either.
    /// ASCII-heavy UTF-16LE text has a NUL in most odd positions.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.len() < 2 || bytes.len() % 2 != 0 {
            return Self::Oem;
        }
        let pairs = bytes.len() / 2;
        let high_zero = bytes.chunks_exact(2).filter(|pair| pair[1] == 0).count();
        if high_zero * 2 > pairs {
            Self::Utf16Le
        } else {
            Self::Oem
        }
    }

    const fn unit_len(self) -> usize {
        match self {
            Self::Utf16Le => 2,
            _ => 1,
        }
    }
}

/// Converts bytes from the given encoding to UTF-8.
///
/// # Example
/// ```
/// use vsenv::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let utf16 = b"P\x00A\x00T\x00H\x00";
/// assert_eq!(bytes_to_utf8(Encoding::Utf16Le, utf16), "PATH");
///
/// let cp1252_bytes = b"caf\xe9";
/// assert_eq!(bytes_to_utf8(Encoding::Acp, cp1252_bytes), "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 | Encoding::Unknown => String::from_utf8_lossy(bytes),
        Encoding::Utf16Le => UTF_16LE.decode_without_bom_handling(bytes).0,
        Encoding::Acp => WINDOWS_1252.decode_without_bom_handling(bytes).0,
        Encoding::Oem => IBM866.decode_without_bom_handling(bytes).0,
    }
}

/// Splits a streamed byte sequence into decoded lines.
///
/// Bytes are held until a full line (terminated by LF, CR stripped) is
/// available, so a chunk boundary may fall anywhere, including between the
/// two bytes of a UTF-16 code unit. Empty lines are dropped.
///
/// ```
/// use vsenv::utility::encoding::{EncodedBuffer, Encoding};
///
/// let mut buffer = EncodedBuffer::new(Encoding::Utf8);
/// assert_eq!(buffer.push(b"line1\r\nli"), vec!["line1"]);
/// assert_eq!(buffer.push(b"ne2\n"), vec!["line2"]);
/// assert_eq!(buffer.finish(), None);
/// ```
#[derive(Debug)]
pub struct EncodedBuffer {
    encoding: Encoding,
    pending: Vec<u8>,
}

impl EncodedBuffer {
    #[must_use]
    pub const fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            pending: Vec::new(),
        }
    }

    /// Appends `bytes` and returns every line completed by them.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(bytes);

        let mut lines = Vec::new();
        while let Some(end) = self.find_line_feed() {
            let unit = self.encoding.unit_len();
            let line: Vec<u8> = self.pending.drain(..end + unit).collect();
            if let Some(text) = self.decode_line(&line[..end]) {
                lines.push(text);
            }
        }
        lines
    }

    /// Flushes whatever is left after the stream closed.
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.pending);
        let usable = rest.len() - rest.len() % self.encoding.unit_len();
        self.decode_line(&rest[..usable])
    }

    /// Byte offset of the next line feed, aligned to the code unit size.
    fn find_line_feed(&self) -> Option<usize> {
        match self.encoding {
            Encoding::Utf16Le => self
                .pending
                .chunks_exact(2)
                .position(|unit| unit == [b'\n', 0])
                .map(|index| index * 2),
            _ => self.pending.iter().position(|&b| b == b'\n'),
        }
    }

    fn decode_line(&self, bytes: &[u8]) -> Option<String> {
        let text = bytes_to_utf8(self.encoding, bytes);
        let text = text.trim_end_matches('\r');
        if text.is_empty() {
            None
        } else {
            Some(text.to_owned())
        }
    }
}

#[cfg(test)]
mod tests;
