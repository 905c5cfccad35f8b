// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EncodedBuffer, Encoding, bytes_to_utf8};

fn utf16(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

#[test]
fn test_utf8_passthrough() {
    let input = "Hello, 世界!";
    let result = bytes_to_utf8(Encoding::Utf8, input.as_bytes());
    insta::assert_snapshot!(result, @"Hello, 世界!");
}

#[test]
fn test_windows_1252_conversion() {
    let result = bytes_to_utf8(Encoding::Acp, b"caf\xe9");
    insta::assert_snapshot!(result, @"café");
}

#[test]
fn test_utf16_le_conversion_non_ascii() {
    let bytes = utf16(r"INCLUDE=C:\Programme\Größe");
    assert_eq!(
        bytes_to_utf8(Encoding::Utf16Le, &bytes),
        r"INCLUDE=C:\Programme\Größe"
    );
}

#[test]
fn test_sniff() {
    assert_eq!(Encoding::sniff(&utf16("ERROR: bad arch")), Encoding::Utf16Le);
    assert_eq!(Encoding::sniff(b"ERROR: bad arch!"), Encoding::Oem);
    assert_eq!(Encoding::sniff(b"odd"), Encoding::Oem);
    assert_eq!(Encoding::sniff(b""), Encoding::Oem);
}

#[test]
fn test_encoded_buffer_lines() {
    let mut buffer = EncodedBuffer::new(Encoding::Utf8);
    let lines = buffer.push(b"line1\r\nline2\nline3");
    assert_eq!(lines, vec!["line1", "line2"]);
    assert_eq!(buffer.finish().as_deref(), Some("line3"));
}

#[test]
fn test_encoded_buffer_empty_lines_skipped() {
    let mut buffer = EncodedBuffer::new(Encoding::Utf8);
    let lines = buffer.push(b"line1\n\r\n\nline2\n");
    assert_eq!(lines, vec!["line1", "line2"]);
    assert_eq!(buffer.finish(), None);
}

#[test]
fn test_encoded_buffer_utf16_split_mid_unit() {
    let bytes = utf16("A=1\r\nB=2\r\n");
    let mut buffer = EncodedBuffer::new(Encoding::Utf16Le);

    // Split inside the second code unit of "B".
    let (first, second) = bytes.split_at(11);
    let mut lines = buffer.push(first);
    lines.extend(buffer.push(second));

    assert_eq!(lines, vec!["A=1", "B=2"]);
    assert_eq!(buffer.finish(), None);
}

#[test]
fn test_encoded_buffer_utf16_ignores_newline_byte_in_high_half() {
    // U+0A41 has 0x0A as its high byte and must not end a line.
    let bytes = utf16("X=\u{0A41}\r\n");
    let mut buffer = EncodedBuffer::new(Encoding::Utf16Le);
    assert_eq!(buffer.push(&bytes), vec!["X=\u{0A41}"]);
}
