//! Owned source text for one scan.
//!
//! A `SourceBuffer` holds the decoded text of a single file and hands out
//! [`Cursor`]s over it. Every scan gets a fresh cursor, so scanning the same
//! buffer twice starts from identical state.
//!
//! # Encoding Detection
//!
//! During construction from raw bytes, the buffer records:
//! - a UTF-8 BOM (stripped, so it never lands in the first code line)
//! - UTF-16 BOMs (wrong encoding; the text will decode as garbage)
//! - invalid UTF-8 (decoded lossily with U+FFFD replacements)
//! - interior NUL bytes
//!
//! Issues are recorded as [`EncodingIssue`] values and never stop a scan.
//! The driver turns them into warnings.

use std::borrow::Cow;

use crate::Cursor;

/// Decoded source text plus any encoding issues found while decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the original input.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start. Stripped.
    Utf8Bom,
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start.
    Utf16BeBom,
    /// Bytes that are not valid UTF-8. Replaced with U+FFFD.
    InvalidUtf8,
    /// Null byte (U+0000) in source content. Scanned as an ordinary character.
    InteriorNull,
}

impl EncodingIssueKind {
    /// Human-readable name of the issue, as shown in warnings.
    pub const fn description(self) -> &'static str {
        match self {
            EncodingIssueKind::Utf8Bom => "UTF-8 byte order mark",
            EncodingIssueKind::Utf16LeBom => "UTF-16 (little-endian) byte order mark",
            EncodingIssueKind::Utf16BeBom => "UTF-16 (big-endian) byte order mark",
            EncodingIssueKind::InvalidUtf8 => "invalid UTF-8",
            EncodingIssueKind::InteriorNull => "null byte",
        }
    }
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

impl SourceBuffer {
    /// Create a buffer from already-decoded text.
    ///
    /// A leading U+FEFF is stripped and recorded as a UTF-8 BOM.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a buffer from raw file bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut encoding_issues = Vec::new();
        let body = detect_bom(bytes, &mut encoding_issues);
        let offset = bytes.len() - body.len();
        detect_interior_nulls(body, offset, &mut encoding_issues);

        let text = match String::from_utf8_lossy(body) {
            Cow::Borrowed(text) => text.to_owned(),
            Cow::Owned(text) => {
                encoding_issues.push(EncodingIssue {
                    kind: EncodingIssueKind::InvalidUtf8,
                    pos: first_invalid_utf8(body).map_or(0, |p| saturate(p + offset)),
                    len: 1,
                });
                text
            }
        };

        Self {
            text,
            encoding_issues,
        }
    }

    /// Create a [`Cursor`] positioned at the first character.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text)
    }

    /// Length of the decoded text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of physical lines, counting a trailing partial line.
    pub fn line_count(&self) -> usize {
        let bytes = self.text.as_bytes();
        let newlines = memchr::memchr_iter(b'\n', bytes).count();
        match bytes.last() {
            None | Some(b'\n') => newlines,
            Some(_) => newlines + 1,
        }
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Record a byte order mark and return the bytes after a UTF-8 BOM.
fn detect_bom<'a>(source: &'a [u8], issues: &mut Vec<EncodingIssue>) -> &'a [u8] {
    if let Some(rest) = source.strip_prefix(UTF8_BOM) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
        return rest;
    }
    let kind = match source {
        [0xFF, 0xFE, ..] => EncodingIssueKind::Utf16LeBom,
        [0xFE, 0xFF, ..] => EncodingIssueKind::Utf16BeBom,
        _ => return source,
    };
    issues.push(EncodingIssue {
        kind,
        pos: 0,
        len: 2,
    });
    source
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], offset: usize, issues: &mut Vec<EncodingIssue>) {
    for pos in memchr::memchr_iter(0, source) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::InteriorNull,
            pos: saturate(offset + pos),
            len: 1,
        });
    }
}

fn first_invalid_utf8(bytes: &[u8]) -> Option<usize> {
    std::str::from_utf8(bytes).err().map(|e| e.valid_up_to())
}

/// Byte positions past `u32::MAX` (files over 4 GiB) saturate.
fn saturate(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
