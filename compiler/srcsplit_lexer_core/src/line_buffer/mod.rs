//! Per-output line accumulator.
//!
//! One buffer collects code, the other collects comment text. Characters
//! are appended until a flush, at which point the buffered line is handed
//! out if it contains anything besides whitespace, and the buffer is
//! cleared either way.

use std::fmt;

/// Which output sequence a buffer feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Program text, literals included.
    Code,
    /// Text of `//` and `/* */` comments, markers excluded.
    Comment,
}

impl LineKind {
    /// Lowercase name used in diagnostics and debug traces.
    pub const fn name(self) -> &'static str {
        match self {
            LineKind::Code => "code",
            LineKind::Comment => "comment",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Characters of the line currently being assembled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one character.
    ///
    /// Carriage returns are never stored, so CRLF input yields the same
    /// lines as LF input.
    #[inline]
    pub fn push(&mut self, ch: char) {
        if ch != '\r' {
            self.text.push(ch);
        }
    }

    /// Returns `true` if the buffer holds only whitespace (or nothing).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// End the current line.
    ///
    /// Returns the untrimmed line when it has non-whitespace content, and
    /// `None` for a blank line. The buffer is empty afterwards in both cases.
    pub fn flush(&mut self) -> Option<String> {
        if self.is_blank() {
            self.text.clear();
            None
        } else {
            Some(std::mem::take(&mut self.text))
        }
    }
}

#[cfg(test)]
mod tests;
