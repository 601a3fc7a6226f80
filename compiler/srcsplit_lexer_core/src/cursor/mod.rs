//! Character cursor with a single-slot pushback.
//!
//! The scanner only ever looks one character ahead: after `/` in code (to
//! detect `//` and `/*`) and after `*` inside a block comment (to detect
//! `*/`). When the speculative read does not apply, the character is handed
//! back with [`CharSource::unread`] and is the next one returned.
//!
//! # Invariant
//!
//! At most one character may be pending. Unreading twice without an
//! intervening read is a contract violation, caught by a debug assertion.

use std::str::Chars;

/// A character stream that can take back exactly one character.
///
/// Implemented by [`Cursor`]. Callers that decode their own input (network
/// buffers, incremental readers) can implement this directly and feed the
/// scanner without going through [`SourceBuffer`](crate::SourceBuffer).
pub trait CharSource {
    /// Returns the next character, or `None` once the source is exhausted.
    fn next_char(&mut self) -> Option<char>;

    /// Pushes `ch` back so the next call to [`next_char`](Self::next_char)
    /// returns it again.
    ///
    /// Only one character may be pending at a time.
    fn unread(&mut self, ch: char);
}

/// Cursor over borrowed source text.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor), or
/// directly from a `&str` with [`Cursor::new`]. Cloning the cursor snapshots
/// its position, pending character included.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    /// Character handed back by the last `unread`, if any.
    pending: Option<char>,
    /// Byte offset of the character `next_char` will return.
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            pending: None,
            pos: 0,
        }
    }

    /// Byte offset of the next character to be read.
    ///
    /// Sources larger than `u32::MAX` bytes saturate.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Returns `true` when no characters remain, pending one included.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pending.is_none() && self.chars.as_str().is_empty()
    }

    #[inline]
    fn bump_pos(&mut self, ch: char) {
        self.pos = self.pos.saturating_add(char_len(ch));
    }
}

impl CharSource for Cursor<'_> {
    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.pending.take().or_else(|| self.chars.next())?;
        self.bump_pos(ch);
        Some(ch)
    }

    #[inline]
    fn unread(&mut self, ch: char) {
        debug_assert!(
            self.pending.is_none(),
            "pushback is bounded to one character"
        );
        self.pending = Some(ch);
        self.pos = self.pos.saturating_sub(char_len(ch));
    }
}

/// UTF-8 width of `ch` as a `u32` (always 1..=4).
#[inline]
fn char_len(ch: char) -> u32 {
    // len_utf8() is at most 4, so the cast is lossless.
    #[allow(clippy::cast_possible_truncation, reason = "len_utf8() <= 4")]
    let len = ch.len_utf8() as u32;
    len
}
