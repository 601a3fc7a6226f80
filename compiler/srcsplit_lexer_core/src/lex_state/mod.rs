//! The five mutually exclusive lexical contexts.

use std::fmt;

/// Which lexical context the scanner is currently inside.
///
/// Exactly one variant is active at any instant. A scan starts in
/// [`Code`](Self::Code) and returns there whenever a literal or comment
/// closes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexState {
    /// Ordinary code, scanning for literal and comment openers.
    #[default]
    Code,
    /// Inside `'...'`.
    CharLiteral,
    /// Inside `"..."`.
    StringLiteral,
    /// Inside `// ...`, up to the end of the physical line.
    LineComment,
    /// Inside `/* ... */`, possibly spanning many lines.
    BlockComment,
}

impl LexState {
    /// Quote character that ends this literal, if this is a literal context.
    #[inline]
    pub const fn closing_quote(self) -> Option<char> {
        match self {
            LexState::CharLiteral => Some('\''),
            LexState::StringLiteral => Some('"'),
            LexState::Code | LexState::LineComment | LexState::BlockComment => None,
        }
    }

    /// Returns `true` for character and string literals.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self, LexState::CharLiteral | LexState::StringLiteral)
    }

    /// Human-readable name, used in warnings and trace output.
    pub const fn name(self) -> &'static str {
        match self {
            LexState::Code => "code",
            LexState::CharLiteral => "char literal",
            LexState::StringLiteral => "string literal",
            LexState::LineComment => "line comment",
            LexState::BlockComment => "block comment",
        }
    }
}

impl fmt::Display for LexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
