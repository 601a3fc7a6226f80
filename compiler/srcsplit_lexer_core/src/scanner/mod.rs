//! Code/comment splitting state machine.
//!
//! Reads one character at a time from a [`CharSource`] and dispatches on the
//! current [`LexState`]. Code characters (literals included) go to the code
//! buffer, comment text goes to the comment buffer. Buffers are flushed on:
//!
//! - `\n` in code: ends the code line.
//! - `//` in code: ends the code line before the comment starts.
//! - `\n` inside a line comment: ends the comment line, back to code.
//! - `\n` inside a block comment: ends that comment line, comment continues.
//! - `*/`: ends the comment line, back to code.
//! - end of input: both buffers.
//!
//! A `/* */` comment does not end the code line it sits in, so
//! `a /* x */ b` yields the single code line `a  b`.
//!
//! Newlines inside an open literal are kept in the code buffer without
//! flushing, so an unterminated literal swallows every following line into
//! one logical code line.
//!
//! Escape tracking is one level deep: a backslash marks the next character
//! as escaped, whatever it is, and that character clears the mark. Only
//! literal closing quotes look at the mark.

use crate::cursor::CharSource;
use crate::line_buffer::{LineBuffer, LineKind};
use crate::trace::{NoTrace, ScanTrace};
use crate::LexState;

/// Lines produced by one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Non-blank code lines, in discovery order.
    pub code_lines: Vec<String>,
    /// Non-blank comment lines, in discovery order.
    pub comment_lines: Vec<String>,
    /// Literal or block comment still open at end of input.
    ///
    /// A line comment cut off by end of input is closed by it, like the last
    /// code line, and is not reported here.
    pub unterminated: Option<LexState>,
}

impl ScanOutput {
    /// The literal or block comment still open at end of input, if any.
    ///
    /// The scan itself never fails on such input; whatever was buffered has
    /// already been flushed into the line sequences.
    pub fn ended_inside(&self) -> Option<LexState> {
        self.unterminated
    }

    /// Returns `true` if every literal and block comment was closed.
    pub fn is_complete(&self) -> bool {
        self.unterminated.is_none()
    }

    /// The emitted lines of one kind.
    pub fn lines(&self, kind: LineKind) -> &[String] {
        match kind {
            LineKind::Code => &self.code_lines,
            LineKind::Comment => &self.comment_lines,
        }
    }
}

/// Scan `source` to exhaustion and return its code and comment lines.
pub fn scan<S: CharSource + ?Sized>(source: &mut S) -> ScanOutput {
    scan_with_trace(source, &mut NoTrace)
}

/// Scan `source` to exhaustion, reporting every step to `trace`.
pub fn scan_with_trace<S, T>(source: &mut S, trace: &mut T) -> ScanOutput
where
    S: CharSource + ?Sized,
    T: ScanTrace + ?Sized,
{
    let mut scanner = Scanner::new(trace);
    while let Some(ch) = source.next_char() {
        scanner.step(ch, source);
    }
    let output = scanner.finish();
    tracing::debug!(
        code_lines = output.code_lines.len(),
        comment_lines = output.comment_lines.len(),
        unterminated = ?output.unterminated,
        "scan finished"
    );
    output
}

/// In-flight scan state. Lives for exactly one scan.
struct Scanner<'t, T: ScanTrace + ?Sized> {
    state: LexState,
    /// The previous character was an unescaped backslash.
    escape_pending: bool,
    code: LineBuffer,
    comment: LineBuffer,
    output: ScanOutput,
    trace: &'t mut T,
}

impl<'t, T: ScanTrace + ?Sized> Scanner<'t, T> {
    fn new(trace: &'t mut T) -> Self {
        Self {
            state: LexState::Code,
            escape_pending: false,
            code: LineBuffer::new(),
            comment: LineBuffer::new(),
            output: ScanOutput::default(),
            trace,
        }
    }

    fn step<S: CharSource + ?Sized>(&mut self, ch: char, source: &mut S) {
        self.trace.char_read(ch, self.state, self.escape_pending);
        match self.state {
            LexState::CharLiteral | LexState::StringLiteral => self.literal(ch),
            LexState::LineComment => self.line_comment(ch),
            LexState::BlockComment => self.block_comment(ch, source),
            LexState::Code => self.code_char(ch, source),
        }
        self.escape_pending = !self.escape_pending && ch == '\\';
    }

    // ─── Literals ─────────────────────────────────────────────────

    fn literal(&mut self, ch: char) {
        self.code.push(ch);
        if !self.escape_pending && self.state.closing_quote() == Some(ch) {
            self.enter(LexState::Code);
        }
    }

    // ─── Comments ─────────────────────────────────────────────────

    fn line_comment(&mut self, ch: char) {
        if ch == '\n' {
            self.flush(LineKind::Comment);
            self.enter(LexState::Code);
        } else {
            self.comment.push(ch);
        }
    }

    fn block_comment<S: CharSource + ?Sized>(&mut self, ch: char, source: &mut S) {
        match ch {
            '*' => match source.next_char() {
                Some('/') => {
                    self.flush(LineKind::Comment);
                    self.enter(LexState::Code);
                }
                ahead => {
                    self.push_back(ahead, source);
                    self.comment.push('*');
                }
            },
            '\n' => self.flush(LineKind::Comment),
            _ => self.comment.push(ch),
        }
    }

    // ─── Code ─────────────────────────────────────────────────────

    fn code_char<S: CharSource + ?Sized>(&mut self, ch: char, source: &mut S) {
        match ch {
            '\'' => {
                self.code.push(ch);
                self.enter(LexState::CharLiteral);
            }
            '"' => {
                self.code.push(ch);
                self.enter(LexState::StringLiteral);
            }
            '/' => match source.next_char() {
                Some('/') => {
                    self.flush(LineKind::Code);
                    self.enter(LexState::LineComment);
                }
                Some('*') => self.enter(LexState::BlockComment),
                ahead => {
                    self.push_back(ahead, source);
                    self.code.push('/');
                }
            },
            '\n' => self.flush(LineKind::Code),
            _ => self.code.push(ch),
        }
    }

    // ─── Helpers ──────────────────────────────────────────────────

    fn enter(&mut self, to: LexState) {
        let from = std::mem::replace(&mut self.state, to);
        tracing::trace!(%from, %to, "state transition");
        self.trace.transition(from, to);
    }

    fn push_back<S: CharSource + ?Sized>(&mut self, ahead: Option<char>, source: &mut S) {
        if let Some(ahead) = ahead {
            source.unread(ahead);
            self.trace.pushed_back(ahead);
        }
    }

    fn flush(&mut self, kind: LineKind) {
        let (buffer, lines) = match kind {
            LineKind::Code => (&mut self.code, &mut self.output.code_lines),
            LineKind::Comment => (&mut self.comment, &mut self.output.comment_lines),
        };
        match buffer.flush() {
            Some(line) => {
                self.trace.flushed(kind, &line, true);
                lines.push(line);
            }
            None => self.trace.flushed(kind, "", false),
        }
    }

    /// End of input acts as a newline on both buffers.
    fn finish(mut self) -> ScanOutput {
        self.flush(LineKind::Code);
        self.flush(LineKind::Comment);
        if self.state.is_literal() || self.state == LexState::BlockComment {
            self.output.unterminated = Some(self.state);
        }
        self.output
    }
}
