//! Single-pass scanner that splits C-style source text into code lines and
//! comment lines.
//!
//! The scanner recognizes four lexical categories: character literals,
//! string literals, `//` line comments and `/* */` block comments. It never
//! validates syntax. Everything it sees is routed into one of two line
//! buffers, which are flushed into ordered output sequences on newlines and
//! comment boundaries.
//!
//! # Architecture
//!
//! ```text
//! SourceBuffer ──► Cursor (CharSource, one-char pushback)
//!                     │
//!                     ▼
//!                  Scanner ──► ScanOutput { code_lines, comment_lines }
//!                     │
//!                     └──► ScanTrace (optional per-scan trace sink)
//! ```

mod cursor;
mod lex_state;
mod line_buffer;
mod scanner;
mod source_buffer;
mod trace;

pub use cursor::{CharSource, Cursor};
pub use lex_state::LexState;
pub use line_buffer::{LineBuffer, LineKind};
pub use scanner::{scan, scan_with_trace, ScanOutput};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use trace::{NoTrace, RecordingTrace, ScanTrace, TraceEvent};

/// Split a source string into code lines and comment lines.
///
/// Shorthand for building a [`SourceBuffer`] and scanning its cursor.
pub fn split_source(source: &str) -> ScanOutput {
    let buf = SourceBuffer::new(source);
    scan(&mut buf.cursor())
}
