//! File-backed scanner trace for `--debug`.
//!
//! Every trace line is prefixed with `  // ` so a trace interleaved with
//! source snippets still reads as commented-out text. Write errors are
//! latched: the first failure stops further output and is returned by
//! [`DebugTrace::finish`].

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use srcsplit_lexer_core::{LexState, LineKind, ScanOutput, ScanTrace};

/// Scanner trace writing human-readable lines to `W`.
pub struct DebugTrace<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> DebugTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Header separating one file's trace from the next.
    pub fn begin_file(&mut self, path: &Path) {
        self.line(format_args!("==== {} ====", path.display()));
    }

    /// Duplicate the scan results into the trace.
    pub fn echo_output(&mut self, output: &ScanOutput) {
        for kind in [LineKind::Code, LineKind::Comment] {
            let lines = output.lines(kind);
            self.line(format_args!("[{kind} lines ({})]", lines.len()));
            for line in lines {
                self.line(format_args!("{kind}> {line}"));
            }
        }
        if let Some(state) = output.ended_inside() {
            self.line(format_args!("input ended inside {state}"));
        }
    }

    /// Copy an already rendered trace through unchanged.
    pub fn append(&mut self, rendered: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(rendered) {
            self.error = Some(err);
        }
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "  // {args}") {
            self.error = Some(err);
        }
    }
}

impl<W: Write> ScanTrace for DebugTrace<W> {
    fn char_read(&mut self, ch: char, state: LexState, escape_pending: bool) {
        self.line(format_args!(
            "-- read {ch:?} (U+{:04X}) in {state}, escaping={escape_pending} --",
            u32::from(ch)
        ));
    }

    fn transition(&mut self, from: LexState, to: LexState) {
        self.line(format_args!("  {from} -> {to}"));
    }

    fn pushed_back(&mut self, ch: char) {
        self.line(format_args!("  lookahead {ch:?} pushed back"));
    }

    fn flushed(&mut self, kind: LineKind, line: &str, emitted: bool) {
        if emitted {
            self.line(format_args!("  {kind} line <{line}> flushed"));
        } else {
            self.line(format_args!("  blank {kind} line dropped"));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
mod tests;
