//! Per-scan trace sink.
//!
//! A trace observes the scanner without influencing it. It is passed into
//! [`scan_with_trace`](crate::scan_with_trace) explicitly, so two scans
//! running side by side never share trace state. All hooks have empty
//! default bodies; implement only the ones you need.

use crate::{LexState, LineKind};

/// Observer for scanner activity.
pub trait ScanTrace {
    /// A character was read from the source, before it is dispatched.
    fn char_read(&mut self, _ch: char, _state: LexState, _escape_pending: bool) {}

    /// The scanner moved from one lexical context to another.
    fn transition(&mut self, _from: LexState, _to: LexState) {}

    /// A lookahead character was read and not consumed, so it was pushed back.
    fn pushed_back(&mut self, _ch: char) {}

    /// A line buffer was flushed. `emitted` is `false` when the line was
    /// blank and therefore dropped.
    fn flushed(&mut self, _kind: LineKind, _line: &str, _emitted: bool) {}
}

/// Trace sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl ScanTrace for NoTrace {}

/// One recorded scanner event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    CharRead {
        ch: char,
        state: LexState,
        escape_pending: bool,
    },
    Transition {
        from: LexState,
        to: LexState,
    },
    PushedBack(char),
    Flushed {
        kind: LineKind,
        line: String,
        emitted: bool,
    },
}

/// Trace sink that keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrace {
    events: Vec<TraceEvent>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Every transition, in order.
    pub fn transitions(&self) -> Vec<(LexState, LexState)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Transition { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl ScanTrace for RecordingTrace {
    fn char_read(&mut self, ch: char, state: LexState, escape_pending: bool) {
        self.events.push(TraceEvent::CharRead {
            ch,
            state,
            escape_pending,
        });
    }

    fn transition(&mut self, from: LexState, to: LexState) {
        self.events.push(TraceEvent::Transition { from, to });
    }

    fn pushed_back(&mut self, ch: char) {
        self.events.push(TraceEvent::PushedBack(ch));
    }

    fn flushed(&mut self, kind: LineKind, line: &str, emitted: bool) {
        self.events.push(TraceEvent::Flushed {
            kind,
            line: line.to_owned(),
            emitted,
        });
    }
}

impl<T: ScanTrace + ?Sized> ScanTrace for &mut T {
    fn char_read(&mut self, ch: char, state: LexState, escape_pending: bool) {
        (**self).char_read(ch, state, escape_pending);
    }

    fn transition(&mut self, from: LexState, to: LexState) {
        (**self).transition(from, to);
    }

    fn pushed_back(&mut self, ch: char) {
        (**self).pushed_back(ch);
    }

    fn flushed(&mut self, kind: LineKind, line: &str, emitted: bool) {
        (**self).flushed(kind, line, emitted);
    }
}

#[cfg(test)]
mod tests;
