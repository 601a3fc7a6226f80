use super::*;
use pretty_assertions::assert_eq;
use srcsplit_lexer_core::{scan_with_trace, SourceBuffer};
use std::path::PathBuf;

fn trace_of(source: &str) -> String {
    let buf = SourceBuffer::new(source);
    let mut trace = DebugTrace::new(Vec::new());
    scan_with_trace(&mut buf.cursor(), &mut trace);
    let bytes = trace.finish().expect("writing to a Vec cannot fail");
    String::from_utf8(bytes).expect("trace is UTF-8")
}

#[test]
fn every_line_is_commented() {
    let text = trace_of("a // b\n");
    assert!(!text.is_empty());
    for line in text.lines() {
        assert!(line.starts_with("  // "), "unprefixed trace line {line:?}");
    }
}

#[test]
fn records_reads_transitions_and_flushes() {
    let text = trace_of("x//y");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "  // -- read 'x' (U+0078) in code, escaping=false --",
            "  // -- read '/' (U+002F) in code, escaping=false --",
            "  //   code line <x> flushed",
            "  //   code -> line comment",
            "  // -- read 'y' (U+0079) in line comment, escaping=false --",
            "  //   blank code line dropped",
            "  //   comment line <y> flushed",
        ]
    );
}

#[test]
fn pushback_is_logged() {
    let text = trace_of("a/b");
    assert!(text.contains("  //   lookahead 'b' pushed back\n"));
}

#[test]
fn echo_output_duplicates_lines() {
    let output = srcsplit_lexer_core::split_source("int a; // x\n/* open");
    let mut trace = DebugTrace::new(Vec::new());
    trace.begin_file(&PathBuf::from("a.c"));
    trace.echo_output(&output);
    let text = String::from_utf8(trace.finish().expect("vec write")).expect("utf-8");
    assert_eq!(
        text,
        "  // ==== a.c ====\n\
         \x20 // [code lines (1)]\n\
         \x20 // code> int a; \n\
         \x20 // [comment lines (2)]\n\
         \x20 // comment>  x\n\
         \x20 // comment>  open\n\
         \x20 // input ended inside block comment\n"
    );
}

/// Writer that fails after `budget` bytes.
struct FailingWriter {
    budget: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.budget -= buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn first_write_error_is_reported() {
    let buf = SourceBuffer::new("some longer input\nwith lines\n");
    let mut trace = DebugTrace::new(FailingWriter { budget: 16 });
    scan_with_trace(&mut buf.cursor(), &mut trace);
    let err = trace.finish().err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("disk full"));
}

#[test]
fn append_copies_rendered_trace() {
    let mut inner = DebugTrace::new(Vec::new());
    inner.begin_file(&PathBuf::from("a.c"));
    let rendered = inner.finish().expect("writing to a Vec cannot fail");

    let mut outer = DebugTrace::new(Vec::new());
    outer.append(&rendered);
    outer.begin_file(&PathBuf::from("b.c"));
    let text = String::from_utf8(outer.finish().expect("flush")).expect("utf-8");
    assert_eq!(text, "  // ==== a.c ====\n  // ==== b.c ====\n");
}
