//! Output destinations and display format.
//!
//! Code and comment lines each go to a [`Sink`]. When both go to the same
//! sink (stdout by default) they share it, so a file's code section is
//! immediately followed by its comment section.
//!
//! Display style (used for stdout):
//!
//! ```text
//! [File: a.c]            <- only when more than one file is processed
//! [Code lines (2)]
//! int a;
//! int b;
//!
//! [Comment lines (1)]
//!  a comment
//! ```
//!
//! Plain style (used for `--srcfile` / `--comfile`) writes the bare lines,
//! keeping the `[File: ...]` prefix for multi-file runs.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use srcsplit_lexer_core::{LineKind, ScanOutput};

use crate::config::SplitConfig;
use crate::error::{Result, SplitError};

/// How a sink lays out its lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Headed sections with line counts.
    Display,
    /// Bare lines.
    Plain,
}

/// One output destination.
pub struct Sink<W: Write> {
    writer: W,
    style: Style,
    /// Used in write error messages.
    label: String,
    /// Position in the batch of the file last written to this sink. The
    /// same path may be named twice, so files are told apart by position.
    current_file: Option<usize>,
    /// Sections written for `current_file` so far.
    sections: usize,
}

impl<W: Write> Sink<W> {
    pub fn new(writer: W, style: Style, label: impl Into<String>) -> Self {
        Self {
            writer,
            style,
            label: label.into(),
            current_file: None,
            sections: 0,
        }
    }

    fn write_section(
        &mut self,
        file: usize,
        path: &Path,
        batch: bool,
        kind: LineKind,
        lines: &[String],
    ) -> io::Result<()> {
        if self.current_file != Some(file) {
            if batch {
                if self.current_file.is_some() {
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "[File: {}]", path.display())?;
            }
            self.current_file = Some(file);
            self.sections = 0;
        }

        if self.style == Style::Display {
            if self.sections > 0 {
                writeln!(self.writer)?;
            }
            let title = match kind {
                LineKind::Code => "Code",
                LineKind::Comment => "Comment",
            };
            writeln!(self.writer, "[{title} lines ({})]", lines.len())?;
        }
        for line in lines {
            writeln!(self.writer, "{line}")?;
        }
        self.sections += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Routes scan results to their sinks.
pub struct Report<W: Write> {
    sinks: Vec<Sink<W>>,
    code: usize,
    comment: usize,
    batch: bool,
    /// Files written so far.
    files: usize,
}

impl Report<Box<dyn Write>> {
    /// Open the destinations named by `config`.
    ///
    /// Output files are created (or truncated) up front.
    pub fn open(config: &SplitConfig) -> Result<Self> {
        let code = open_sink(config.code_file.as_deref(), "code")?;
        let comment = match (&config.code_file, &config.comment_file) {
            (None, None) => None,
            (_, file) => Some(open_sink(file.as_deref(), "comment")?),
        };
        Ok(Self::new(code, comment, config.is_batch()))
    }
}

impl<W: Write> Report<W> {
    /// Build a report from explicit sinks. With `comment == None`, comment
    /// lines share the code sink.
    pub fn new(code: Sink<W>, comment: Option<Sink<W>>, batch: bool) -> Self {
        let mut sinks = vec![code];
        let comment = match comment {
            Some(sink) => {
                sinks.push(sink);
                1
            }
            None => 0,
        };
        Self {
            sinks,
            code: 0,
            comment,
            batch,
            files: 0,
        }
    }

    /// Write one file's code and comment sections.
    ///
    /// Every call starts a new file in the batch, even when `path` repeats
    /// the previous one.
    pub fn write_file(&mut self, path: &Path, output: &ScanOutput) -> Result<()> {
        let file = self.files;
        self.files += 1;
        for (kind, index) in [(LineKind::Code, self.code), (LineKind::Comment, self.comment)] {
            let sink = &mut self.sinks[index];
            sink.write_section(file, path, self.batch, kind, output.lines(kind))
                .map_err(|err| SplitError::write(sink.label.clone(), err))?;
        }
        Ok(())
    }

    /// Flush every sink and return the writers in creation order.
    pub fn finish(self) -> Result<Vec<W>> {
        self.sinks
            .into_iter()
            .map(|mut sink| -> Result<W> {
                sink.flush()
                    .map_err(|err| SplitError::write(sink.label.clone(), err))?;
                Ok(sink.writer)
            })
            .collect()
    }
}

fn open_sink(path: Option<&Path>, what: &str) -> Result<Sink<Box<dyn Write>>> {
    match path {
        None => Ok(Sink::new(
            Box::new(BufWriter::new(io::stdout())),
            Style::Display,
            "stdout",
        )),
        Some(path) => {
            let file = File::create(path).map_err(|err| {
                SplitError::write(format!("{what} file '{}'", path.display()), err)
            })?;
            Ok(Sink::new(
                Box::new(BufWriter::new(file)),
                Style::Plain,
                format!("{what} file '{}'", path.display()),
            ))
        }
    }
}
