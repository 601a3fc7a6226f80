//! The default command: split every input file into code and comments.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use srcsplit_lexer_core::EncodingIssue;

use crate::batch::{scan_files, validate_paths, FileReport};
use crate::config::SplitConfig;
use crate::debug_trace::DebugTrace;
use crate::error::{Result, SplitError};
use crate::output::Report;

/// Totals over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitSummary {
    pub files: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    /// Files that ended inside a literal or block comment.
    pub unterminated: usize,
}

/// Scan every configured file and write the results.
///
/// Warnings (unterminated input, encoding issues) go to stderr and do not
/// fail the run. The debug trace, when enabled, is complete on disk before
/// any output file is opened.
pub fn run_split(config: &SplitConfig) -> Result<SplitSummary> {
    validate_paths(&config.paths)?;
    let reports = match config.debug_path() {
        Some(path) => scan_with_debug_file(config, path)?,
        None => scan_files::<io::Sink>(&config.paths, config.parallel, None)?,
    };

    let mut report = Report::open(config)?;
    let mut summary = SplitSummary::default();
    for file in &reports {
        warn_about(file);
        report.write_file(&file.path, &file.output)?;
        summary.files += 1;
        summary.code_lines += file.output.code_lines.len();
        summary.comment_lines += file.output.comment_lines.len();
        if !file.output.is_complete() {
            summary.unterminated += 1;
        }
    }
    report.finish()?;

    tracing::debug!(
        files = summary.files,
        code_lines = summary.code_lines,
        comment_lines = summary.comment_lines,
        unterminated = summary.unterminated,
        "split finished"
    );
    Ok(summary)
}

fn warn_about(file: &FileReport) {
    let path = file.path.display();
    for issue in &file.encoding_issues {
        eprintln!("warning: '{path}': {}", describe(issue));
    }
    if let Some(state) = file.output.ended_inside() {
        tracing::warn!(%path, %state, "input ended inside an open construct");
        eprintln!("warning: '{path}' ended inside {state}");
    }
}

fn describe(issue: &EncodingIssue) -> String {
    format!("{} at byte {}", issue.kind.description(), issue.pos)
}

/// Scan with the trace streamed into the debug file at `path`.
fn scan_with_debug_file(config: &SplitConfig, path: &Path) -> Result<Vec<FileReport>> {
    let target = || format!("debug file '{}'", path.display());
    let file = File::create(path).map_err(|err| SplitError::write(target(), err))?;
    let mut trace = DebugTrace::new(BufWriter::new(file));
    let reports = scan_files(&config.paths, config.parallel, Some(&mut trace))?;
    trace.finish().map_err(|err| SplitError::write(target(), err))?;
    Ok(reports)
}
