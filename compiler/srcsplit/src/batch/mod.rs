//! Batch driver: one scan per input file.
//!
//! Paths are checked with [`validate_paths`] before the first scan, so a
//! typo in the last argument fails the run without producing partial
//! output. Files are scanned independently; with `parallel` they run on the
//! rayon pool and results are still returned in argument order.

use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use srcsplit_lexer_core::{scan, scan_with_trace, EncodingIssue, ScanOutput, SourceBuffer};

use crate::debug_trace::DebugTrace;
use crate::error::{Result, SplitError};

/// Everything learned from scanning one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub output: ScanOutput,
    pub encoding_issues: Vec<EncodingIssue>,
}

/// Check that every path names an existing regular file.
pub fn validate_paths(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(SplitError::NotAFile { path: path.clone() }),
            Err(err) => return Err(SplitError::from_read(path.clone(), err)),
        }
    }
    Ok(())
}

/// Read a file into a [`SourceBuffer`].
pub fn load(path: &Path) -> Result<SourceBuffer> {
    let bytes = std::fs::read(path).map_err(|err| SplitError::from_read(path.to_owned(), err))?;
    Ok(SourceBuffer::from_bytes(&bytes))
}

/// Scan a single file.
pub fn scan_file(path: &Path) -> Result<FileReport> {
    let buf = load_logged(path)?;
    let output = scan(&mut buf.cursor());
    Ok(FileReport::new(path, output, &buf))
}

/// Scan a single file, writing its trace and results to `trace`.
pub fn scan_file_traced<W: Write>(path: &Path, trace: &mut DebugTrace<W>) -> Result<FileReport> {
    let buf = load_logged(path)?;
    trace.begin_file(path);
    let output = scan_with_trace(&mut buf.cursor(), trace);
    trace.echo_output(&output);
    Ok(FileReport::new(path, output, &buf))
}

/// Scan every path. Reports come back in `paths` order.
///
/// Without `parallel`, each file's trace goes straight into `debug` as the
/// file is scanned. With `parallel`, each worker renders its file's trace
/// into memory and the traces are appended in argument order once all
/// scans are done, so peak memory grows with the total trace size (at
/// least one trace line per input character).
pub fn scan_files<W: Write>(
    paths: &[PathBuf],
    parallel: bool,
    debug: Option<&mut DebugTrace<W>>,
) -> Result<Vec<FileReport>> {
    let parallel = parallel && paths.len() > 1;
    match debug {
        None if parallel => paths.par_iter().map(|path| scan_file(path)).collect(),
        None => paths.iter().map(|path| scan_file(path)).collect(),
        Some(trace) if parallel => {
            let traced: Vec<(FileReport, Vec<u8>)> = paths
                .par_iter()
                .map(|path| -> Result<(FileReport, Vec<u8>)> {
                    let mut buffered = DebugTrace::new(Vec::new());
                    let report = scan_file_traced(path, &mut buffered)?;
                    let bytes = buffered
                        .finish()
                        .map_err(|err| SplitError::write("debug trace", err))?;
                    Ok((report, bytes))
                })
                .collect::<Result<_>>()?;
            let mut reports = Vec::with_capacity(traced.len());
            for (report, bytes) in traced {
                trace.append(&bytes);
                reports.push(report);
            }
            Ok(reports)
        }
        Some(trace) => paths
            .iter()
            .map(|path| scan_file_traced(path, &mut *trace))
            .collect(),
    }
}

fn load_logged(path: &Path) -> Result<SourceBuffer> {
    let buf = load(path)?;
    tracing::debug!(
        path = %path.display(),
        bytes = buf.len(),
        lines = buf.line_count(),
        "scanning"
    );
    Ok(buf)
}

impl FileReport {
    fn new(path: &Path, output: ScanOutput, buf: &SourceBuffer) -> Self {
        Self {
            path: path.to_owned(),
            output,
            encoding_issues: buf.encoding_issues().to_vec(),
        }
    }
}
