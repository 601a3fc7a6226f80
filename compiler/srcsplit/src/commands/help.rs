//! `--help` and `--version`.

use crate::config::DEFAULT_DEBUG_FILE;

/// Full help text.
pub fn usage_text() -> String {
    format!(
        "\
Source Code Splitter
Version: {version}
Purpose: Separates comments from code. Standard C-style comments are
recognized: a line comment starts with '//' and runs to the end of the line,
a block comment starts with '/*' and ends with '*/'. Character and string
literals are skipped, so comment markers inside quotes are treated as code.

Usage:   srcsplit [options] <file1> [<file2> ...]

Options:
    -d, --debug                 Enables the debug trace.
    -S, --srcfile <file-path>   File path to write code lines.
    -C, --comfile <file-path>   File path to write comment lines.
    -D, --dbgfile <file-path>   File path to write the debug trace (default is {debug}).
    -j, --jobs                  Scan files in parallel.
    -h, --help                  Shows this help message and exits.
    -V, --version               Shows the version and exits.

Exit codes:
    0   success
    1   error (bad arguments, missing or unreadable file, write failure)

Set RUST_LOG (e.g. RUST_LOG=srcsplit=debug) for diagnostic logging.
",
        version = env!("CARGO_PKG_VERSION"),
        debug = DEFAULT_DEBUG_FILE,
    )
}

pub fn print_usage() {
    print!("{}", usage_text());
}

pub fn print_version() {
    println!("srcsplit {}", env!("CARGO_PKG_VERSION"));
}
