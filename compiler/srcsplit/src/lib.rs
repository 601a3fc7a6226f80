//! `srcsplit` - separate comments from code in C-style source files.
//!
//! The scanning itself lives in `srcsplit_lexer_core`; this crate is the
//! batch and CLI layer around it.
//!
//! # Architecture
//!
//! ```text
//! args ──► config::parse_args ──► SplitConfig
//!                                    │
//!                                    ▼
//!          batch::validate_paths, then batch::scan_files (one scan per file)
//!                                    │
//!                                    ▼
//!          output::Report (stdout / --srcfile / --comfile)
//!          debug_trace::DebugTrace (--debug / --dbgfile, written while scanning)
//! ```

pub mod batch;
pub mod commands;
pub mod config;
pub mod debug_trace;
pub mod error;
pub mod output;
mod tracing_setup;

pub use config::{parse_args, Command, SplitConfig, DEFAULT_DEBUG_FILE};
pub use error::{Result, SplitError};
pub use tracing_setup::init_tracing;

/// Process exit codes.
pub mod exit_code {
    /// Any usage, I/O or write failure.
    pub const ERROR: i32 = 1;
}
