//! Command handlers for the `srcsplit` CLI.
//!
//! Each submodule implements one command. They return `Result` and leave
//! exit codes to `main`.

mod help;
mod split;

pub use help::{print_usage, print_version, usage_text};
pub use split::{run_split, SplitSummary};
