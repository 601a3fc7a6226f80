//! Command-line configuration.
//!
//! Arguments are parsed by hand into a [`SplitConfig`]. Options and file
//! paths may be mixed freely; `--` ends option parsing.

use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

/// Where the debug trace goes when `--debug` is given without `--dbgfile`.
pub const DEFAULT_DEBUG_FILE: &str = "debug.txt";

/// Configuration for one `srcsplit` run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitConfig {
    /// Write a per-character scanner trace.
    pub debug: bool,
    /// Destination for code lines. `None` means stdout.
    pub code_file: Option<PathBuf>,
    /// Destination for comment lines. `None` means stdout.
    pub comment_file: Option<PathBuf>,
    /// Destination for the debug trace. Only valid with `debug`.
    pub debug_file: Option<PathBuf>,
    /// Scan files on the rayon thread pool.
    pub parallel: bool,
    /// Input files, in output order.
    pub paths: Vec<PathBuf>,
}

impl SplitConfig {
    /// The debug trace path, if debugging is enabled.
    pub fn debug_path(&self) -> Option<&Path> {
        if !self.debug {
            return None;
        }
        Some(
            self.debug_file
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_DEBUG_FILE)),
        )
    }

    /// Returns `true` when more than one file is processed, so output
    /// sections need per-file headers.
    pub fn is_batch(&self) -> bool {
        self.paths.len() > 1
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Split(SplitConfig),
    Help,
    Version,
}

/// Parse command-line arguments (program name excluded).
///
/// `--help` and `--version` win as soon as they are seen, like the usual
/// Unix tools; any later arguments are ignored.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = SplitConfig::default();
    let mut args = args.into_iter();
    let mut options_done = false;

    while let Some(arg) = args.next() {
        if options_done || !arg.starts_with('-') {
            config.paths.push(PathBuf::from(arg));
            continue;
        }

        let (name, inline_value) = match arg.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value.to_owned())),
            _ => (arg.as_str(), None),
        };

        match name {
            "--" => options_done = true,
            "-d" | "--debug" => config.debug = true,
            "-j" | "--jobs" => config.parallel = true,
            "-S" | "--srcfile" => {
                config.code_file = Some(option_value(name, inline_value, &mut args)?);
            }
            "-C" | "--comfile" => {
                config.comment_file = Some(option_value(name, inline_value, &mut args)?);
            }
            "-D" | "--dbgfile" => {
                config.debug_file = Some(option_value(name, inline_value, &mut args)?);
            }
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            _ => {
                return Err(SplitError::usage(format!("Unknown option '{arg}'")));
            }
        }
    }

    validate(&config)?;
    Ok(Command::Split(config))
}

fn option_value(
    name: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<PathBuf> {
    match inline.or_else(|| rest.next()) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(SplitError::usage(format!(
            "Argument for option '{name}' not provided!"
        ))),
    }
}

fn validate(config: &SplitConfig) -> Result<()> {
    if !config.debug && config.debug_file.is_some() {
        return Err(SplitError::usage(
            "Debug file mentioned but mode not enabled!",
        ));
    }
    if config.paths.is_empty() {
        return Err(SplitError::usage("Provide at least one file path."));
    }
    if let (Some(code), Some(comment)) = (&config.code_file, &config.comment_file) {
        if code == comment {
            return Err(SplitError::usage(
                "Code and comment lines cannot be written to the same file.",
            ));
        }
    }
    if let Some(debug) = config.debug_path() {
        let outputs = [&config.code_file, &config.comment_file];
        if outputs.into_iter().flatten().any(|out| out == debug) {
            return Err(SplitError::usage(
                "Debug trace cannot be written to an output file.",
            ));
        }
    }
    Ok(())
}
