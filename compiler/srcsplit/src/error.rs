//! Errors surfaced by the batch driver.
//!
//! The scanner itself cannot fail; everything here is I/O or usage.

use std::io;
use std::path::PathBuf;

/// Driver error.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// A named input does not exist. Checked before any scanning starts.
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is not a regular file", path.display())]
    NotAFile { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Bad command line. The message is shown verbatim.
    #[error("{0}")]
    Usage(String),
}

impl SplitError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        SplitError::Usage(message.into())
    }

    /// Classify a read failure the way users expect to see it.
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => SplitError::NotFound { path },
            io::ErrorKind::PermissionDenied => SplitError::PermissionDenied { path },
            _ => SplitError::Read { path, source },
        }
    }

    pub(crate) fn write(target: impl Into<String>, source: io::Error) -> Self {
        SplitError::Write {
            target: target.into(),
            source,
        }
    }
}

pub type Result<T, E = SplitError> = std::result::Result<T, E>;
