//! Errors raised before scanning starts.

use std::io;
use std::path::PathBuf;

/// Usage or input-loading failure.
///
/// Scan failures are not `CliError`s: they are rendered from
/// [`kwscan::ScanError`] against the input text.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
    #[error("unknown output format '{0}' (expected lines, debug or source)")]
    InvalidFormat(String),
    #[error("missing input: pass text, --file=<path> or - for stdin")]
    MissingInput,
    #[error("more than one input given")]
    ConflictingInput,
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("error reading '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("error reading stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error(transparent)]
    Empty(#[from] kwscan::EmptyInput),
}

impl CliError {
    /// Classify an I/O failure while reading `path`.
    pub fn from_read(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: err },
        }
    }
}
