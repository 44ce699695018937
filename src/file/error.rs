use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single file could not be renamed
#[derive(Debug, Error)]
#[error("Failed to rename '{}' to '{}': {source}", .from.display(), .to.display())]
pub struct RenameError {
    pub from: PathBuf,
    pub to: PathBuf,
    #[source]
    pub source: io::Error,
}

impl RenameError {
    #[must_use]
    pub const fn new(from: PathBuf, to: PathBuf, source: io::Error) -> Self {
        Self { from, to, source }
    }

    /// Kind of the underlying I/O failure
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
