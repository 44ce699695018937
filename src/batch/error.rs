use thiserror::Error;

use crate::file::RenameError;

/// A batch rename stopped before every file was handled
///
/// Renames that already happened are kept; re-running the same command
/// picks up where the batch stopped.
#[derive(Debug, Error)]
pub enum BatchError {
    /// A rename failed; `renamed` files were done before it
    #[error("While renaming file {}/{}: {source}", .renamed + 1, .total)]
    Rename {
        renamed: usize,
        total: usize,
        #[source]
        source: RenameError,
    },
    /// Cancellation was requested between two renames
    #[error("Interrupted after renaming {renamed}/{total} file(s)")]
    Interrupted { renamed: usize, total: usize },
}

impl BatchError {
    /// Number of files renamed before the batch stopped
    #[must_use]
    pub const fn renamed(&self) -> usize {
        match self {
            Self::Rename { renamed, .. } | Self::Interrupted { renamed, .. } => *renamed,
        }
    }

    /// Number of files the batch set out to rename
    #[must_use]
    pub const fn total(&self) -> usize {
        match self {
            Self::Rename { total, .. } | Self::Interrupted { total, .. } => *total,
        }
    }
}
