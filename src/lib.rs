//! file-tags - tags stored directly in file names
//!
//! Tags live inside the file name itself, each introduced by a `#`:
//!
//! ```text
//! Picture 002.jpg
//! Picture 002 #flowers #flying-whales #wallpaper.jpg
//! ```
//!
//! Nothing is stored outside the file name, so tags survive copies and can be
//! edited by hand or searched with standard tools. The trade-off is that the
//! amount of tags is bounded by the filesystem's maximum name length.
//!
//! This library provides the tag model ([`tags`]), parsing and renaming of
//! single files ([`file`]) and the batch orchestration used by the CLI
//! ([`batch`], [`commands`]).

use thiserror::Error;

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod file;
pub mod output;
pub mod paths;
pub mod tags;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use batch::{BatchError, CancelFlag};
pub use file::{RenameError, TaggedFile};
pub use paths::PathError;
pub use tags::{Tag, TagAction, TagError, TagSet};

/// Version reported by `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit code for success or nothing to do
pub const EXIT_OK: u8 = 0;
/// Exit code for validation and rename failures
pub const EXIT_FAILURE: u8 = 1;
/// Exit code when the user interrupts or answers no
pub const EXIT_INTERRUPTED: u8 = 130;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FileTagsError {
    /// Invalid tag text or action keyword
    #[error(transparent)]
    Tag(#[from] TagError),
    /// Input paths that cannot be used
    #[error(transparent)]
    Path(#[from] PathError),
    /// Batch rename stopped early
    #[error(transparent)]
    Batch(#[from] BatchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Interrupted before any rename happened
    #[error("Interrupted by the user")]
    Interrupted,
    /// Confirmation prompt answered with no
    #[error("Renaming declined")]
    Declined,
}

impl FileTagsError {
    /// Process exit code for this failure
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Interrupted | Self::Declined | Self::Batch(BatchError::Interrupted { .. }) => {
                EXIT_INTERRUPTED
            }
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(FileTagsError::from(TagError::unknown_action("x")).exit_code(), 1);
        assert_eq!(FileTagsError::Interrupted.exit_code(), 130);
        assert_eq!(FileTagsError::Declined.exit_code(), 130);
        let interrupted = BatchError::Interrupted { renamed: 1, total: 3 };
        assert_eq!(FileTagsError::from(interrupted).exit_code(), 130);
        let missing = PathError::NotFound {
            missing: vec!["/nope".into()],
            total: 2,
        };
        assert_eq!(FileTagsError::from(missing).exit_code(), 1);
        let config = ::config::ConfigError::Message("bad".into());
        assert_eq!(FileTagsError::from(config).exit_code(), 1);
    }
}
