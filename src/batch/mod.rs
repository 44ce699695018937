//! Batch orchestration
//!
//! A batch applies one [`TagAction`] with a set of tags to every file, keeps
//! the files whose name actually changes and renames them one at a time:
//!
//! - [`apply`]: mutate the tag set of every file
//! - [`select_changed`]: drop files whose name stays the same
//! - [`rename_all`]: fail-fast renaming without rollback
//!
//! Cancellation is cooperative: [`CancelFlag`] is only checked between
//! renames, never during one.

mod error;


pub use error::BatchError;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::file::TaggedFile;
use crate::output::Reporter;
use crate::tags::{TagAction, TagSet};

/// Shared cancellation request, set from a signal handler
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation at the next batch boundary
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Apply `action` with every tag in `tags` to every file.
pub fn apply(files: &mut [TaggedFile], tags: &TagSet, action: TagAction) {
    for file in files.iter_mut() {
        for tag in tags {
            match action {
                TagAction::Add => file.add_tag(tag),
                TagAction::Remove => file.remove_tag(tag),
            };
        }
    }
}

/// Keep only the files whose rendered name differs from the current one.
#[must_use]
pub fn select_changed(files: Vec<TaggedFile>) -> Vec<TaggedFile> {
    files.into_iter().filter(TaggedFile::is_changed).collect()
}

/// Rename every file in order, stopping at the first failure.
///
/// Returns the number of renamed files. Already renamed files are not rolled
/// back when a later one fails.
///
/// # Errors
/// * `BatchError::Rename` with the count of files renamed before the failure
/// * `BatchError::Interrupted` if `cancel` is set between two renames
pub fn rename_all(
    files: &mut [TaggedFile],
    reporter: &mut dyn Reporter,
    cancel: &CancelFlag,
) -> Result<usize, BatchError> {
    let total = files.len();
    let mut renamed = 0;

    for file in files.iter_mut() {
        if cancel.is_cancelled() {
            return Err(BatchError::Interrupted { renamed, total });
        }
        let from = file.path().to_path_buf();
        match file.write() {
            Ok(true) => {
                renamed += 1;
                reporter.renamed(&from, file.path());
            }
            Ok(false) => {}
            Err(source) => {
                return Err(BatchError::Rename {
                    renamed,
                    total,
                    source,
                });
            }
        }
    }

    Ok(renamed)
}
