//! Rename preview
//!
//! Large batches are previewed through a uniform random sample so the
//! listing stays short while still giving a feel for the whole batch. The
//! sampled entries are shown sorted by path.

use std::path::PathBuf;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::file::TaggedFile;

/// Old and new name of a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub path: PathBuf,
    pub old_name: String,
    pub new_name: String,
}

impl PreviewEntry {
    #[must_use]
    pub fn from_file(file: &TaggedFile) -> Self {
        Self {
            path: file.path().to_path_buf(),
            old_name: file.name().to_string(),
            new_name: file.new_name(),
        }
    }

    /// Display lines, name lengths right-aligned to a shared width:
    ///
    /// ```text
    ///  - '/photos/beach.jpg'
    ///    <- [ 9] 'beach.jpg'
    ///    -> [15] 'beach #2019.jpg'
    /// ```
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        let old_len = self.old_name.chars().count();
        let new_len = self.new_name.chars().count();
        let width = old_len.max(new_len).to_string().len();
        [
            format!(" - '{}'", self.path.display()),
            format!("   <- [{old_len:>width$}] '{}'", self.old_name),
            format!("   -> [{new_len:>width$}] '{}'", self.new_name),
        ]
    }
}

/// Sampled subset of a batch's changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub entries: Vec<PreviewEntry>,
    /// Number of files in the whole batch
    pub total: usize,
}

impl Preview {
    /// Whether some files of the batch are not listed
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.entries.len() < self.total
    }
}

/// Picks which files of a batch are shown in the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSampler {
    limit: usize,
}

impl PreviewSampler {
    pub const DEFAULT_LIMIT: usize = 10;

    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Pick up to `limit` files uniformly at random, sorted by path.
    pub fn sample<R: Rng + ?Sized>(&self, files: &[TaggedFile], rng: &mut R) -> Preview {
        let mut chosen: Vec<&TaggedFile> = files.choose_multiple(rng, self.limit).collect();
        chosen.sort_by(|a, b| a.path().cmp(b.path()));
        Preview {
            entries: chosen.into_iter().map(PreviewEntry::from_file).collect(),
            total: files.len(),
        }
    }
}

impl Default for PreviewSampler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}
