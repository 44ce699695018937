//! Files whose names carry tags
//!
//! [`TaggedFile`] holds a path together with the tags parsed out of its
//! name. Tags are mutated in memory and [`TaggedFile::write`] renames the
//! file so its name matches the canonical rendering:
//!
//! ```text
//! <tagless stem> #tag1 #tag2[.<extension>]
//! ```

mod error;
mod name;

pub use error::RenameError;
pub use name::{ParsedName, collapse_repeated_whitespace, split_extension};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::tags::{Tag, TagSet};

/// A file path plus the tag set encoded in its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedFile {
    path: PathBuf,
    name: String,
    tags: TagSet,
    tagless_name: String,
    ignored_tokens: Vec<String>,
}

impl TaggedFile {
    /// Parse the tags out of the final segment of `path`.
    ///
    /// Tag-like tokens that do not form a valid tag are ignored and stay
    /// part of the name.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ParsedName {
            tags,
            tagless_name,
            ignored,
        } = ParsedName::parse(&name);

        Self {
            path,
            name,
            tags,
            tagless_name,
            ignored_tokens: ignored,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file name on disk
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Name with the recognized tag tokens removed, as parsed at construction
    #[must_use]
    pub fn tagless_name(&self) -> &str {
        &self.tagless_name
    }

    /// Tag-like tokens that were left in the name because they are malformed
    #[must_use]
    pub fn ignored_tokens(&self) -> &[String] {
        &self.ignored_tokens
    }

    /// Add a tag; returns `false` if it was already present.
    pub fn add_tag(&mut self, tag: &Tag) -> bool {
        self.tags.insert(tag.clone())
    }

    /// Remove a tag; returns `false` if it was not present.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        self.tags.remove(tag)
    }

    /// File name matching the current tag set
    #[must_use]
    pub fn new_name(&self) -> String {
        let (stem, extension) = split_extension(&self.tagless_name);

        let mut name = stem.to_string();
        if !self.tags.is_empty() {
            let rendered: Vec<String> = self.tags.iter().map(ToString::to_string).collect();
            name.push(' ');
            name.push_str(&rendered.join(" "));
        }
        let name = collapse_repeated_whitespace(&name);
        let name = name.trim();

        match extension {
            Some(ext) => format!("{name}.{ext}").trim().to_string(),
            None => name.to_string(),
        }
    }

    /// Path the file will have after [`write`](Self::write)
    #[must_use]
    pub fn new_path(&self) -> PathBuf {
        let new_name = self.new_name();
        match self.path.parent() {
            Some(dir) => dir.join(new_name),
            None => PathBuf::from(new_name),
        }
    }

    /// Whether the rendered name differs from the current one
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.name != self.new_name()
    }

    /// Rename the file on disk so its name matches the tag set.
    ///
    /// Does nothing when the path is already correct. An existing file at the
    /// destination is never overwritten. On success the in-memory path is
    /// updated, so a repeated call is a no-op.
    ///
    /// Returns `true` when a rename happened.
    ///
    /// # Errors
    /// Returns `RenameError` if the rename is refused or the underlying
    /// filesystem call fails.
    pub fn write(&mut self) -> Result<bool, RenameError> {
        let new_name = self.new_name();
        let new_path = self.new_path();
        if new_path == self.path {
            return Ok(false);
        }

        let fail = |source: io::Error| RenameError::new(self.path.clone(), new_path.clone(), source);
        if new_name.is_empty() {
            return Err(fail(io::Error::new(
                io::ErrorKind::InvalidInput,
                "new file name would be empty",
            )));
        }
        if destination_taken(&self.path, &new_path) {
            return Err(fail(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination already exists",
            )));
        }
        fs::rename(&self.path, &new_path).map_err(fail)?;

        tracing::debug!(from = %self.path.display(), to = %new_path.display(), "renamed file");
        self.path = new_path;
        self.name = new_name;
        Ok(true)
    }
}

/// True when something other than `from` itself exists at `to`.
///
/// On a case-insensitive filesystem a case-only rename sees its own source
/// at the destination; that entry is not in the way.
fn destination_taken(from: &Path, to: &Path) -> bool {
    let Ok(to_meta) = fs::symlink_metadata(to) else {
        return false;
    };
    match fs::symlink_metadata(from) {
        Ok(from_meta) => !same_entry(from, &from_meta, to, &to_meta),
        Err(_) => true,
    }
}

#[cfg(unix)]
fn same_entry(_from: &Path, from: &fs::Metadata, _to: &Path, to: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;

    from.dev() == to.dev() && from.ino() == to.ino()
}

#[cfg(not(unix))]
fn same_entry(from: &Path, _: &fs::Metadata, to: &Path, _: &fs::Metadata) -> bool {
    match (fs::canonicalize(from), fs::canonicalize(to)) {
        (Ok(from), Ok(to)) => from == to,
        _ => false,
    }
}
