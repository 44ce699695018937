//! Command-line interface definitions and parsing
//!
//! ```text
//! file-tags add flowers,wallpaper 'Picture 002.jpg' 'Picture 003.jpg'
//! file-tags rm wallpaper *.jpg --interactive
//! file-tags add "flying whales" notes.txt --no-action
//! ```
//!
//! The action keyword is taken as plain text and validated by
//! [`TagAction`]'s parser so that a bad keyword is reported like every other
//! validation failure rather than as a usage error.

use std::path::PathBuf;

use clap::Parser;

use crate::config::FileTagsConfig;
use crate::output::PreviewSampler;
use crate::tags::{Tag, TagAction, TagError, TagSet};

const ABOUT: &str = "Simple file tagging: tags are stored in file names.";

const LONG_ABOUT: &str = "\
Simple file tagging: tags are stored in file names.

Example file name without tags:
  'Picture 002.jpg'
And with:
  'Picture 002 #flowers #flying-whales #wallpaper.jpg'

Tags are lowercased and their words joined with '-'. They are kept sorted
at the end of the name, before the extension.";

/// Main CLI structure
#[derive(Parser, Debug, Clone)]
#[command(name = "file-tags", version, about = ABOUT, long_about = LONG_ABOUT)]
pub struct Cli {
    /// What tag action to perform on the files (add, remove, rm)
    #[arg(value_name = "ACTION")]
    pub action: String,

    /// What tag(s) to use; separate multiple tags with commas, e.g. tag1,tag2,tag3
    #[arg(value_name = "TAGS")]
    pub tags: String,

    /// Files to handle
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub file_paths: Vec<PathBuf>,

    /// Don't rename files, only show what would change
    #[arg(short = 'n', long = "no-action")]
    pub no_action: bool,

    /// Ask before renaming files
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Suppress informational output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Show debug diagnostics
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Maximum number of files listed in the preview
    #[arg(long = "preview-limit", value_name = "N")]
    pub preview_limit: Option<usize>,

    /// Use this configuration file instead of the default one
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Settings after merging CLI flags over the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub quiet: bool,
    pub interactive: bool,
    pub no_action: bool,
    pub sampler: PreviewSampler,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse the action keyword.
    ///
    /// # Errors
    /// Returns `TagError::UnknownAction` for keywords outside the vocabulary.
    pub fn parse_action(&self) -> Result<TagAction, TagError> {
        self.action.parse()
    }

    /// Parse the comma separated tag list.
    ///
    /// # Errors
    /// Returns `TagError::InvalidTagName` for the first element that
    /// normalizes to nothing.
    pub fn parse_tags(&self) -> Result<TagSet, TagError> {
        parse_tag_list(&self.tags)
    }

    /// Merge flags with `config`; flags win when given.
    #[must_use]
    pub fn settings(&self, config: &FileTagsConfig) -> Settings {
        Settings {
            quiet: self.quiet || config.quiet,
            interactive: self.interactive || config.interactive,
            no_action: self.no_action,
            sampler: PreviewSampler::new(self.preview_limit.unwrap_or(config.preview_limit)),
        }
    }
}

/// Build a tag set from `tag1,tag2,...`.
///
/// # Errors
/// Returns `TagError::InvalidTagName` if any element is not a valid tag.
pub fn parse_tag_list(raw: &str) -> Result<TagSet, TagError> {
    raw.split(',').map(Tag::new).collect()
}
