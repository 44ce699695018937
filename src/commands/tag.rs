//! Add or remove tags on a batch of files
//!
//! The whole invocation: report what is about to happen, compute the new
//! names, preview them, optionally confirm and rename.

use std::path::PathBuf;

use crate::FileTagsError;
use crate::batch::{self, CancelFlag};
use crate::cli::{Cli, Settings};
use crate::file::TaggedFile;
use crate::output::{PreviewSampler, Reporter};
use crate::paths::validate_paths;
use crate::tags::{TagAction, TagSet};
use crate::ui::UserInput;

type Result<T> = std::result::Result<T, FileTagsError>;

const CONFIRM_PROMPT: &str = "Rename the files?";

/// Validated input of one invocation
#[derive(Debug, Clone)]
pub struct TagRequest {
    pub action: TagAction,
    pub tags: TagSet,
    /// Normalized, existing, deduplicated paths
    pub paths: Vec<PathBuf>,
    pub no_action: bool,
    pub interactive: bool,
    pub sampler: PreviewSampler,
}

/// How a successful invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every file already had the requested tags
    NothingToDo,
    /// Stopped after the preview because of `--no-action`
    Previewed,
    /// This many files were renamed
    Renamed(usize),
}

impl TagRequest {
    /// Validate the command line: action, then tags, then paths.
    ///
    /// # Errors
    /// Returns the first validation failure; nothing on disk is touched.
    pub fn from_cli(cli: &Cli, settings: &Settings) -> Result<Self> {
        let action = cli.parse_action()?;
        let tags = cli.parse_tags()?;
        let paths = validate_paths(&cli.file_paths)?;

        Ok(Self {
            action,
            tags,
            paths,
            no_action: settings.no_action,
            interactive: settings.interactive,
            sampler: settings.sampler,
        })
    }
}

/// Execute the tag command
///
/// # Errors
/// * `FileTagsError::Declined` if the confirmation is answered with no
/// * `FileTagsError::Interrupted` if the prompt fails or `cancel` is set
///   before renaming starts
/// * `FileTagsError::Batch` if renaming stops early
pub fn execute(
    request: &TagRequest,
    reporter: &mut dyn Reporter,
    input: &dyn UserInput,
    cancel: &CancelFlag,
) -> Result<Outcome> {
    let names: Vec<&str> = request.tags.iter().map(|t| t.name()).collect();
    reporter.info(&format!("Tags: {}", names.join(", ")));
    reporter.info(&format!("Action: {}", request.action));
    reporter.info(&format!("File count: {}", request.paths.len()));
    tracing::debug!(
        "{} {} tag(s) {} {} file(s)",
        request.action,
        request.tags.len(),
        request.action.preposition(),
        request.paths.len()
    );

    let mut files: Vec<TaggedFile> = request.paths.iter().map(TaggedFile::new).collect();
    batch::apply(&mut files, &request.tags, request.action);
    let mut changed = batch::select_changed(files);
    changed.sort_by(|a, b| a.path().cmp(b.path()));

    if changed.is_empty() {
        reporter.info("Exiting ... (no files to rename)");
        return Ok(Outcome::NothingToDo);
    }

    let preview = request.sampler.sample(&changed, &mut rand::thread_rng());
    reporter.preview(&preview);

    if request.no_action {
        reporter.info("Exiting ... (--no-action)");
        return Ok(Outcome::Previewed);
    }
    if cancel.is_cancelled() {
        return Err(FileTagsError::Interrupted);
    }

    if request.interactive {
        match input.prompt_confirm(CONFIRM_PROMPT, false) {
            Ok(true) => {}
            Ok(false) => {
                reporter.info("Exiting ... (answered no)");
                return Err(FileTagsError::Declined);
            }
            Err(e) => {
                tracing::debug!("confirmation prompt failed: {e}");
                return Err(FileTagsError::Interrupted);
            }
        }
        if cancel.is_cancelled() {
            return Err(FileTagsError::Interrupted);
        }
    }

    reporter.info("Renaming the files ...");
    let renamed = batch::rename_all(&mut changed, reporter, cancel)?;
    reporter.info("Files successfully renamed.");
    Ok(Outcome::Renamed(renamed))
}
