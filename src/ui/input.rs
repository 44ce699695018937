//! Confirmation before renaming

use std::error::Error;
use std::io;

use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;

/// A confirmation prompt that produced no answer
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Ctrl-C or end of input while waiting for an answer
    #[error("Prompt interrupted")]
    Interrupted,
    /// Terminal could not be read or written
    #[error("Prompt failed: {0}")]
    Io(#[from] io::Error),
}

impl From<dialoguer::Error> for InputError {
    fn from(err: dialoguer::Error) -> Self {
        let kind = Error::source(&err)
            .and_then(|source| source.downcast_ref::<io::Error>())
            .map(io::Error::kind);
        match kind {
            Some(io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof) => Self::Interrupted,
            _ => Self::Io(io::Error::other(err)),
        }
    }
}

/// Asks the user a yes/no question
pub trait UserInput {
    /// `Ok(false)` is an explicit "no"; any failure to answer is an error.
    ///
    /// # Errors
    /// Returns `InputError` if no answer could be read.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool, InputError>;
}

/// Terminal prompt using dialoguer
///
/// ```no_run
/// use file_tags::ui::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// let rename = input.prompt_confirm("Rename the files?", false).unwrap_or(false);
/// ```
#[derive(Default)]
pub struct DialoguerInput {
    theme: ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool, InputError> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .show_default(true)
            .interact_opt()?;
        answer.ok_or(InputError::Interrupted)
    }
}
