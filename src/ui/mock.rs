//! Mock user input for testing

use std::cell::RefCell;

use super::input::{InputError, UserInput};

/// Mock input that returns a predetermined answer
///
/// Records every prompt it was shown.
#[derive(Debug, Default)]
pub struct MockInput {
    /// Answer to return; `None` simulates an interrupted prompt
    pub answer: Option<bool>,
    prompts: RefCell<Vec<String>>,
}

impl MockInput {
    /// Mock that always answers `answer`
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Some(answer),
            prompts: RefCell::default(),
        }
    }

    /// Mock whose prompt is interrupted
    #[must_use]
    pub fn interrupted() -> Self {
        Self::default()
    }

    /// Prompts shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl UserInput for MockInput {
    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<bool, InputError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer.ok_or(InputError::Interrupted)
    }
}
