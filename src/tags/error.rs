use thiserror::Error;

/// Errors produced while constructing tags or tag actions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Tag text normalized down to nothing
    #[error("Invalid tag name '{raw}': post-normalization name is empty")]
    InvalidTagName { raw: String },
    /// Action keyword outside the known vocabulary
    #[error("Unknown tag action '{raw}' (expected add, remove, rm, delete or del)")]
    UnknownAction { raw: String },
}

impl TagError {
    #[must_use]
    pub fn invalid_name(raw: &str) -> Self {
        Self::InvalidTagName {
            raw: raw.to_string(),
        }
    }

    #[must_use]
    pub fn unknown_action(raw: &str) -> Self {
        Self::UnknownAction {
            raw: raw.to_string(),
        }
    }
}
