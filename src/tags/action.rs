use std::fmt;
use std::str::FromStr;

use super::TagError;

/// Mutation applied to every file of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagAction {
    Add,
    Remove,
}

impl TagAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }

    #[must_use]
    pub const fn preposition(self) -> &'static str {
        match self {
            Self::Add => "to",
            Self::Remove => "from",
        }
    }
}

impl FromStr for TagAction {
    type Err = TagError;

    /// Parse an action keyword; `rm`, `delete` and `del` are aliases of `remove`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" | "rm" | "delete" | "del" => Ok(Self::Remove),
            _ => Err(TagError::unknown_action(s)),
        }
    }
}

impl fmt::Display for TagAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
