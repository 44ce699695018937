use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::{TAG_MARKER, TAG_WORD_SEP, TagError};

/// Separators accepted in user input and rewritten to [`TAG_WORD_SEP`]
const COMMON_SEPARATORS: [char; 4] = ['-', '_', '.', ' '];

/// Ordered, deduplicated collection of tags
///
/// Iteration order is the rendering order used in file names.
pub type TagSet = BTreeSet<Tag>;

/// A single canonical tag
///
/// Two tags are equal when their canonical names are equal, regardless of
/// how the raw text was cased or separated. Tags order lexicographically by
/// canonical name.
///
/// # Examples
///
/// ```
/// use file_tags::tags::Tag;
///
/// let tag = Tag::new("Flying_Whales").unwrap();
/// assert_eq!(tag.name(), "flying-whales");
/// assert_eq!(tag.to_string(), "#flying-whales");
/// assert_eq!(tag, Tag::new("flying.whales").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Build a tag from raw text, normalizing it into canonical form
    ///
    /// # Errors
    /// Returns `TagError::InvalidTagName` if nothing survives normalization.
    pub fn new(raw: &str) -> Result<Self, TagError> {
        let name = normalize_name(raw);
        if name.is_empty() {
            return Err(TagError::invalid_name(raw));
        }
        Ok(Self { name })
    }

    /// Canonical name without the marker
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TAG_MARKER}{}", self.name)
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Lowercase, unify separators, keep only the canonical alphabet.
///
/// Runs of separators collapse into one and separators never lead or trail.
fn normalize_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len());
    for ch in raw.trim().chars().flat_map(char::to_lowercase) {
        if COMMON_SEPARATORS.contains(&ch) {
            if !name.is_empty() && !name.ends_with(TAG_WORD_SEP) {
                name.push(TAG_WORD_SEP);
            }
        } else if ch.is_ascii_alphanumeric() {
            name.push(ch);
        }
    }
    while name.ends_with(TAG_WORD_SEP) {
        name.pop();
    }
    name
}
