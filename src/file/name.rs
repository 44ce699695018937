//! Parsing tag tokens out of file names and the whitespace/extension rules
//! used when a name is rebuilt.

use std::sync::LazyLock;

use regex::Regex;

use crate::tags::{TAG_MARKER, TAG_WORD_SEP, Tag, TagSet};

/// Marker followed by the token alphabet. Matching is case-insensitive so
/// hand-edited names like `#Holiday` are still picked up; boundaries are
/// checked separately in [`is_token_boundary`].
static TAG_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "{}[A-Za-z0-9{}]+",
        regex::escape(&TAG_MARKER.to_string()),
        regex::escape(&TAG_WORD_SEP.to_string())
    );
    Regex::new(&pattern).expect("tag token pattern is valid")
});

/// Result of splitting a raw file name into tags and the remaining text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Valid tags found in the name
    pub tags: TagSet,
    /// Name with the valid tag tokens removed and repeated whitespace collapsed
    pub tagless_name: String,
    /// Tag-like tokens that did not normalize to a valid tag; left in place
    pub ignored: Vec<String>,
}

impl ParsedName {
    /// Partition the tag-like tokens of `name` into tags and ignored tokens.
    ///
    /// A token only counts when it starts the name or follows whitespace, and
    /// ends the name or is followed by whitespace or a `.`. This keeps text
    /// like `C#notes` or `ran#dom` intact.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let mut tags = TagSet::new();
        let mut ignored = Vec::new();
        let mut remaining = String::with_capacity(name.len());
        let mut cursor = 0;

        for token in TAG_TOKEN.find_iter(name) {
            if !is_token_boundary(name, token.start(), token.end()) {
                continue;
            }
            match Tag::new(token.as_str()) {
                Ok(tag) => {
                    remaining.push_str(&name[cursor..token.start()]);
                    cursor = token.end();
                    tags.insert(tag);
                }
                Err(_) => {
                    tracing::debug!(token = token.as_str(), name, "ignoring malformed tag token");
                    ignored.push(token.as_str().to_string());
                }
            }
        }
        remaining.push_str(&name[cursor..]);

        Self {
            tags,
            tagless_name: collapse_repeated_whitespace(&remaining),
            ignored,
        }
    }
}

fn is_token_boundary(name: &str, start: usize, end: usize) -> bool {
    let before_ok = name[..start]
        .chars()
        .next_back()
        .is_none_or(char::is_whitespace);
    let after_ok = name[end..]
        .chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || c == '.');
    before_ok && after_ok
}

/// Collapse consecutive repeats of the same whitespace character.
///
/// Distinct whitespace characters are kept, so `" \t"` stays as is while
/// `"   "` becomes `" "`. Leading and trailing whitespace is not trimmed.
#[must_use]
pub fn collapse_repeated_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous = None;
    for ch in text.chars() {
        if ch.is_whitespace() && previous == Some(ch) {
            continue;
        }
        out.push(ch);
        previous = Some(ch);
    }
    out
}

/// Split a file name into its stem and extension.
///
/// The extension is the text after the last `.`, trailing whitespace
/// removed. A trailing dot or an extension containing whitespace does not
/// count, in which case the whole name is the stem.
#[must_use]
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    let Some(dot) = name.rfind('.') else {
        return (name, None);
    };
    let extension = name[dot + 1..].trim_end();
    if extension.is_empty() || extension.chars().any(char::is_whitespace) {
        return (name, None);
    }
    (&name[..dot], Some(extension))
}
