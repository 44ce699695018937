//! Tags and tag actions
//!
//! A tag is a short canonical label stored inside a file name as a token
//! introduced by [`TAG_MARKER`], for example `#flying-whales`.
//!
//! - [`Tag`]: normalized tag value with set semantics by canonical name
//! - [`TagAction`]: the mutation applied to a batch (add or remove)
//! - [`TagError`]: construction failures for both

mod action;
mod error;
mod tag;

pub use action::TagAction;
pub use error::TagError;
pub use tag::{Tag, TagSet};

/// Character that introduces a tag token inside a file name
pub const TAG_MARKER: char = '#';

/// Canonical word separator inside tag names
pub const TAG_WORD_SEP: char = '-';
