//! Command implementations
//!
//! Each command is a module with an execute function that takes validated
//! input and runs the operation against the filesystem.

pub mod tag;

pub use tag::{Outcome, TagRequest, execute as tag};
