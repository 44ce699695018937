//! User interaction
//!
//! The rename pipeline asks for confirmation through the [`UserInput`]
//! trait so tests can answer without a terminal.
//!
//! - [`DialoguerInput`]: interactive prompt on the terminal
//! - [`MockInput`]: predetermined answers

pub mod input;
pub mod mock;

pub use input::{DialoguerInput, InputError, UserInput};
pub use mock::MockInput;
