//! Reporting for batch runs
//!
//! The batch pipeline never prints directly. It talks to a [`Reporter`]
//! created at the start of an invocation and flushed before exit, so the
//! same code drives the terminal and the in-memory recorder used in tests.
//!
//! - [`TerminalReporter`]: colored lines on stderr
//! - [`MemoryReporter`]: buffers every event for later inspection
//! - [`preview`]: sampled old/new name listing shown before renaming

mod memory;
pub mod preview;

pub use memory::{MemoryReporter, ReportEvent};
pub use preview::{Preview, PreviewEntry, PreviewSampler};

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Sink for everything a batch run tells the user
pub trait Reporter {
    /// Write a message at the given level
    fn message(&mut self, level: MessageLevel, message: &str);

    /// Show the files about to be renamed
    fn preview(&mut self, preview: &Preview);

    /// A file was renamed
    fn renamed(&mut self, from: &Path, to: &Path);

    /// Flush buffered output before the process exits
    fn flush(&mut self) {}

    fn info(&mut self, message: &str) {
        self.message(MessageLevel::Info, message);
    }

    fn warning(&mut self, message: &str) {
        self.message(MessageLevel::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.message(MessageLevel::Error, message);
    }
}

/// CLI implementation - writes colored lines to stderr
///
/// In quiet mode only errors are shown.
///
/// # Examples
///
/// ```no_run
/// use file_tags::output::{Reporter, TerminalReporter};
///
/// let mut reporter = TerminalReporter::new(false);
/// reporter.info("Renaming the files ...");
/// reporter.flush();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalReporter {
    quiet: bool,
}

impl TerminalReporter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for TerminalReporter {
    fn message(&mut self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Info | MessageLevel::Warning if self.quiet => {}
            MessageLevel::Info => eprintln!("{} {message}", "INFO".green()),
            MessageLevel::Warning => eprintln!("{} {message}", "WARN".yellow()),
            MessageLevel::Error => eprintln!("{} {}", "ERR ".red().bold(), message.red()),
        }
    }

    fn preview(&mut self, preview: &Preview) {
        if self.quiet {
            return;
        }
        eprintln!("{} Files to change [{}]:", "INFO".green(), preview.total);
        for entry in &preview.entries {
            for line in entry.lines() {
                eprintln!("{} {line}", "INFO".green());
            }
        }
        if preview.is_truncated() {
            eprintln!("{} {}", "INFO".green(), " [...]".dimmed());
        }
    }

    fn renamed(&mut self, _from: &Path, to: &Path) {
        if self.quiet {
            return;
        }
        let name = to.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        eprintln!("{} {} '{name}'", "INFO".green(), "renamed ->".dimmed());
    }

    fn flush(&mut self) {
        let _ = io::stderr().flush();
    }
}
