use std::path::{Path, PathBuf};

use super::{MessageLevel, Preview, Reporter};

/// Event captured by [`MemoryReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Message(MessageLevel, String),
    Preview(Preview),
    Renamed { from: PathBuf, to: PathBuf },
    Flushed,
}

/// Reporter that keeps every event in memory
///
/// Useful for driving the batch pipeline without a terminal.
///
/// # Examples
///
/// ```
/// use file_tags::output::{MemoryReporter, Reporter};
///
/// let mut reporter = MemoryReporter::new();
/// reporter.info("Files successfully renamed.");
/// assert_eq!(reporter.messages(), ["Files successfully renamed."]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    pub events: Vec<ReportEvent>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every message, in order, regardless of level
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Message(_, text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Messages logged at `level`
    #[must_use]
    pub fn messages_at(&self, level: MessageLevel) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Message(l, text) if *l == level => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every `(from, to)` pair reported as renamed
    #[must_use]
    pub fn renames(&self) -> Vec<(&Path, &Path)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Renamed { from, to } => Some((from.as_path(), to.as_path())),
                _ => None,
            })
            .collect()
    }

    /// The last preview shown, if any
    #[must_use]
    pub fn last_preview(&self) -> Option<&Preview> {
        self.events.iter().rev().find_map(|e| match e {
            ReportEvent::Preview(preview) => Some(preview),
            _ => None,
        })
    }
}

impl Reporter for MemoryReporter {
    fn message(&mut self, level: MessageLevel, message: &str) {
        self.events
            .push(ReportEvent::Message(level, message.to_string()));
    }

    fn preview(&mut self, preview: &Preview) {
        self.events.push(ReportEvent::Preview(preview.clone()));
    }

    fn renamed(&mut self, from: &Path, to: &Path) {
        self.events.push(ReportEvent::Renamed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }

    fn flush(&mut self) {
        self.events.push(ReportEvent::Flushed);
    }
}
