//! Output collaborators
//!
//! The state machine never renders anything itself. A UI shell plugs in a
//! [`DisplaySink`] and a [`HistorySink`] and the driver pushes outputs into
//! them after every event.

/// Receives the display text after every event
pub trait DisplaySink {
    /// Shows the current display text
    fn render(&mut self, text: &str);
}

/// Receives history pane updates
pub trait HistorySink {
    /// Appends one formatted history line
    fn append(&mut self, line: &str);

    /// Empties the history pane
    fn reset(&mut self);
}

/// In-memory sink that records everything it receives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    frames: Vec<String>,
    lines: Vec<String>,
}

impl RecordingSink {
    /// Creates an empty recording sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every display text rendered, oldest first
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recently rendered display text
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// History lines currently in the pane
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}

impl HistorySink for RecordingSink {
    fn append(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn reset(&mut self) {
        self.lines.clear();
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn render(&mut self, text: &str) {
        (**self).render(text);
    }
}

impl<T: HistorySink + ?Sized> HistorySink for &mut T {
    fn append(&mut self, line: &str) {
        (**self).append(line);
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
