//! Display surfaces for timer status lines.
//!
//! Each timer owns one text surface behind the `DisplaySink` trait:
//! - `TerminalPanel` / `PanelLine`: stacked stdout lines rewritten in place
//! - `MockDisplay`: records pushed lines for tests

mod panel;

pub use panel::{PanelLine, TerminalPanel};

/// A text surface showing one timer's current status line.
pub trait DisplaySink: Send {
    /// Replaces the surface content with `text`.
    fn update(&mut self, text: &str);
}

/// Mock display that records every pushed line, for tests.
///
/// Clones share the same recording, so a test can keep one handle while the
/// driver owns another.
#[derive(Debug, Clone, Default)]
pub struct MockDisplay {
    updates: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines pushed so far, oldest first.
    #[must_use]
    pub fn updates(&self) -> Vec<String> {
        self.updates.lock().unwrap().clone()
    }

    /// The most recently pushed line.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.updates.lock().unwrap().last().cloned()
    }

    #[must_use]
    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }
}

impl DisplaySink for MockDisplay {
    fn update(&mut self, text: &str) {
        self.updates.lock().unwrap().push(text.to_string());
    }
}
