//! Terminal panel with in-place line updates.
//!
//! The panel reserves one stdout row per timer and rewrites all rows on each
//! update using cursor-up and clear-line escapes, so the three status lines
//! refresh in place instead of scrolling.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use super::DisplaySink;

/// Shared terminal panel. Hand out one [`PanelLine`] per timer with
/// [`line`](TerminalPanel::line).
#[derive(Debug, Clone, Default)]
pub struct TerminalPanel {
    state: Arc<Mutex<PanelState>>,
}

#[derive(Debug, Default)]
struct PanelState {
    lines: Vec<String>,
    /// Whether the panel rows have been printed at least once; before that
    /// there is nothing on screen to move the cursor over.
    drawn: bool,
}

impl TerminalPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next panel row and returns its display handle.
    #[must_use]
    pub fn line(&self) -> PanelLine {
        let mut state = lock_state(&self.state);
        state.lines.push(String::new());
        PanelLine {
            state: Arc::clone(&self.state),
            index: state.lines.len() - 1,
        }
    }

    /// Number of reserved rows.
    #[must_use]
    pub fn len(&self) -> usize {
        lock_state(&self.state).lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One timer's reserved row in a [`TerminalPanel`].
#[derive(Debug)]
pub struct PanelLine {
    state: Arc<Mutex<PanelState>>,
    index: usize,
}

impl DisplaySink for PanelLine {
    fn update(&mut self, text: &str) {
        let mut state = lock_state(&self.state);
        state.lines[self.index] = text.to_string();
        if let Err(e) = state.redraw(&mut io::stdout()) {
            warn!("panel redraw failed: {e}");
        }
    }
}

impl PanelState {
    /// Rewrites every panel row. After the first draw, the cursor is moved
    /// back up over the previously printed rows so they are replaced in
    /// place.
    fn redraw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.drawn {
            write!(out, "\x1b[{}A", self.lines.len())?;
        }
        for line in &self.lines {
            writeln!(out, "\r\x1b[2K{line}")?;
        }
        out.flush()?;
        self.drawn = true;
        Ok(())
    }
}

fn lock_state(state: &Mutex<PanelState>) -> MutexGuard<'_, PanelState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

// ============================================================================
// Tests
// ============================================================================
