//! Unbounded elapsed-time stopwatch.

use super::format::hhmmss;
use super::{Tick, Timer};

/// Counts seconds upward without bound. Never raises an alert.
#[derive(Debug, Default)]
pub struct Stopwatch {
    elapsed: u64,
}

impl Stopwatch {
    /// Creates a stopwatch at zero elapsed seconds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds accumulated so far.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed
    }
}

impl Timer for Stopwatch {
    fn tick(&mut self) -> Tick {
        self.elapsed += 1;
        Tick {
            text: format!("* Elapsed {}", hhmmss(self.elapsed)),
            alert: None,
        }
    }
}
