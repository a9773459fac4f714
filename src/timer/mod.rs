//! Timer variants and the one-second tick contract.
//!
//! This module provides the core timer functionality:
//! - `Stopwatch`: unbounded elapsed-time counter, no alerts
//! - `IntervalAlarm`: counts up to a threshold, resets, raises a short-tone alert
//! - `CountdownAlarm`: counts down to a target wall-clock time, raises a
//!   one-time long-tone alert on reaching zero
//! - `TargetTime`: packed-HHMM target decomposition and day-rollover arithmetic
//! - `hhmmss`: zero-padded `HH:MM:SS` formatting
//!
//! The variant set is closed: the three concrete types implement the small
//! [`Timer`] trait and are selected at construction time.

mod countdown;
mod error;
mod format;
mod interval;
mod stopwatch;
mod target;

pub use countdown::CountdownAlarm;
pub use error::ConfigError;
pub use format::hhmmss;
pub use interval::IntervalAlarm;
pub use stopwatch::Stopwatch;
pub use target::TargetTime;

// ============================================================================
// Tick contract
// ============================================================================

/// Alert raised by a timer during a tick.
///
/// Delivery is the driver's job; timers only report that an alert condition
/// occurred on this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// The interval threshold was reached and the counter reset.
    IntervalElapsed {
        /// The configured interval, in seconds.
        interval: u32,
    },
    /// The countdown reached zero.
    TargetReached,
}

/// Outcome of a single one-second tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Formatted status line for the timer's display surface.
    pub text: String,
    /// Alert raised by this tick, if any.
    pub alert: Option<Alert>,
}

/// A counter updated once per second by the driver.
pub trait Timer: Send {
    /// Advances the timer by one second.
    ///
    /// Mutates the internal counter and returns the formatted status line
    /// together with any alert this tick raised.
    fn tick(&mut self) -> Tick;
}

// ============================================================================
// Tests
// ============================================================================
