//! Target wall-clock time for the countdown alarm.
//!
//! The target is entered in packed `HHMM` form (`1430` for 14:30) and the
//! remaining duration is computed against naive local time: no timezone
//! conversion, no leap-second handling, exactly whole-second truncation.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

/// An hour/minute pair decomposed from a packed `HHMM` integer.
///
/// The pair is carried as entered; out-of-range components are not rejected
/// here but degrade to a zero remaining-duration in [`seconds_until`].
/// Input boundaries (CLI parsing, the startup prompt) validate before
/// construction.
///
/// [`seconds_until`]: TargetTime::seconds_until
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTime {
    hour: u32,
    minute: u32,
}

impl TargetTime {
    /// Creates a target from explicit hour and minute components.
    #[must_use]
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Decomposes a packed `HHMM` integer (e.g. `1430` for 14:30).
    #[must_use]
    pub fn from_packed(hhmm: u32) -> Self {
        Self::new(hhmm / 100, hhmm % 100)
    }

    /// Hour component as entered.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute component as entered.
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns true if the pair is a real clock time.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.hour <= 23 && self.minute <= 59
    }

    /// Whole seconds until this time next occurs, today or tomorrow.
    ///
    /// A target not strictly after `now` rolls forward exactly one day, so a
    /// target equal to the current time yields a full day and never fires
    /// immediately. Invalid components yield 0. The result is truncated
    /// toward zero.
    #[must_use]
    pub fn seconds_until(&self, now: NaiveDateTime) -> u64 {
        if !self.is_valid() {
            return 0;
        }
        let Some(mut target) = now.date().and_hms_opt(self.hour, self.minute, 0) else {
            return 0;
        };
        if target <= now {
            target += Duration::days(1);
        }
        (target - now).num_seconds() as u64
    }
}

impl fmt::Display for TargetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// ============================================================================
// Tests
// ============================================================================
