//! Countdown alarm for a target wall-clock time.

use chrono::NaiveDateTime;

use super::format::hhmmss;
use super::target::TargetTime;
use super::{Alert, Tick, Timer};

/// Countdown phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountdownState {
    /// Remaining seconds are above zero and decrementing.
    CountingDown,
    /// Zero was reached; the counter holds and no further alerts fire.
    Expired,
}

/// Counts down to a target wall-clock time and alerts exactly once on zero.
///
/// An alarm whose remaining duration is already zero at construction (an
/// invalid target degraded to zero, or a pathological clock) starts expired
/// and never alerts.
#[derive(Debug)]
pub struct CountdownAlarm {
    target: TargetTime,
    remaining: u64,
    state: CountdownState,
}

impl CountdownAlarm {
    /// Creates a countdown toward `target`, measured from `now`.
    #[must_use]
    pub fn new(target: TargetTime, now: NaiveDateTime) -> Self {
        let remaining = target.seconds_until(now);
        let state = if remaining == 0 {
            CountdownState::Expired
        } else {
            CountdownState::CountingDown
        };
        Self {
            target,
            remaining,
            state,
        }
    }

    /// Seconds left until the target.
    #[must_use]
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining
    }

    /// Returns true once the target has been reached.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.state == CountdownState::Expired
    }
}

#[cfg(test)]
impl CountdownAlarm {
    /// Builds an alarm with an explicit remaining count, bypassing the clock.
    fn with_remaining(remaining: u64) -> Self {
        let state = if remaining == 0 {
            CountdownState::Expired
        } else {
            CountdownState::CountingDown
        };
        Self {
            target: TargetTime::from_packed(1030),
            remaining,
            state,
        }
    }
}

impl Timer for CountdownAlarm {
    fn tick(&mut self) -> Tick {
        let alert = match self.state {
            CountdownState::CountingDown => {
                self.remaining -= 1;
                if self.remaining == 0 {
                    self.state = CountdownState::Expired;
                    Some(Alert::TargetReached)
                } else {
                    None
                }
            }
            CountdownState::Expired => None,
        };
        Tick {
            text: format!("@ Target {} {}", self.target, hhmmss(self.remaining)),
            alert,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
