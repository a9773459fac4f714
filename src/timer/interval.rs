//! Periodic interval alarm.

use super::error::ConfigError;
use super::format::hhmmss;
use super::{Alert, Tick, Timer};

/// Counts up to a fixed threshold, then resets to zero and raises an alert.
///
/// The counter never holds a value >= the interval after a tick.
#[derive(Debug)]
pub struct IntervalAlarm {
    interval: u32,
    counter: u32,
}

impl IntervalAlarm {
    /// Creates an interval alarm with the given threshold in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IntervalOutOfRange`] if `interval` is zero.
    pub fn new(interval: u32) -> Result<Self, ConfigError> {
        if interval == 0 {
            return Err(ConfigError::IntervalOutOfRange(interval));
        }
        Ok(Self {
            interval,
            counter: 0,
        })
    }

    /// The configured threshold in seconds.
    #[must_use]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Current counter value.
    #[must_use]
    pub fn counter(&self) -> u32 {
        self.counter
    }
}

impl Timer for IntervalAlarm {
    fn tick(&mut self) -> Tick {
        self.counter += 1;
        let alert = if self.counter >= self.interval {
            self.counter = 0;
            Some(Alert::IntervalElapsed {
                interval: self.interval,
            })
        } else {
            None
        };
        Tick {
            text: format!(
                "~ Interval ({}s) {}",
                self.interval,
                hhmmss(u64::from(self.counter))
            ),
            alert,
        }
    }
}
