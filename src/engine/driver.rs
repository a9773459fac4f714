//! One-second tick loop over the registered timers.
//!
//! The driver owns the (timer, display) pairs and a shared alert sink.
//! Each pass ticks every timer in registration order, pushes the returned
//! text to that timer's display surface, and routes raised alerts to the
//! alert sink. Alert delivery failures are logged, never propagated: a
//! failed beep must not stop the clock.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::alert::AlertSink;
use crate::display::DisplaySink;
use crate::timer::{Alert, Timer};

// ============================================================================
// Driver
// ============================================================================

/// Ticks every registered timer once per second and forwards the results.
pub struct Driver {
    slots: Vec<Slot>,
    alerts: Arc<dyn AlertSink>,
}

/// One registered timer together with its display surface.
struct Slot {
    timer: Box<dyn Timer>,
    display: Box<dyn DisplaySink>,
}

impl Driver {
    /// Creates a driver with no registered timers.
    #[must_use]
    pub fn new(alerts: Arc<dyn AlertSink>) -> Self {
        Self {
            slots: Vec::new(),
            alerts,
        }
    }

    /// Registers a timer and the display surface that shows its status line.
    pub fn register(&mut self, timer: Box<dyn Timer>, display: Box<dyn DisplaySink>) {
        self.slots.push(Slot { timer, display });
    }

    /// Number of registered timers.
    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.slots.len()
    }

    /// Runs the tick loop until the shutdown signal flips.
    ///
    /// The loop fires once immediately, then once per second
    /// (`MissedTickBehavior::Skip`: a stalled host never causes a burst of
    /// catch-up ticks). The shutdown receiver is the explicit cancel handle;
    /// once it changes, no further tick is scheduled.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("driver started with {} timers", self.slots.len());

        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick_all(),
                _ = shutdown.changed() => break,
            }
        }

        info!("driver stopped");
        Ok(())
    }

    /// One synchronous pass: tick every timer, update every display, then
    /// deliver the alerts this pass raised.
    pub fn tick_all(&mut self) {
        let mut raised = Vec::new();
        for slot in &mut self.slots {
            let tick = slot.timer.tick();
            slot.display.update(&tick.text);
            if let Some(alert) = tick.alert {
                raised.push(alert);
            }
        }
        for alert in raised {
            self.deliver(alert);
        }
    }

    fn deliver(&self, alert: Alert) {
        match alert {
            Alert::IntervalElapsed { interval } => {
                debug!(interval, "interval elapsed");
                if let Err(e) = self.alerts.short_tone() {
                    warn!("interval tone failed: {e}");
                }
            }
            Alert::TargetReached => {
                debug!("countdown reached target");
                if let Err(e) = self.alerts.long_tone() {
                    warn!("expiry tone failed: {e}");
                }
                if let Err(e) = self.alerts.notify("Target timer", "Target time reached") {
                    warn!("expiry notification failed: {e}");
                }
            }
        }
    }
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("timers", &self.slots.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
