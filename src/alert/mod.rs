//! Alert delivery for timer events.
//!
//! This module provides the audible/visible alert capabilities:
//!
//! - `AlertSink` trait abstracting tone playback and desktop notifications
//! - `DesktopAlertSink` producing synthesized sine tones through rodio and
//!   notifications through notify-rust
//! - `MockAlertSink` recording calls for tests
//! - Graceful degradation when no audio device is available
//!
//! Tones carry explicit frequency and duration ([`ToneSpec`]): a short
//! confirmation tone on each interval reset and a long tone on countdown
//! expiry. All delivery is non-blocking so the tick loop never stalls.

mod desktop;
mod error;
mod tone;

pub use desktop::DesktopAlertSink;
pub use error::AlertError;
pub use tone::{ToneSpec, LONG_TONE, SHORT_TONE};

// ============================================================================
// AlertSink
// ============================================================================

/// Capability for producing audible tones and user-visible notifications.
///
/// This trait abstracts the side effects of timer alerts, allowing the
/// countdown/interval logic to be tested with a recording stub instead of a
/// real audio device.
pub trait AlertSink: Send + Sync {
    /// Plays the short confirmation tone (interval reset). Non-blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if tone playback fails.
    fn short_tone(&self) -> Result<(), AlertError>;

    /// Plays the long expiry tone (countdown reached zero). Non-blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if tone playback fails.
    fn long_tone(&self) -> Result<(), AlertError>;

    /// Delivers a user-visible notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be delivered.
    fn notify(&self, summary: &str, body: &str) -> Result<(), AlertError>;
}

// ============================================================================
// MockAlertSink
// ============================================================================

/// A single recorded alert-sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertCall {
    /// `short_tone` was invoked.
    ShortTone,
    /// `long_tone` was invoked.
    LongTone,
    /// `notify` was invoked with the given summary and body.
    Notify {
        /// Notification summary line.
        summary: String,
        /// Notification body text.
        body: String,
    },
}

/// Mock alert sink for testing.
#[derive(Debug, Default)]
pub struct MockAlertSink {
    calls: std::sync::Mutex<Vec<AlertCall>>,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockAlertSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call return an error.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn calls(&self) -> Vec<AlertCall> {
        self.calls.lock().unwrap().clone()
    }

    #[must_use]
    pub fn short_tone_count(&self) -> usize {
        self.count(|c| matches!(c, AlertCall::ShortTone))
    }

    #[must_use]
    pub fn long_tone_count(&self) -> usize {
        self.count(|c| matches!(c, AlertCall::LongTone))
    }

    #[must_use]
    pub fn notify_count(&self) -> usize {
        self.count(|c| matches!(c, AlertCall::Notify { .. }))
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn count(&self, predicate: impl Fn(&AlertCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: AlertCall) -> Result<(), AlertError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(AlertError::Playback("Mock failure".to_string()));
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl AlertSink for MockAlertSink {
    fn short_tone(&self) -> Result<(), AlertError> {
        self.record(AlertCall::ShortTone)
    }

    fn long_tone(&self) -> Result<(), AlertError> {
        self.record(AlertCall::LongTone)
    }

    fn notify(&self, summary: &str, body: &str) -> Result<(), AlertError> {
        self.record(AlertCall::Notify {
            summary: summary.to_string(),
            body: body.to_string(),
        })
    }
}
