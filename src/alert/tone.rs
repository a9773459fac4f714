//! Tone definitions for alert playback.

use std::time::Duration;

/// A pure tone described by frequency and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Frequency in hertz.
    pub frequency_hz: f32,
    /// How long the tone sounds.
    pub duration: Duration,
}

/// Short confirmation tone, played each time the interval alarm resets.
pub const SHORT_TONE: ToneSpec = ToneSpec {
    frequency_hz: 1000.0,
    duration: Duration::from_millis(400),
};

/// Long expiry tone, played once when the countdown reaches zero.
pub const LONG_TONE: ToneSpec = ToneSpec {
    frequency_hz: 1500.0,
    duration: Duration::from_millis(800),
};
