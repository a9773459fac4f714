//! Alert delivery error types.

use thiserror::Error;

/// Errors that can occur while delivering an alert.
#[derive(Debug, Error)]
pub enum AlertError {
    /// Failed to open an audio stream for playback.
    #[error("failed to open audio stream: {0}")]
    Stream(String),

    /// Tone playback failed.
    #[error("tone playback failed: {0}")]
    Playback(String),

    /// Desktop notification could not be delivered.
    #[error("failed to deliver desktop notification: {0}")]
    Notification(String),
}

impl AlertError {
    /// Returns true if this error came from the audio subsystem.
    #[must_use]
    pub fn is_audio(&self) -> bool {
        matches!(self, Self::Stream(_) | Self::Playback(_))
    }
}
