//! Desktop alert sink: synthesized rodio tones plus desktop notifications.

use std::sync::atomic::{AtomicBool, Ordering};

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::AlertError;
use super::tone::{ToneSpec, LONG_TONE, SHORT_TONE};
use super::AlertSink;

/// Playback volume for synthesized tones.
const TONE_AMPLITUDE: f32 = 0.20;

/// Application name shown on desktop notifications.
const APP_NAME: &str = "tritimer";

/// Alert sink backed by the default audio output device and the desktop
/// notification service.
///
/// Audio acquisition failure is not fatal: tones degrade to no-ops with a
/// warning at startup while notifications keep working. Tone playback is
/// detached, so a tone keeps sounding without blocking the tick loop.
pub struct DesktopAlertSink {
    /// Audio output, `None` when no device was available at startup.
    audio: Option<AudioOutput>,
    /// Whether tone playback is muted (`--no-sound`).
    muted: AtomicBool,
}

struct AudioOutput {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    handle: OutputStreamHandle,
}

impl DesktopAlertSink {
    /// Creates the sink, acquiring the default audio output device.
    ///
    /// # Arguments
    ///
    /// * `muted` - If true, all tone playback will be silently skipped.
    #[must_use]
    pub fn new(muted: bool) -> Self {
        let audio = match OutputStream::try_default() {
            Ok((stream, handle)) => {
                debug!("audio output stream initialized");
                Some(AudioOutput {
                    _stream: stream,
                    handle,
                })
            }
            Err(e) => {
                warn!("audio not available, tones disabled: {e}");
                None
            }
        };
        Self {
            audio,
            muted: AtomicBool::new(muted),
        }
    }

    /// Returns true if tone playback is currently muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    /// Mutes tone playback.
    pub fn mute(&self) {
        self.muted.store(true, Ordering::Relaxed);
        debug!("tone playback muted");
    }

    /// Unmutes tone playback.
    pub fn unmute(&self) {
        self.muted.store(false, Ordering::Relaxed);
        debug!("tone playback unmuted");
    }

    /// Returns true if an audio output device was acquired at startup.
    #[must_use]
    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// Synthesizes and plays a tone on a detached sink.
    fn play_tone(&self, tone: ToneSpec) -> Result<(), AlertError> {
        if self.is_muted() {
            debug!("tone muted, skipping");
            return Ok(());
        }
        let Some(audio) = &self.audio else {
            debug!("no audio device, skipping tone");
            return Ok(());
        };

        let sink =
            Sink::try_new(&audio.handle).map_err(|e| AlertError::Stream(e.to_string()))?;
        let source = SineWave::new(tone.frequency_hz)
            .take_duration(tone.duration)
            .amplify(TONE_AMPLITUDE);

        sink.append(source);
        sink.detach(); // playback continues after this call returns

        debug!(
            frequency_hz = tone.frequency_hz,
            duration_ms = tone.duration.as_millis() as u64,
            "tone playback started (detached)"
        );
        Ok(())
    }
}

impl AlertSink for DesktopAlertSink {
    fn short_tone(&self) -> Result<(), AlertError> {
        self.play_tone(SHORT_TONE)
    }

    fn long_tone(&self) -> Result<(), AlertError> {
        self.play_tone(LONG_TONE)
    }

    fn notify(&self, summary: &str, body: &str) -> Result<(), AlertError> {
        notify_rust::Notification::new()
            .summary(summary)
            .body(body)
            .appname(APP_NAME)
            .show()
            .map(|_| ())
            .map_err(|e| AlertError::Notification(e.to_string()))
    }
}

impl std::fmt::Debug for DesktopAlertSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopAlertSink")
            .field("has_audio", &self.has_audio())
            .field("muted", &self.is_muted())
            .finish_non_exhaustive()
    }
}
