//! Tritimer Library
//!
//! This library provides the core functionality for the tritimer CLI.
//! It includes:
//! - Timer variants (stopwatch, interval alarm, countdown alarm) and the
//!   one-second tick contract
//! - Target-time arithmetic (whole seconds until the next HH:MM wall-clock
//!   instant, today or tomorrow)
//! - Alert sink abstraction with synthesized tones and desktop notifications
//! - Terminal display panel with one in-place status line per timer
//! - Driver that ticks every registered timer once per second
//! - CLI command parsing and the startup target-time prompt

pub mod alert;
pub mod cli;
pub mod display;
pub mod engine;
pub mod timer;

// Re-export commonly used types for convenience
pub use alert::{
    AlertCall, AlertError, AlertSink, DesktopAlertSink, MockAlertSink, ToneSpec, LONG_TONE,
    SHORT_TONE,
};
pub use display::{DisplaySink, MockDisplay, PanelLine, TerminalPanel};
pub use engine::Driver;
pub use timer::{
    hhmmss, Alert, ConfigError, CountdownAlarm, IntervalAlarm, Stopwatch, TargetTime, Tick, Timer,
};
