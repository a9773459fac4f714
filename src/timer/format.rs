//! `HH:MM:SS` formatting for second counters.

/// Formats a seconds count as zero-padded `HH:MM:SS`.
///
/// Fields are at least two digits; the hours field widens beyond two digits
/// instead of wrapping or clamping, so a stopwatch past the 100-hour mark
/// stays readable.
#[must_use]
pub fn hhmmss(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
