//! Display formatting helpers for durations and probed numeric values

/// Format a duration in seconds as `HH:MM:SS`.
///
/// Fractional seconds are truncated. Negative or non-finite inputs render as
/// `00:00:00`.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Round a value to two decimal places for display and reason strings.
///
/// Display-only: tolerance comparisons always use the raw value.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
