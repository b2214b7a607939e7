//! Data models for probed media, per-file verdicts, and history records

use serde::{Deserialize, Serialize};

/// Properties extracted from one video container.
///
/// `duration_seconds` is `frame_count / fps` when `fps > 0`, otherwise `0.0`.
/// Absent or unparseable container fields are represented as `0`, never as an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbedMedia {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub frame_count: u64,
    pub duration_seconds: f64,
}

impl ProbedMedia {
    /// Width/height ratio, `0.0` when the height is zero.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.height > 0 {
            f64::from(self.width) / f64::from(self.height)
        } else {
            0.0
        }
    }
}

/// Compliance verdict for a single file.
///
/// `fps` is rounded to two decimals for display; the tolerance comparison that
/// produced `passed` used the raw probed value. `reasons` holds the failing
/// checks in fixed order (format, fps, resolution, ratio) and is empty for a
/// compliant file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub duration_seconds: f64,
    pub duration: String,
    pub extension: String,
    pub passed: bool,
    pub reasons: Vec<String>,
}

impl CheckOutcome {
    /// Joined failure reasons, or the compliant marker when none failed.
    #[must_use]
    pub fn reason(&self) -> String {
        if self.reasons.is_empty() {
            "compliant".to_string()
        } else {
            self.reasons.join(" | ")
        }
    }
}

/// One line of scan history: who scanned what, when, and how it went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub time: String,
    pub user: String,
    pub path: String,
    pub pass_count: u32,
    pub total: u32,
}
