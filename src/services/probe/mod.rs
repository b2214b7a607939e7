//! Media property extraction behind a pluggable trait
//!
//! Probing is the only part of a scan that touches file contents, and the
//! only part that shells out, so it sits behind [`MediaProbe`]; tests and
//! embedders substitute their own implementation.

use crate::models::ProbedMedia;
use std::path::Path;

pub mod ffprobe;

pub use ffprobe::FfprobeProber;

/// Why a single file could not be probed. Recovered locally by the
/// orchestrator (the file is skipped); never surfaced as a scan-level error.
#[derive(Debug, Clone)]
pub enum ProbeError {
    /// The container could not be opened or inspected at all.
    Unreadable { path: String, message: String },
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::Unreadable { path, message } => {
                write!(f, "unreadable media '{path}': {message}")
            }
        }
    }
}

impl std::error::Error for ProbeError {}

/// Extracts width, height, frame rate, and frame count from one video file.
///
/// Implementations read container metadata only (no frame decoding), release
/// any handle before returning, and must never fail on malformed metadata —
/// absent or unparseable fields become `0`.
pub trait MediaProbe: Send + Sync {
    fn probe(&self, path: &Path) -> Result<ProbedMedia, ProbeError>;
}

/// Duration in seconds derived from frame count and rate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn duration_seconds(frame_count: u64, fps: f64) -> f64 {
    if fps > 0.0 {
        frame_count as f64 / fps
    } else {
        0.0
    }
}
