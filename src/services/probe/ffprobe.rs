//! ffprobe-backed media prober
//!
//! Spawns `ffprobe` against one file and reads the first video stream's
//! metadata from its JSON output. Only container metadata is queried; no
//! frames are decoded.

use super::{MediaProbe, ProbeError, duration_seconds};
use crate::models::ProbedMedia;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Prober that shells out to ffprobe.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    command: String,
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self {
            command: "ffprobe".to_string(),
        }
    }
}

impl FfprobeProber {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit ffprobe executable instead of resolving via PATH.
    #[must_use]
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
    format: Option<FfprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    avg_frame_rate: Option<String>,
    nb_frames: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

impl MediaProbe for FfprobeProber {
    fn probe(&self, path: &Path) -> Result<ProbedMedia, ProbeError> {
        let path_str = path.to_string_lossy().into_owned();
        let unreadable = |message: String| ProbeError::Unreadable {
            path: path_str.clone(),
            message,
        };

        // `output()` waits for the child, so the handle is released before we
        // return on every branch.
        let output = Command::new(&self.command)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=width,height,r_frame_rate,avg_frame_rate,nb_frames",
                "-show_entries",
                "format=duration",
                "-of",
                "json",
            ])
            .arg(path)
            .output()
            .map_err(|e| unreadable(format!("failed to run {}: {e}", self.command)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(unreadable(stderr.trim().to_string()));
        }

        let parsed: FfprobeOutput = serde_json::from_slice(&output.stdout)
            .map_err(|e| unreadable(format!("unparseable ffprobe output: {e}")))?;

        if parsed.streams.is_empty() {
            return Err(unreadable("no video stream".to_string()));
        }

        Ok(media_from_output(&parsed, path_str))
    }
}

fn media_from_output(output: &FfprobeOutput, path: String) -> ProbedMedia {
    let stream = &output.streams[0];

    let width = stream.width.unwrap_or(0);
    let height = stream.height.unwrap_or(0);

    let fps = stream
        .r_frame_rate
        .as_deref()
        .map(parse_rate)
        .filter(|rate| *rate > 0.0)
        .or_else(|| stream.avg_frame_rate.as_deref().map(parse_rate))
        .unwrap_or(0.0);

    let container_duration = output
        .format
        .as_ref()
        .and_then(|f| f.duration.as_deref())
        .and_then(|d| d.parse::<f64>().ok())
        .unwrap_or(0.0);

    let frame_count = frame_count_of(stream, fps, container_duration);

    ProbedMedia {
        path,
        width,
        height,
        fps,
        frame_count,
        duration_seconds: duration_seconds(frame_count, fps),
    }
}

/// Frame count from `nb_frames` when the container records it, otherwise
/// derived from the container duration (what a frame-count query effectively
/// reports for formats that omit `nb_frames`, e.g. Matroska).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn frame_count_of(stream: &FfprobeStream, fps: f64, container_duration: f64) -> u64 {
    if let Some(count) = stream.nb_frames.as_deref().and_then(|n| n.parse::<u64>().ok())
        && count > 0
    {
        return count;
    }

    if fps > 0.0 && container_duration > 0.0 {
        (container_duration * fps).round() as u64
    } else {
        0
    }
}

/// Parse an ffprobe rational rate like `30000/1001` (or a plain number).
/// Zero denominators and malformed values yield `0.0`.
fn parse_rate(rate: &str) -> f64 {
    match rate.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().unwrap_or(0.0);
            let den: f64 = den.trim().parse().unwrap_or(0.0);
            if den > 0.0 { num / den } else { 0.0 }
        }
        None => rate.trim().parse().unwrap_or(0.0),
    }
}
