//! Video QC Library
//!
//! This library audits a directory tree of video files against a technical
//! standard (container format, frame rate, resolution, aspect ratio) and a
//! mandatory filename/folder naming convention, producing a per-file verdict
//! and aggregate duration accounting. Scan summaries can be appended to a
//! pluggable history sink.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{CheckOutcome, HistoryRecord, ProbedMedia};
pub use services::probe::MediaProbe;

use std::path::Path;
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    History(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::History(msg) => write!(f, "History sink error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Technical standard a video must meet.
///
/// Built once per scan invocation and never mutated. `Default` gives the
/// fixed production thresholds.
#[derive(Debug, Clone)]
pub struct Standard {
    pub target_fps: f64,
    pub fps_tolerance: f64,
    pub required_extension: String,
    pub min_width: u32,
    pub min_height: u32,
    pub target_ratio: f64,
    pub ratio_tolerance: f64,
}

impl Default for Standard {
    fn default() -> Self {
        Self {
            target_fps: 30.0,
            fps_tolerance: 0.5,
            required_extension: ".mp4".to_string(),
            min_width: 2800,
            min_height: 2100,
            target_ratio: 4.0 / 3.0,
            ratio_tolerance: 0.05,
        }
    }
}

/// Options for scanning a directory
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Probe files concurrently with rayon. Outcomes are reassembled in walk
    /// order, so aggregates and output stay deterministic.
    pub parallel_probe: bool,
    pub follow_symlinks: bool,
}

/// Aggregated result of a completed scan.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub root: String,
    pub results: Vec<CheckOutcome>,
    pub total_seconds: f64,
    pub pass_seconds: f64,
    pub fail_seconds: f64,
    pub started_at: std::time::SystemTime,
    pub finished_at: std::time::SystemTime,
}

impl ScanSummary {
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    #[must_use]
    pub fn fail_count(&self) -> usize {
        self.results.len() - self.pass_count()
    }
}

/// Terminal result of one scan invocation. Exactly one variant per scan.
#[derive(Debug, Clone)]
pub enum ScanReport {
    /// Every eligible file passed naming validation and was evaluated.
    Completed(ScanSummary),
    /// A file violated the naming/folder convention; the whole scan aborted
    /// with no per-file outcomes. The offending path is kept for diagnostics
    /// only and is not part of the JSON contract.
    StructureError { path: String },
    /// The supplied root path does not exist.
    RootNotFound,
    /// The walk completed without encountering any eligible video file.
    NoVideosFound,
}

/// Scan a directory tree and produce a QC report.
///
/// # Arguments
/// * `root` - The root directory to scan
/// * `standard` - Technical thresholds to check files against
/// * `prober` - Media property extractor (see [`services::probe::FfprobeProber`])
/// * `opts` - Scan options
///
/// # Errors
/// Returns `Error::InvalidInput` when `root` exists but is not a directory.
/// Terminal scan conditions (missing root, naming violation, empty tree) are
/// reported as [`ScanReport`] variants, not errors.
pub fn scan_report<P: AsRef<Path>>(
    root: P,
    standard: &Standard,
    prober: &dyn MediaProbe,
    opts: &ScanOptions,
) -> Result<ScanReport> {
    services::scan::scan(root.as_ref(), standard, prober, opts)
}
