//! Scan orchestration: deterministic walk, naming enforcement, probing, and
//! aggregation.
//!
//! The walk is depth-first with each directory's entries sorted by name, so
//! the file that triggers a structure abort is reproducible across runs.
//! Naming is enforced during the walk (first violation aborts the whole
//! scan); probing happens afterwards over the validated candidate list, which
//! keeps the all-or-nothing invariant independent of probe concurrency.

use crate::models::CheckOutcome;
use crate::services::{evaluate, naming};
use crate::services::probe::MediaProbe;
use crate::{Result, ScanOptions, ScanReport, ScanSummary, Standard};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// An eligible video file collected during the walk, naming already verified.
#[derive(Debug, Clone)]
struct Candidate {
    path: PathBuf,
}

/// Outcome of the collection walk.
enum Walk {
    Complete(Vec<Candidate>),
    Violation(PathBuf),
}

pub fn scan(
    root: &Path,
    standard: &Standard,
    prober: &dyn MediaProbe,
    opts: &ScanOptions,
) -> Result<ScanReport> {
    if !root.exists() {
        log::debug!("Scan root does not exist: {}", root.display());
        return Ok(ScanReport::RootNotFound);
    }

    if !root.is_dir() {
        return Err(crate::Error::InvalidInput(format!(
            "Path is not a directory: {}",
            root.display()
        )));
    }

    let started_at = SystemTime::now();

    let candidates = match collect_candidates(root, opts)? {
        Walk::Violation(path) => {
            log::info!("Scan aborted, naming violation at {}", path.display());
            return Ok(ScanReport::StructureError {
                path: path.to_string_lossy().into_owned(),
            });
        }
        Walk::Complete(candidates) => candidates,
    };

    if candidates.is_empty() {
        return Ok(ScanReport::NoVideosFound);
    }

    let results = probe_candidates(&candidates, standard, prober, opts.parallel_probe);

    let total_seconds: f64 = results.iter().map(|r| r.duration_seconds).sum();
    let pass_seconds: f64 = results
        .iter()
        .filter(|r| r.passed)
        .map(|r| r.duration_seconds)
        .sum();
    let fail_seconds: f64 = results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| r.duration_seconds)
        .sum();

    Ok(ScanReport::Completed(ScanSummary {
        root: root.to_string_lossy().into_owned(),
        results,
        total_seconds,
        pass_seconds,
        fail_seconds,
        started_at,
        finished_at: SystemTime::now(),
    }))
}

/// Walk the tree depth-first in lexicographic entry order, validating naming
/// for every eligible video file. Unreadable directories are logged and
/// skipped; a naming violation short-circuits the entire walk.
fn collect_candidates(root: &Path, opts: &ScanOptions) -> Result<Walk> {
    let mut candidates = Vec::new();
    match walk_directory(root, opts, &mut candidates)? {
        Some(offender) => Ok(Walk::Violation(offender)),
        None => Ok(Walk::Complete(candidates)),
    }
}

/// Returns the offending path as soon as a naming violation is found.
fn walk_directory(
    dir: &Path,
    opts: &ScanOptions,
    candidates: &mut Vec<Candidate>,
) -> Result<Option<PathBuf>> {
    let reader = match fs::read_dir(dir) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("Skipping unreadable directory {}: {e}", dir.display());
            return Ok(None);
        }
    };

    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in reader {
        match entry {
            Ok(e) => entries.push(e.path()),
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {e}", dir.display());
            }
        }
    }
    entries.sort();

    for path in entries {
        let metadata = match fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("Skipping {}: {e}", path.display());
                continue;
            }
        };

        if metadata.is_symlink() && !opts.follow_symlinks {
            continue;
        }

        if path.is_dir() {
            if let Some(offender) = walk_directory(&path, opts, candidates)? {
                return Ok(Some(offender));
            }
        } else if path.is_file() {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if !naming::is_video_file(&filename) {
                continue;
            }

            let parent_folder = path
                .parent()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if let Err(violation) = naming::validate(&filename, &parent_folder) {
                log::debug!("{violation}");
                return Ok(Some(path));
            }

            candidates.push(Candidate { path });
        }
    }

    Ok(None)
}

/// Probe and evaluate every candidate, preserving walk order in the output.
/// Unreadable files are logged and dropped; they count toward nothing.
fn probe_candidates(
    candidates: &[Candidate],
    standard: &Standard,
    prober: &dyn MediaProbe,
    parallel: bool,
) -> Vec<CheckOutcome> {
    let probe_one = |candidate: &Candidate| -> Option<CheckOutcome> {
        match prober.probe(&candidate.path) {
            Ok(media) => Some(evaluate::evaluate(&media, standard)),
            Err(e) => {
                log::warn!("Skipping {}: {e}", candidate.path.display());
                None
            }
        }
    };

    // Both branches map in candidate order; rayon's indexed collect keeps it.
    if parallel {
        candidates.par_iter().filter_map(probe_one).collect()
    } else {
        candidates.iter().filter_map(probe_one).collect()
    }
}
