//! Error taxonomy: missing root, structure aborts, empty trees

use crate::fixtures::{StubProber, add_clip, compliant_stub};
use std::fs;
use tempfile::TempDir;
use vqc::{ScanOptions, ScanReport, Standard};

#[test]
fn missing_root_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let prober = StubProber::new();
    let report =
        vqc::scan_report(&missing, &Standard::default(), &prober, &ScanOptions::default()).unwrap();

    assert!(matches!(report, ScanReport::RootNotFound));
}

#[test]
fn root_that_is_a_file_is_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, b"x").unwrap();

    let prober = StubProber::new();
    let result = vqc::scan_report(&file, &Standard::default(), &prober, &ScanOptions::default());

    assert!(matches!(result, Err(vqc::Error::InvalidInput(_))));
}

#[test]
fn empty_tree_reports_no_videos_found() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("some/nested/dirs")).unwrap();
    fs::write(temp_dir.path().join("some/readme.txt"), b"no videos here").unwrap();

    let prober = StubProber::new();
    let report =
        vqc::scan_report(temp_dir.path(), &Standard::default(), &prober, &ScanOptions::default())
            .unwrap();

    assert!(matches!(report, ScanReport::NoVideosFound));
}

#[test]
fn wrong_separator_aborts_with_structure_error() {
    let temp_dir = TempDir::new().unwrap();
    add_clip(temp_dir.path(), "clip_123456", "clip_123456_01.mp4").unwrap();

    let prober = StubProber::new();
    let report =
        vqc::scan_report(temp_dir.path(), &Standard::default(), &prober, &ScanOptions::default())
            .unwrap();

    assert!(matches!(report, ScanReport::StructureError { .. }));
}

#[test]
fn folder_mismatch_aborts_with_structure_error() {
    let temp_dir = TempDir::new().unwrap();
    // Well-formed filename, but placed in the wrong folder.
    add_clip(temp_dir.path(), "other-999999", "clip-123456-01.mp4").unwrap();

    let prober = compliant_stub("clip-123456-01.mp4");
    let report =
        vqc::scan_report(temp_dir.path(), &Standard::default(), &prober, &ScanOptions::default())
            .unwrap();

    assert!(matches!(report, ScanReport::StructureError { .. }));
}

#[test]
fn structure_error_exposes_no_partial_results() {
    let temp_dir = TempDir::new().unwrap();
    // Lexicographically the compliant folder walks first; the violation in a
    // later folder must still discard everything.
    add_clip(temp_dir.path(), "aaa-111111", "aaa-111111-01.mp4").unwrap();
    add_clip(temp_dir.path(), "zzz", "badly named.mp4").unwrap();

    let prober = compliant_stub("aaa-111111-01.mp4");
    let report =
        vqc::scan_report(temp_dir.path(), &Standard::default(), &prober, &ScanOptions::default())
            .unwrap();

    match report {
        ScanReport::StructureError { path } => {
            assert!(path.ends_with("badly named.mp4"), "offender: {path}");
        }
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn structure_abort_point_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    add_clip(temp_dir.path(), "bad2", "second_bad.mp4").unwrap();
    add_clip(temp_dir.path(), "bad1", "first_bad.mp4").unwrap();

    let prober = StubProber::new();
    for _ in 0..3 {
        let report = vqc::scan_report(
            temp_dir.path(),
            &Standard::default(),
            &prober,
            &ScanOptions::default(),
        )
        .unwrap();
        match report {
            // bad1 sorts before bad2, so it is always the reported offender.
            ScanReport::StructureError { path } => {
                assert!(path.ends_with("first_bad.mp4"), "offender: {path}");
            }
            other => panic!("expected structure error, got {other:?}"),
        }
    }
}

#[test]
fn violation_deep_in_tree_is_found() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("season/episode");
    add_clip(&nested, "clip-123456", "clip-123456-01.mp4").unwrap();
    add_clip(&nested, "clip-123456", "extra-video.mov").unwrap();

    let prober = compliant_stub("clip-123456-01.mp4");
    let report =
        vqc::scan_report(temp_dir.path(), &Standard::default(), &prober, &ScanOptions::default())
            .unwrap();

    assert!(matches!(report, ScanReport::StructureError { .. }));
}
