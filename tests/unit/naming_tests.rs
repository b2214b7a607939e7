//! Unit tests for the naming convention validator

use vqc::services::naming::{is_video_file, validate};

#[test]
fn accepts_convention_pair() {
    assert!(validate("clip-123456-01.mp4", "clip-123456").is_ok());
}

#[test]
fn accepts_hyphenated_identifier() {
    // The greedy identifier group binds the trailing digit groups, so
    // hyphens inside the identifier are allowed.
    assert!(validate("my-long-clip-123456-07.mov", "my-long-clip-123456").is_ok());
}

#[test]
fn accepts_uppercase_extension_and_identifier() {
    assert!(validate("CLIP-123456-01.MP4", "CLIP-123456").is_ok());
}

#[test]
fn rejects_wrong_separator() {
    assert!(validate("clip_123456_01.mp4", "clip_123456").is_err());
}

#[test]
fn rejects_wrong_digit_counts() {
    assert!(validate("clip-12345-01.mp4", "clip-12345").is_err());
    assert!(validate("clip-1234567-01.mp4", "clip-1234567").is_err());
    assert!(validate("clip-123456-1.mp4", "clip-123456").is_err());
    assert!(validate("clip-123456-001.mp4", "clip-123456").is_err());
}

#[test]
fn rejects_empty_identifier() {
    assert!(validate("-123456-01.mp4", "-123456").is_err());
}

#[test]
fn rejects_parent_folder_mismatch() {
    assert!(validate("clip-123456-01.mp4", "clip-654321").is_err());
    assert!(validate("clip-123456-01.mp4", "other").is_err());
}

#[test]
fn parent_folder_match_is_case_sensitive() {
    // Pattern matching is case-insensitive but the folder comparison is an
    // exact string match on the captured groups.
    assert!(validate("clip-123456-01.mp4", "CLIP-123456").is_err());
    assert!(validate("Clip-123456-01.mp4", "Clip-123456").is_ok());
}

#[test]
fn rejects_unrecognized_extension() {
    assert!(validate("clip-123456-01.webm", "clip-123456").is_err());
}

#[test]
fn video_eligibility_by_extension() {
    assert!(is_video_file("a.mp4"));
    assert!(is_video_file("a.MOV"));
    assert!(is_video_file("a.avi"));
    assert!(is_video_file("a.mkv"));
    assert!(!is_video_file("a.txt"));
    assert!(!is_video_file("a.webm"));
    assert!(!is_video_file("mp4"));
}
