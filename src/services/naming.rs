//! Filename and folder naming convention enforcement
//!
//! Every eligible video file must be named `<identifier>-<6 digits>-<2
//! digits>.<ext>` and live in a directory named exactly
//! `<identifier>-<6 digits>`. A single violation anywhere in the tree
//! invalidates the whole batch, so the validator reports violations as
//! values rather than logging and moving on.

use regex::Regex;
use std::sync::OnceLock;

/// Extensions (without dot, lowercase) that make a file an eligible video.
/// Anything else is ignored entirely: not examined, not counted.
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mov", "avi", "mkv"];

fn filename_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Greedy identifier group, so identifiers containing hyphens bind the
        // trailing `-dddddd-dd` to the last two groups.
        Regex::new(r"(?i)^(.+)-(\d{6})-(\d{2})\.(mp4|mov|avi|mkv)$")
            .unwrap_or_else(|e| unreachable!("naming pattern is valid: {e}"))
    })
}

/// Whether a filename has a recognized video extension (case-insensitive).
#[must_use]
pub fn is_video_file(filename: &str) -> bool {
    let lower = filename.to_ascii_lowercase();
    VIDEO_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// A naming/folder convention violation. Terminal for the whole scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingViolation {
    pub filename: String,
    pub parent_folder: String,
}

impl std::fmt::Display for NamingViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "naming violation: '{}' in folder '{}'",
            self.filename, self.parent_folder
        )
    }
}

/// Validate a filename and its immediate parent folder name.
///
/// The filename must match the convention pattern and the parent folder must
/// equal `<identifier>-<6 digits>` exactly (case-sensitive), reusing the two
/// groups captured from the filename.
///
/// # Errors
/// Returns a [`NamingViolation`] describing the offending pair.
pub fn validate(filename: &str, parent_folder: &str) -> Result<(), NamingViolation> {
    let violation = || NamingViolation {
        filename: filename.to_string(),
        parent_folder: parent_folder.to_string(),
    };

    let captures = filename_pattern().captures(filename).ok_or_else(violation)?;

    let identifier = &captures[1];
    let group = &captures[2];
    let expected_folder = format!("{identifier}-{group}");

    if parent_folder == expected_folder {
        Ok(())
    } else {
        Err(violation())
    }
}
