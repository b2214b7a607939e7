//! Standards evaluation: per-file pass/fail against the configured thresholds

use crate::Standard;
use crate::models::{CheckOutcome, ProbedMedia};
use crate::services::format::{format_duration, round2};
use std::path::Path;

/// Evaluate probed media against a standard.
///
/// All four checks (format, fps, resolution, ratio) are evaluated
/// independently; `passed` is the conjunction and failure reasons are
/// appended in that fixed order regardless of which check failed first.
/// Tolerance comparisons use the raw probed values; the two-decimal rounding
/// in the outcome and reason strings is display-only.
#[must_use]
pub fn evaluate(media: &ProbedMedia, standard: &Standard) -> CheckOutcome {
    let path = Path::new(&media.path);
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| media.path.clone());
    let extension = extension_of(path);
    let ratio = media.ratio();

    let format_ok = extension.eq_ignore_ascii_case(&standard.required_extension);
    let fps_ok = (media.fps - standard.target_fps).abs() <= standard.fps_tolerance;
    let resolution_ok = media.width >= standard.min_width && media.height >= standard.min_height;
    let ratio_ok = (ratio - standard.target_ratio).abs() <= standard.ratio_tolerance;

    let mut reasons = Vec::new();
    if !format_ok {
        reasons.push(format!("wrong format({extension})"));
    }
    if !fps_ok {
        reasons.push(format!("abnormal fps({})", round2(media.fps)));
    }
    if !resolution_ok {
        reasons.push(format!(
            "insufficient resolution({}x{})",
            media.width, media.height
        ));
    }
    if !ratio_ok {
        reasons.push(format!("wrong ratio({})", round2(ratio)));
    }

    CheckOutcome {
        filename,
        width: media.width,
        height: media.height,
        fps: round2(media.fps),
        duration_seconds: media.duration_seconds,
        duration: format_duration(media.duration_seconds),
        extension,
        passed: format_ok && fps_ok && resolution_ok && ratio_ok,
        reasons,
    }
}

/// Lowercased extension with leading dot, empty when the path has none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_ascii_lowercase()))
        .unwrap_or_default()
}
