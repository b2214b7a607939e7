//! Output formatting for CLI

use crate::models::HistoryRecord;
use crate::services::format::format_duration;
use crate::{ScanReport, ScanSummary};

/// Render a scan report as human-readable text.
#[must_use]
pub fn format_text(report: &ScanReport) -> String {
    match report {
        ScanReport::Completed(summary) => format_summary_text(summary),
        ScanReport::StructureError { path } => {
            format!("Structure error: naming convention violated at {path}\n")
        }
        ScanReport::RootNotFound => "Error: path not found\n".to_string(),
        ScanReport::NoVideosFound => "No video files found\n".to_string(),
    }
}

fn format_summary_text(summary: &ScanSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", summary.root));
    out.push_str(&format!(
        "{} passed, {} failed, total duration {}\n",
        summary.pass_count(),
        summary.fail_count(),
        format_duration(summary.total_seconds)
    ));
    out.push_str(&format!(
        "pass duration {}, fail duration {}\n\n",
        format_duration(summary.pass_seconds),
        format_duration(summary.fail_seconds)
    ));

    out.push_str(&format!(
        "{:<4} {:<40} {:>9} {:>8} {:>9}  {}\n",
        "", "File", "Size", "FPS", "Duration", "Result"
    ));
    for result in &summary.results {
        let marker = if result.passed { "PASS" } else { "FAIL" };
        out.push_str(&format!(
            "{:<4} {:<40} {:>9} {:>8} {:>9}  {}\n",
            marker,
            result.filename,
            format!("{}x{}", result.width, result.height),
            result.fps,
            result.duration,
            result.reason()
        ));
    }

    out
}

/// Render a scan report as JSON.
///
/// Completed scans expose per-file results plus aggregate durations; terminal
/// conditions are structured markers, never partial results.
#[must_use]
pub fn format_json(report: &ScanReport) -> String {
    let output = match report {
        ScanReport::Completed(summary) => {
            let results: Vec<serde_json::Value> = summary
                .results
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "filename": r.filename,
                        "width": r.width,
                        "height": r.height,
                        "fps": r.fps,
                        "duration": r.duration,
                        "format": r.extension,
                        "passed": r.passed,
                        "reason": r.reason(),
                    })
                })
                .collect();

            serde_json::json!({
                "results": results,
                "total_duration": format_duration(summary.total_seconds),
                "pass_duration": format_duration(summary.pass_seconds),
                "fail_duration": format_duration(summary.fail_seconds),
            })
        }
        ScanReport::StructureError { .. } => serde_json::json!({ "structure_error": true }),
        ScanReport::RootNotFound => serde_json::json!({ "error": "not found" }),
        ScanReport::NoVideosFound => serde_json::json!({ "error": "no videos found" }),
    };

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Render history records as human-readable text, oldest first.
#[must_use]
pub fn format_history_text(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return "No history records.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:<12} {:>11}  {}\n",
        "Time", "User", "Passed", "Path"
    ));
    for record in records {
        out.push_str(&format!(
            "{:<20} {:<12} {:>5} / {:<3}  {}\n",
            record.time, record.user, record.pass_count, record.total, record.path
        ));
    }
    out
}

/// Render history records as JSON.
#[must_use]
pub fn format_history_json(records: &[HistoryRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}
