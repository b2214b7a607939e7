//! Summary reporting into the history sink

use crate::ScanSummary;
use crate::models::HistoryRecord;
use crate::services::history::HistorySink;
use std::io;

/// Build a history record for a completed scan and append it to the sink.
///
/// Only completed scans are recorded; terminal conditions (missing root,
/// structure error, no videos) never reach this function. The record is
/// appended after the full summary is computed, so an aborted scan leaves the
/// sink untouched.
#[allow(clippy::cast_possible_truncation)]
pub fn report(
    summary: &ScanSummary,
    user: &str,
    root: &str,
    sink: &mut dyn HistorySink,
) -> io::Result<HistoryRecord> {
    let record = HistoryRecord {
        time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        user: user.to_string(),
        path: root.to_string(),
        pass_count: summary.pass_count() as u32,
        total: summary.results.len() as u32,
    };

    sink.append(&record)?;
    log::debug!(
        "Recorded scan for user '{}': {}/{} passed",
        record.user,
        record.pass_count,
        record.total
    );
    Ok(record)
}
