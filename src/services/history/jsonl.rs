//! File-backed history sink: one JSON record per line.
//!
//! Appending uses `OpenOptions::append`, so a record either lands as a whole
//! line or not at all under a single writer. Reading tolerates malformed
//! lines (logged and skipped) so one corrupt record never hides the rest.

use super::HistorySink;
use crate::models::HistoryRecord;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonlHistory {
    path: PathBuf,
}

impl JsonlHistory {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySink for JsonlHistory {
    fn append(&mut self, record: &HistoryRecord) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let line = serde_json::to_string(record).map_err(io::Error::other)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    fn list_by_user(&self, user: &str) -> io::Result<Vec<HistoryRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            // No history yet is an empty history, not an error.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut records = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryRecord>(&line) {
                Ok(record) => {
                    if record.user == user {
                        records.push(record);
                    }
                }
                Err(e) => {
                    log::warn!(
                        "Skipping malformed history line {} in {}: {e}",
                        line_no + 1,
                        self.path.display()
                    );
                }
            }
        }
        Ok(records)
    }
}
