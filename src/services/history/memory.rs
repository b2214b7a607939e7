//! In-memory history sink for tests and embedders that manage persistence
//! themselves.

use super::HistorySink;
use crate::models::HistoryRecord;
use std::io;

#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Vec<HistoryRecord>,
}

impl MemoryHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record appended so far, regardless of user.
    #[must_use]
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}

impl HistorySink for MemoryHistory {
    fn append(&mut self, record: &HistoryRecord) -> io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn list_by_user(&self, user: &str) -> io::Result<Vec<HistoryRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.user == user)
            .cloned()
            .collect())
    }
}
