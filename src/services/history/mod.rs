//! History sinks for appending scan summaries without the core caring where
//! they land.

use crate::models::HistoryRecord;
use std::io;

/// Append-only store of past scan summaries, keyed by user.
///
/// Implementations must not lose or reorder records under serialized
/// single-writer access; `list_by_user` returns records in insertion order.
pub trait HistorySink: Send {
    /// Append one record. Called once per completed scan, after the full
    /// summary is computed.
    fn append(&mut self, record: &HistoryRecord) -> io::Result<()>;

    /// All records for a user, oldest first.
    fn list_by_user(&self, user: &str) -> io::Result<Vec<HistoryRecord>>;
}

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonlHistory;
pub use memory::MemoryHistory;
