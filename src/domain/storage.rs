use crate::domain::GameRecord;
use crate::error::Result;
use std::collections::HashSet;

/// The persisted game ledger. Implementations are append-only: rows
/// already written are never rewritten or reordered, and a missing
/// backing file reads as an empty ledger.
pub trait Ledger: Send + Sync {
    /// URL values of every stored record, for membership testing.
    fn load_known_urls(&self) -> Result<HashSet<String>>;
    /// All stored records in insertion order.
    fn load_records(&self) -> Result<Vec<GameRecord>>;
    /// Appends rows after the existing ones. An empty slice writes nothing.
    fn append(&self, records: &[GameRecord]) -> Result<()>;
}
