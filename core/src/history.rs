//! Rolling translation history.
//!
//! Keeps the most recent successful translations, newest first, with at most
//! `limit` entries. Recording an `(input, output)` pair that is already present
//! moves it to the front with a fresh timestamp instead of duplicating it.
//!
//! Two backends are provided, selected through the `History` enum:
//! - `InMemory`: thread-safe list used for tests and `--no-history` runs.
//! - `Redb`: the whole list is stored as one bincode value under a fixed key in
//!   a `redb` database, so it survives between runs.
use chrono::{DateTime, Utc};
use redb::ReadableTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading or writing the persistent history.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("history transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("history table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("history storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("history commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("corrupt history value: {0}")]
    Decode(#[from] bincode::Error),

    #[error("history export failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// One successful translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Input as the user typed it (trimmed, case preserved)
    pub input: String,
    /// Rendered Kibembe phrase
    pub output: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Create a record stamped with the current time.
    pub fn new<I: Into<String>, O: Into<String>>(input: I, output: O) -> Self {
        Self::with_timestamp(input, output, Utc::now())
    }

    pub fn with_timestamp<I: Into<String>, O: Into<String>>(
        input: I,
        output: O,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            timestamp,
        }
    }

    fn same_translation(&self, other: &HistoryRecord) -> bool {
        self.input == other.input && self.output == other.output
    }
}

/// Insert `record` at the front, dropping any earlier copy and the overflow.
fn push_front(records: &mut Vec<HistoryRecord>, record: HistoryRecord, limit: usize) {
    if let Some(idx) = records.iter().position(|r| r.same_translation(&record)) {
        records.remove(idx);
    }
    records.insert(0, record);
    records.truncate(limit);
}

/// A thread-safe in-memory history.
#[derive(Clone, Debug)]
pub struct InMemoryHistory {
    inner: Arc<RwLock<Vec<HistoryRecord>>>,
    limit: usize,
}

impl InMemoryHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
            limit,
        }
    }

    pub fn record(&self, record: HistoryRecord) {
        if let Ok(mut list) = self.inner.write() {
            push_front(&mut list, record, self.limit);
        }
    }

    pub fn entries(&self) -> Vec<HistoryRecord> {
        if let Ok(list) = self.inner.read() {
            list.clone()
        } else {
            Vec::new()
        }
    }

    pub fn clear(&self) {
        if let Ok(mut list) = self.inner.write() {
            list.clear();
        }
    }
}

/// Redb-backed history.
///
/// The full list lives under a single key, so every mutation is one
/// read-modify-write inside a single write transaction.
#[derive(Clone)]
pub struct RedbHistory {
    db: Arc<redb::Database>,
    key: String,
    limit: usize,
    path: PathBuf,
}

impl std::fmt::Debug for RedbHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbHistory")
            .field("path", &self.path)
            .field("key", &self.key)
            .field("limit", &self.limit)
            .finish()
    }
}

impl RedbHistory {
    /// Keys are the history key, values the bincode-encoded record list.
    const TABLE_DEF: redb::TableDefinition<'static, &'static str, &'static [u8]> =
        redb::TableDefinition::new("history");

    /// Create or open a redb database at `path`.
    pub fn open<P: AsRef<Path>>(path: P, key: &str, limit: usize) -> Result<Self, HistoryError> {
        if let Some(parent) = path.as_ref().parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let db = redb::Database::create(path.as_ref())?;
        debug!(path = %path.as_ref().display(), key, limit, "opened history database");
        Ok(Self {
            db: Arc::new(db),
            key: key.to_string(),
            limit,
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(Self::TABLE_DEF)?;
            let stored = table.get(self.key.as_str())?.map(|v| v.value().to_vec());
            let mut records: Vec<HistoryRecord> = match stored {
                Some(bytes) => bincode::deserialize(&bytes)?,
                None => Vec::new(),
            };
            push_front(&mut records, record, self.limit);
            let bytes = bincode::serialize(&records)?;
            table.insert(self.key.as_str(), bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn entries(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(Self::TABLE_DEF) {
            Ok(table) => table,
            // nothing recorded yet
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        match table.get(self.key.as_str())? {
            Some(value) => Ok(bincode::deserialize(value.value())?),
            None => Ok(Vec::new()),
        }
    }

    pub fn clear(&self) -> Result<(), HistoryError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(Self::TABLE_DEF)?;
            table.remove(self.key.as_str())?;
        }
        write_txn.commit()?;
        debug!(path = %self.path.display(), "cleared history");
        Ok(())
    }
}

/// Backend switch used by higher-level code.
#[derive(Clone, Debug)]
pub enum History {
    InMemory(InMemoryHistory),
    Redb(RedbHistory),
}

impl History {
    /// Construct an empty in-memory history.
    pub fn new_in_memory(limit: usize) -> Self {
        History::InMemory(InMemoryHistory::new(limit))
    }

    /// Open (or create) a persistent history at `path`, stored under `key`.
    pub fn open_redb<P: AsRef<Path>>(path: P, key: &str, limit: usize) -> Result<Self, HistoryError> {
        Ok(History::Redb(RedbHistory::open(path, key, limit)?))
    }

    /// Record a successful translation at the front of the history.
    pub fn record(&self, input: &str, output: &str) -> Result<(), HistoryError> {
        self.push(HistoryRecord::new(input, output))
    }

    /// Record a prepared entry (keeps its timestamp).
    pub fn push(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        match self {
            History::InMemory(m) => {
                m.record(record);
                Ok(())
            }
            History::Redb(r) => r.record(record),
        }
    }

    /// All records, most recent first.
    pub fn entries(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        match self {
            History::InMemory(m) => Ok(m.entries()),
            History::Redb(r) => r.entries(),
        }
    }

    pub fn clear(&self) -> Result<(), HistoryError> {
        match self {
            History::InMemory(m) => {
                m.clear();
                Ok(())
            }
            History::Redb(r) => r.clear(),
        }
    }

    /// Pretty JSON array of the records, most recent first.
    pub fn export_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string_pretty(&self.entries()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn newest_first() {
        let h = History::new_in_memory(10);
        h.record("1", "emo").unwrap();
        h.record("2", "abele").unwrap();
        let inputs: Vec<String> = h.entries().unwrap().into_iter().map(|r| r.input).collect();
        assert_eq!(inputs, vec!["2", "1"]);
    }

    #[test]
    fn repeated_pair_moves_to_front() {
        let h = History::new_in_memory(10);
        h.push(HistoryRecord::with_timestamp("1", "emo", at(1))).unwrap();
        h.push(HistoryRecord::with_timestamp("2", "abele", at(2))).unwrap();
        h.push(HistoryRecord::with_timestamp("1", "emo", at(3))).unwrap();

        let entries = h.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].input, "1");
        assert_eq!(entries[0].timestamp, at(3));
        assert_eq!(entries[1].input, "2");
    }

    #[test]
    fn same_input_different_output_is_kept() {
        let mut list = Vec::new();
        push_front(&mut list, HistoryRecord::new("x", "a"), 10);
        push_front(&mut list, HistoryRecord::new("x", "b"), 10);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn limit_drops_oldest() {
        let h = History::new_in_memory(3);
        for i in 0..5 {
            h.record(&i.to_string(), "out").unwrap();
        }
        let inputs: Vec<String> = h.entries().unwrap().into_iter().map(|r| r.input).collect();
        assert_eq!(inputs, vec!["4", "3", "2"]);
    }

    #[test]
    fn clear_empties() {
        let h = History::new_in_memory(10);
        h.record("5", "etanɔ").unwrap();
        h.clear().unwrap();
        assert!(h.entries().unwrap().is_empty());
    }

    #[test]
    fn redb_record_then_read_back() {
        let path = std::env::temp_dir().join(format!(
            "kibembe_core_redb_unit_{}.redb",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let r = RedbHistory::open(&path, "k", 10).unwrap();
        assert!(r.entries().unwrap().is_empty());
        r.record(HistoryRecord::new("1", "emo")).unwrap();
        r.record(HistoryRecord::new("2", "abele")).unwrap();
        let inputs: Vec<String> = r.entries().unwrap().into_iter().map(|e| e.input).collect();
        assert_eq!(inputs, vec!["2", "1"]);
        drop(r);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn export_json_contains_fields() {
        let h = History::new_in_memory(10);
        h.record("23", "ikana abele na asatu").unwrap();
        let json = h.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["input"], "23");
        assert_eq!(value[0]["output"], "ikana abele na asatu");
        assert!(value[0]["timestamp"].is_string());
    }
}
