//! redb-based client state storage
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `client_state` | blob key | JSON bytes | Settings/history/credential blobs |
//!
//! Keys match the original localStorage keys (`pos-settings`, `pos-history`,
//! `groq-api-key`) so blobs stay recognizable across the migration. Values
//! are opaque JSON, no versioning or migration logic.

use std::collections::HashMap;
use std::path::Path;

use parking_lot::Mutex;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use thiserror::Error;

use shared::{Settings, Transaction};

/// Table for client state blobs: key = blob name, value = JSON bytes
const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("client_state");

const SETTINGS_KEY: &str = "pos-settings";
const HISTORY_KEY: &str = "pos-history";
const API_KEY_KEY: &str = "groq-api-key";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Injected persistence port for session state
///
/// The session never touches storage directly; persistence is a
/// side-effect port so tests can run fully in memory.
pub trait StateStore: Send + Sync {
    fn load_settings(&self) -> Result<Option<Settings>, StorageError>;
    fn save_settings(&self, settings: &Settings) -> Result<(), StorageError>;

    fn load_history(&self) -> Result<Vec<Transaction>, StorageError>;
    fn save_history(&self, history: &[Transaction]) -> Result<(), StorageError>;

    fn load_api_key(&self) -> Result<Option<String>, StorageError>;
    fn save_api_key(&self, key: &str) -> Result<(), StorageError>;
}

/// redb-backed store
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open (or create) the state database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path)?;
        Ok(Self { db })
    }

    fn read_blob(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(STATE_TABLE) {
            Ok(t) => t,
            // First open before any write: the table does not exist yet
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(table.get(key)?.map(|v| v.value().to_vec()))
    }

    fn write_blob(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }
}

impl StateStore for RedbStore {
    fn load_settings(&self) -> Result<Option<Settings>, StorageError> {
        match self.read_blob(SETTINGS_KEY)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        self.write_blob(SETTINGS_KEY, &serde_json::to_vec(settings)?)
    }

    fn load_history(&self) -> Result<Vec<Transaction>, StorageError> {
        match self.read_blob(HISTORY_KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(vec![]),
        }
    }

    fn save_history(&self, history: &[Transaction]) -> Result<(), StorageError> {
        self.write_blob(HISTORY_KEY, &serde_json::to_vec(history)?)
    }

    fn load_api_key(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .read_blob(API_KEY_KEY)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn save_api_key(&self, key: &str) -> Result<(), StorageError> {
        self.write_blob(API_KEY_KEY, key.as_bytes())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, key: &str) -> Option<Vec<u8>> {
        self.blobs.lock().get(key).cloned()
    }

    fn write(&self, key: &str, value: Vec<u8>) {
        self.blobs.lock().insert(key.to_string(), value);
    }
}

impl StateStore for MemoryStore {
    fn load_settings(&self) -> Result<Option<Settings>, StorageError> {
        match self.read(SETTINGS_KEY) {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        self.write(SETTINGS_KEY, serde_json::to_vec(settings)?);
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<Transaction>, StorageError> {
        match self.read(HISTORY_KEY) {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(vec![]),
        }
    }

    fn save_history(&self, history: &[Transaction]) -> Result<(), StorageError> {
        self.write(HISTORY_KEY, serde_json::to_vec(history)?);
        Ok(())
    }

    fn load_api_key(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .read(API_KEY_KEY)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn save_api_key(&self, key: &str) -> Result<(), StorageError> {
        self.write(API_KEY_KEY, key.as_bytes().to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redb_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("state.redb")).unwrap();

        // Empty store: defaults
        assert!(store.load_settings().unwrap().is_none());
        assert!(store.load_history().unwrap().is_empty());
        assert!(store.load_api_key().unwrap().is_none());

        let settings = Settings {
            dark_mode: true,
            ..Settings::default()
        };
        store.save_settings(&settings).unwrap();
        assert_eq!(store.load_settings().unwrap(), Some(settings));

        store.save_api_key("gsk_test").unwrap();
        assert_eq!(store.load_api_key().unwrap().as_deref(), Some("gsk_test"));
    }

    #[test]
    fn test_redb_store_persists_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.redb");

        let tx = Transaction::from_cart(&[shared::CartLine::new("Nasi Putih", 2, 4000)]);
        {
            let store = RedbStore::open(&path).unwrap();
            store.save_history(&[tx.clone()]).unwrap();
        }

        // Reopen and read back
        let store = RedbStore::open(&path).unwrap();
        let history = store.load_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].total, 8000);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load_settings().unwrap().is_none());

        let settings = Settings::default();
        store.save_settings(&settings).unwrap();
        assert_eq!(store.load_settings().unwrap(), Some(settings));
    }
}
