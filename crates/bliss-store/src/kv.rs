//! # Key-Value Store Abstraction
//!
//! The engine persists exactly two records (`catalog`, `ledger`) as whole
//! JSON documents. A trait keeps the storage mechanism swappable: the
//! shipped implementation is one JSON file per key, and tests use an
//! in-memory map.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreResult;

// =============================================================================
// KvStore Trait
// =============================================================================

/// Whole-document key-value storage.
///
/// Values are opaque strings to this layer; the record repositories
/// own the JSON shapes. `put` overwrites the full value for the key -
/// there are no partial updates, matching the write-through model.
pub trait KvStore {
    /// Reads the value for a key, `None` if the key has never been written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes (or overwrites) the value for a key.
    fn put(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

// =============================================================================
// JSON File Store
// =============================================================================

/// File-backed store: one `<key>.json` file per key under a data directory.
///
/// ## Durability Notes
/// Writes go to a sibling `.tmp` file first and are renamed into place,
/// so a crash mid-write leaves the previous record intact rather than a
/// truncated JSON document.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens (creating if needed) a store rooted at the given directory.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(JsonFileStore { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
