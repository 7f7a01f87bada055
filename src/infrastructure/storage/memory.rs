//! In-memory storage backend.
//!
//! Used by tests and as a scratch ledger; `failing()` simulates a backend
//! that rejects every write, the local-storage quota-exceeded case.

use std::collections::HashMap;

use crate::domain::ports::{StorageBackend, StorageError};
use crate::domain::value_objects::CollectionKey;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: HashMap<CollectionKey, String>,
    reject_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that refuses every write with [`StorageError::Full`].
    pub fn failing() -> Self {
        MemoryStorage {
            documents: HashMap::new(),
            reject_writes: true,
        }
    }

    /// Raw document under `key`, if any. Test hook.
    pub fn raw(&self, key: CollectionKey) -> Option<&str> {
        self.documents.get(&key).map(String::as_str)
    }
}

impl StorageBackend for MemoryStorage {
    fn read_raw(&self, key: CollectionKey) -> Result<Option<String>, StorageError> {
        Ok(self.documents.get(&key).cloned())
    }

    fn write_raw(&mut self, key: CollectionKey, raw: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Full);
        }
        self.documents.insert(key, raw.to_string());
        Ok(())
    }
}
