//! StorageBackend port - abstraction over raw key-value persistence.
//!
//! The ledger only ever exchanges whole JSON documents as strings with its
//! backend; everything typed lives above this seam. Implemented by the
//! infrastructure layer.

use thiserror::Error;

use crate::domain::value_objects::CollectionKey;

/// Raw storage failures.
///
/// The ledger catches and logs these at its boundary rather than
/// propagating them to callers; the in-memory state stays authoritative for
/// the session.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read '{key}': {source}")]
    Read {
        key: CollectionKey,
        source: std::io::Error,
    },

    #[error("failed to write '{key}': {source}")]
    Write {
        key: CollectionKey,
        source: std::io::Error,
    },

    /// The backend refused the write outright (the quota-exceeded case).
    #[error("storage is full")]
    Full,
}

/// Abstract raw document storage.
pub trait StorageBackend {
    /// Read the raw document stored under `key`, if any.
    fn read_raw(&self, key: CollectionKey) -> Result<Option<String>, StorageError>;

    /// Write `raw` under `key`, replacing any prior document.
    fn write_raw(&mut self, key: CollectionKey, raw: &str) -> Result<(), StorageError>;
}
