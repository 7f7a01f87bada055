//! File-backed storage: one JSON document per collection key.
//!
//! Writes land in a temp file first and are renamed into place, so a crash
//! mid-write never leaves a half-written document behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::{StorageBackend, StorageError};
use crate::domain::value_objects::CollectionKey;
use crate::error::LedgerResult;

#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a data directory.
    pub fn open(root: impl Into<PathBuf>) -> LedgerResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(FileStorage { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: CollectionKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

impl StorageBackend for FileStorage {
    fn read_raw(&self, key: CollectionKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { key, source }),
        }
    }

    fn write_raw(&mut self, key: CollectionKey, raw: &str) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write { key, source };

        let mut tmp = NamedTempFile::new_in(&self.root).map_err(write_err)?;
        tmp.write_all(raw.as_bytes()).map_err(write_err)?;
        tmp.persist(self.path_for(key))
            .map_err(|err| write_err(err.error))?;
        Ok(())
    }
}
