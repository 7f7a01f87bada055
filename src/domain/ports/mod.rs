//! Ports: traits the domain needs the outside world to implement.

mod storage;

pub use storage::{StorageBackend, StorageError};
