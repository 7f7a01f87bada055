//! Error types for SiteLedger
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow` at the
//! command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Lookup of a project id that is not in the store.
    ///
    /// Callers render an empty/placeholder state for this - it is never fatal.
    #[error("project not found: {id}")]
    ProjectNotFound { id: String },

    /// Config file exists but does not parse
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_project_not_found() {
        let err = LedgerError::ProjectNotFound {
            id: "8f14e45f-ceea-4b2a-8a70-17f564e75d3b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "project not found: 8f14e45f-ceea-4b2a-8a70-17f564e75d3b"
        );
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = LedgerError::InvalidConfig {
            path: PathBuf::from("config.toml"),
            message: "expected table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in config.toml: expected table"
        );
    }
}
