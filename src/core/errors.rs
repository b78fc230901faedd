//! Shared error types for the scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a scan. Extraction itself never fails; pattern
/// misses are silent no-ops, so only I/O and serialization surface here.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A file or directory could not be read. This is the one hard
    /// failure the core distinguishes; it propagates instead of being
    /// swallowed into an empty record.
    #[error("unreadable path {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// IO errors outside per-file reads (output writing, metadata)
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScanError {
    /// Wrap an I/O error from reading `path` as the distinct hard-failure kind.
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }
}
