//! Error types for todosync-fs

use std::path::PathBuf;

/// Result type for todosync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in todosync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Failed to parse profile at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
