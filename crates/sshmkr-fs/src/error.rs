//! Error types for sshmkr-fs

use std::path::PathBuf;

/// Result type for sshmkr-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sshmkr-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Cannot determine the current user's home directory")]
    HomeNotFound,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
