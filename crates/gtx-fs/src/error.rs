//! Error types for gtx-fs

use std::path::PathBuf;

/// Result type for gtx-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur reading or writing a project directory
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON configuration at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to serialize the {document} configuration: {message}")]
    ConfigSerialize { document: String, message: String },

    #[error("The path '{path}' is not a directory.")]
    NotADirectory { path: PathBuf },

    #[error("The directory '{path}' contains no project configuration.")]
    NoConfiguration { path: PathBuf },

    #[error("The file '{path}' already exists and will not be overwritten.")]
    WouldOverwrite { path: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
