//! Error types for gtx-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that abort formatting of one project
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gtx-format
    #[error(transparent)]
    Format(#[from] gtx_format::Error),

    /// Error from gtx-fs
    #[error(transparent)]
    Fs(#[from] gtx_fs::Error),
}
