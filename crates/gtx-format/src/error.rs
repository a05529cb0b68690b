//! Error types for gtx-format

use gtx_schema::{Rejection, type_name};
use serde_json::Value;

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort formatting of a configuration subtree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value does not have the shape its formatter requires.
    #[error("Expected {expected} at '{path}', found {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The validator rejected a configuration.
    #[error("{message}")]
    InvalidConfiguration { message: String },

    #[error("'{code}' is not a valid language code.")]
    InvalidLanguageCode { code: String },
}

impl Error {
    pub fn type_mismatch(path: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
            actual: type_name(found),
        }
    }

    /// Whether the error reports an invalid configuration rather than a
    /// malformed argument.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. } | Self::InvalidLanguageCode { .. }
        )
    }
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        Self::InvalidConfiguration {
            message: rejection.message,
        }
    }
}
