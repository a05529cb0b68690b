//! Error types for gtx-schema

/// Outcome of a validation predicate.
pub type Verdict = std::result::Result<(), Rejection>;

/// A configuration rejected by a [`Validator`](crate::Validator).
///
/// The message is surfaced to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Rejection {
    pub message: String,
}

impl Rejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Return early with a [`Rejection`] built from a format string.
macro_rules! reject {
    ($($arg:tt)*) => {
        return Err($crate::error::Rejection::new(format!($($arg)*)))
    };
}

pub(crate) use reject;
