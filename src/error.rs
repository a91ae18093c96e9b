//! Error types for path operations

use thiserror::Error;

/// The error type for path operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A caller-supplied argument cannot be applied to the path
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The host environment cannot supply a required value
    #[error("Environment unavailable: cannot determine {what}: {message}")]
    EnvironmentUnavailable { what: String, message: String },

    /// The path does not start with the given base
    #[error("{path:?} is not relative to {base:?}")]
    NotRelative { path: String, base: String },

    /// I/O error from a filesystem-touching operation
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl PathError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PathError::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn unavailable(what: &str, message: impl Into<String>) -> Self {
        PathError::EnvironmentUnavailable {
            what: what.to_string(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for path operations
pub type Result<T> = std::result::Result<T, PathError>;
