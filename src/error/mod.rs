//! Error handling for the gradebook.
//!
//! The entity models never fail: rejected updates are logged and dropped.
//! Errors only come from the session controller and from loading
//! configuration.

pub mod util;

use std::io;
use std::path::Path;

/// Specialized error type for the gradebook
#[derive(Debug, thiserror::Error)]
pub enum GradebookError {
    /// A student was already created in this session
    #[error("A student has already been created for this session")]
    StudentAlreadyCreated,

    /// An operation needs a student but none was created yet
    #[error("No student has been created yet")]
    NoStudent,

    /// The age entered for a new student is unusable
    #[error("Invalid age: {0}")]
    InvalidAge(String),

    /// A course name appears more than once in a course list
    #[error("Course '{0}' is listed more than once")]
    DuplicateCourse(String),

    /// Configuration could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error opening or reading a file
    #[error("IO error: {message}")]
    Io {
        /// What went wrong, with the path involved
        message: String,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error reading or writing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GradebookError {
    /// Create an IO error from a message and its cause
    pub fn io_error_with_source(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an IO error for `path` with the given kind
    pub fn io_error(kind: io::ErrorKind, message: impl Into<String>, path: &Path) -> Self {
        let message = message.into();
        Self::Io {
            message: format!("{message}: {}", path.display()),
            source: io::Error::new(kind, message),
        }
    }

    /// Append context to the error message, where the variant carries one
    #[must_use]
    pub fn context(self, context: impl AsRef<str>) -> Self {
        match self {
            Self::Io { message, source } => Self::Io {
                message: format!("{message} ({})", context.as_ref()),
                source,
            },
            Self::InvalidConfig(message) => {
                Self::InvalidConfig(format!("{message} ({})", context.as_ref()))
            }
            other => other,
        }
    }
}

impl From<io::Error> for GradebookError {
    fn from(error: io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            source: error,
        }
    }
}

/// Result type for gradebook operations
pub type Result<T> = std::result::Result<T, GradebookError>;
