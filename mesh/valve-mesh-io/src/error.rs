//! Error types for mesh export and re-import.

use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while writing or re-reading mesh files.
#[derive(Debug, Error)]
pub enum IoError {
    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// A coordinate field failed to parse as a float.
    #[error("malformed number: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Convenience constructor for content errors.
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
