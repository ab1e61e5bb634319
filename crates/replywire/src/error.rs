//! Error types for TP client operations.

use std::io;
use std::sync::Arc;

/// Result type alias for TP client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// TP client error types.
///
/// The type is `Clone`: a [`TpClient`](crate::TpClient) latches the first
/// error it encounters and hands out a copy of it from every subsequent
/// operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// I/O error on the underlying connection.
    #[error("I/O error: {0}")]
    Io(Arc<io::Error>),

    /// Response line could not be parsed into a status code and a message
    /// token. Carries the offending line, empty on premature EOF.
    #[error("could not read response: {0:?}")]
    MalformedResponse(String),

    /// Server answered with a status code other than the expected one.
    #[error("{expected} response expected, got {actual} {text}")]
    UnexpectedStatus {
        /// Status code the caller expected.
        expected: u16,
        /// Status code the server actually sent.
        actual: u16,
        /// First token of the server's message.
        text: String,
    },
}

impl Error {
    /// Creates a malformed-response error for the given line.
    #[must_use]
    pub fn malformed(line: impl Into<String>) -> Self {
        Self::MalformedResponse(line.into())
    }

    /// Creates an unexpected-status error.
    #[must_use]
    pub fn unexpected(expected: u16, actual: u16, text: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            expected,
            actual,
            text: text.into(),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
