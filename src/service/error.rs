//! Error types for command handlers.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Error type for command handler operations.
#[derive(Debug)]
pub enum HandlerError {
    /// No handler registered for this command name.
    UnknownCommand(String),
    /// Payload decode / deserialization failed.
    DecodeFailed(String),
    /// Validation or invariant failure (bad field value, duplicate entry,
    /// page beyond the book's page count).
    Invalid(String),
    /// A referenced record does not exist.
    NotFound(String),
    /// Guard rejected the command (input shape validation failed).
    GuardRejected(String),
    /// Store error (filesystem, serialization).
    Store(StoreError),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::UnknownCommand(name) => write!(f, "unknown command: {}", name),
            HandlerError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            HandlerError::Invalid(msg) => write!(f, "invalid input: {}", msg),
            HandlerError::NotFound(what) => write!(f, "not found: {}", what),
            HandlerError::GuardRejected(name) => {
                write!(f, "guard rejected command: {}", name)
            }
            HandlerError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Store(err)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP status code.
    ///
    /// 400 for anything the caller got wrong in the body, 404 for a
    /// missing command or reference, 500 for store failures.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownCommand(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::Invalid(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::GuardRejected(_) => 400,
            HandlerError::Store(_) => 500,
        }
    }
}
