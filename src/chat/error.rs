//! Chat session error types

use thiserror::Error;

/// Errors that abort a chat session.
///
/// Exit commands, empty lines, undecodable bytes and end-of-input are normal
/// control flow and never surface here.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Reading from the input or writing to the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for chat operations
pub type ChatResult<T> = Result<T, ChatError>;
