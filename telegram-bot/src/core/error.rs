//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error for the bot (transport, handler).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced by handlers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_converts_into_dbot_error() {
        let err: DbotError = HandlerError::InvalidCommand("nope".to_string()).into();
        assert_eq!(err.to_string(), "Handler error: Invalid command: nope");
    }
}
