//! Error types shared by loggers and sinks.

use thiserror::Error;

/// Errors raised while constructing or using a logger.
#[derive(Debug, Error)]
pub enum LogError {
    /// A mandatory argument was absent at construction time.
    #[error("{0} must not be null")]
    NullArgument(&'static str),

    /// The sink failed to write or flush.
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure reported by a sink.
    #[error("sink error: {0}")]
    Sink(String),
}

impl LogError {
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}

/// Result type returned by every logging call.
pub type LogResult<T> = Result<T, LogError>;
