//! Error types for the moodbar chat engine.

/// Top-level error type for the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Rejected user input (empty or oversized message).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Emotion scoring produced an unusable result.
    #[error("scoring error: {0}")]
    Scoring(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Conversation log storage error.
    #[error("log error: {0}")]
    Log(#[from] crate::conversation_log::LogError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ChatError>;
