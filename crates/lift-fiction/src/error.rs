//! Error types for the scene engine.

use thiserror::Error;

/// Result type for scene engine operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while playing a session.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The input does not match any option of the current scene.
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    /// The session already reached an ending or was quit.
    #[error("the session is over")]
    SessionOver,

    /// Reading, writing, or removing the save file failed.
    #[error("save file error: {0}")]
    Io(#[from] std::io::Error),

    /// The player state could not be encoded.
    #[error("save encoding error: {0}")]
    Serialize(#[from] serde_json::Error),
}
