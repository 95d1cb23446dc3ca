//! Error types for the game engine.

use thiserror::Error;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while building tables or playing rounds.
#[derive(Debug, Error)]
pub enum GameError {
    /// Raw input did not normalize to any known choice.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// The game mode is zero or unparseable.
    #[error("invalid game mode: {0}")]
    InvalidMode(String),

    /// A shorthand or rules table failed validation at build time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A round was played after the match was already decided.
    #[error("match already decided")]
    MatchOver,

    /// A message key is not present in the catalog.
    #[error("unknown message key: {0}")]
    UnknownMessage(String),
}
