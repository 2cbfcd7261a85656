//! Error types for the fiction engine.

use mansion_core::CoreError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during a game session.
///
/// Mistakes the player can recover from (a wrong direction, a missing item,
/// a wrong guess) are answered with narrative text, not errors.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Input that matches no command.
    #[error("Unknown command '{0}'. Type 'help' for a list of actions.")]
    UnknownCommand(String),

    /// The session has already been won, lost, or quit.
    #[error("the game is over")]
    SessionOver,

    /// The room graph is missing something the game relies on.
    #[error("world error: {0}")]
    Core(#[from] CoreError),
}
