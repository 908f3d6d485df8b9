//! Error types for the session runtime.

use thiserror::Error;
use troubadour_saves::SaveError;
use troubadour_story::StoryError;

/// Result type for session operations.
pub type TroubadourResult<T> = Result<T, TroubadourError>;

/// Errors that can occur while running a game session.
#[derive(Debug, Error)]
pub enum TroubadourError {
    /// Story rendering or replay failed.
    #[error("{0}")]
    Story(#[from] StoryError),

    /// Save handling or persistence failed.
    #[error("{0}")]
    Save(#[from] SaveError),

    /// The game has no page with this name.
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// No action is registered for this element.
    #[error("unknown element: {0}")]
    UnknownElement(String),

    /// There is no game state to act on.
    #[error("no game state")]
    NoState,

    /// A failure reported by the game itself.
    #[error("{0}")]
    Game(String),
}
