//! Error types for the story log.

use thiserror::Error;
use troubadour_text::TextError;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while issuing or replaying story commands.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Rendering the command's text failed.
    #[error("{0}")]
    Text(#[from] TextError),

    /// The history holds a command kind this build does not know.
    #[error("unrecognized command at history position {position}")]
    UnrecognizedCommand {
        /// Index in the stored (most-recent-first) history.
        position: usize,
    },
}
