//! Error types for saves and persistence.

use thiserror::Error;

/// Result type for save operations.
pub type SaveResult<T> = Result<T, SaveError>;

/// Errors that can occur while encoding, decoding or looking up saves.
#[derive(Debug, Error)]
pub enum SaveError {
    /// A value could not be encoded as JSON.
    #[error("failed to serialize: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A blob did not have the expected shape.
    #[error("failed to deserialize: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// No save carries this id.
    #[error("no save with id {0}")]
    UnknownSave(u32),

    /// Two saves in one set carry the same id.
    #[error("duplicate save id {0}")]
    DuplicateId(u32),

    /// Every id up to `u32::MAX` is taken.
    #[error("no save ids left")]
    IdSpaceExhausted,
}
