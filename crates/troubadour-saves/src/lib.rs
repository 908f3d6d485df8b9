//! Named saves and persistence for Troubadour.
//!
//! A [`SaveSet`] holds named [`Snapshot`]s of game state. Merging two sets
//! never changes a local save and never produces duplicate ids, so importing
//! the same file twice is harmless. Storage goes through the
//! [`KeyValueStore`] capability.

pub mod error;
pub mod set;
pub mod snapshot;
pub mod store;

pub use error::{SaveError, SaveResult};
pub use set::{DEFAULT_EXPORT_STEM, ExportFile, SaveEntry, SaveRow, SaveSet};
pub use snapshot::Snapshot;
pub use store::{KeyValueStore, MemoryStore, load_json, store_json};
