//! Session runtime for Troubadour interactive fiction.
//!
//! A game implements [`Game`]: a set of named pages, each of which writes to
//! the story through a [`Page`] and returns the [`Input`]s to offer next. A
//! [`Session`] runs those pages against a [`RenderSink`](troubadour_story::RenderSink)
//! and a [`KeyValueStore`](troubadour_saves::KeyValueStore), persisting the
//! state after every page so it can be resumed, saved and loaded.

pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod interface;
pub mod session;
pub mod state;

pub use color::ColorMode;
pub use config::TroubadourConfig;
pub use error::{TroubadourError, TroubadourResult};
pub use game::{Game, Page};
pub use interface::{Action, Actions, Input};
pub use session::{Launch, Session};
pub use state::GameState;
