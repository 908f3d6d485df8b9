//! Story log, presentation capability and side panels for Troubadour.
//!
//! A [`Story`] records every visible change as a [`Command`] and renders it
//! through a [`Presenter`] into a [`RenderSink`]. Because the log is plain
//! data, a saved story can be shown again with [`Story::replay`].

pub mod command;
pub mod error;
pub mod panel;
pub mod presenter;
pub mod region;
pub mod sink;
pub mod story;

pub use command::{Command, Content};
pub use error::{StoryError, StoryResult};
pub use panel::{ImagePanel, InfoPanel, Panels};
pub use presenter::Presenter;
pub use sink::{MemorySink, RenderSink, SinkEvent};
pub use story::Story;
