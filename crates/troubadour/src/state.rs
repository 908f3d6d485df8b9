//! Everything persisted about a running game.

use serde::{Deserialize, Serialize};
use troubadour_story::{Panels, Story};

use crate::interface::Input;

/// A game together with what it has shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState<G> {
    /// The game's own data.
    pub game: G,
    /// Story log.
    #[serde(default)]
    pub story: Story,
    /// Side panels.
    #[serde(default)]
    pub panels: Panels,
    /// Inputs currently offered.
    #[serde(default)]
    pub interface: Vec<Input>,
}

impl<G> GameState<G> {
    /// A game that has shown nothing yet.
    pub fn new(game: G) -> Self {
        Self {
            game,
            story: Story::new(),
            panels: Panels::default(),
            interface: Vec::new(),
        }
    }
}
