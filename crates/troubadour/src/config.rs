//! Configuration for a game session.

use troubadour_saves::DEFAULT_EXPORT_STEM;
use troubadour_saves::store::{COLOR_MODE_KEY, SAVES_KEY, STATE_KEY};

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct TroubadourConfig {
    /// Storage key of the current game state.
    pub state_key: String,
    /// Storage key of the save set.
    pub saves_key: String,
    /// Storage key of the color mode.
    pub color_mode_key: String,
    /// File name stem for exported saves.
    pub export_stem: String,
    /// First id handed out for anchors and elements.
    pub first_id: u64,
    /// Page run when a game starts.
    pub start_method: String,
}

impl Default for TroubadourConfig {
    fn default() -> Self {
        Self {
            state_key: STATE_KEY.to_string(),
            saves_key: SAVES_KEY.to_string(),
            color_mode_key: COLOR_MODE_KEY.to_string(),
            export_stem: DEFAULT_EXPORT_STEM.to_string(),
            first_id: 0,
            start_method: "start".to_string(),
        }
    }
}

impl TroubadourConfig {
    /// Set all three storage keys from a common prefix, as `<prefix>-state` etc.
    ///
    /// Lets several games share one store.
    pub fn with_key_prefix(mut self, prefix: &str) -> Self {
        self.state_key = format!("{prefix}-{STATE_KEY}");
        self.saves_key = format!("{prefix}-{SAVES_KEY}");
        self.color_mode_key = format!("{prefix}-{COLOR_MODE_KEY}");
        self
    }

    /// Set the state key.
    pub fn with_state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = key.into();
        self
    }

    /// Set the saves key.
    pub fn with_saves_key(mut self, key: impl Into<String>) -> Self {
        self.saves_key = key.into();
        self
    }

    /// Set the color mode key.
    pub fn with_color_mode_key(mut self, key: impl Into<String>) -> Self {
        self.color_mode_key = key.into();
        self
    }

    /// Set the export file name stem.
    pub fn with_export_stem(mut self, stem: impl Into<String>) -> Self {
        self.export_stem = stem.into();
        self
    }

    /// Set the first allocated id.
    pub fn with_first_id(mut self, first: u64) -> Self {
        self.first_id = first;
        self
    }

    /// Set the start page.
    pub fn with_start_method(mut self, method: impl Into<String>) -> Self {
        self.start_method = method.into();
        self
    }
}
