//! Light and dark presentation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute set on the story container to select a theme.
pub const COLOR_MODE_ATTRIBUTE: &str = "data-color-mode";

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ColorMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
