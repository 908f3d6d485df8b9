//! Names of the presentation regions the runtime writes into.

/// Scrolling story output.
pub const STORY: &str = "story";
/// Buttons and inputs for the current page.
pub const STORY_INTERFACE: &str = "story-interface";
/// Element carrying the color mode attribute.
pub const STORY_CONTAINER: &str = "story-container";
/// Info panel title.
pub const INFO_TITLE: &str = "info-title";
/// Info panel body.
pub const INFO_CONTENT: &str = "info-content";
/// Extra panel title.
pub const EXTRA_TITLE: &str = "extra-title";
/// Extra panel body.
pub const EXTRA_CONTENT: &str = "extra-content";
/// Porthole image.
pub const PORTHOLE: &str = "porthole";
/// Table listing named saves.
pub const SAVES_TABLE: &str = "saves-table";
