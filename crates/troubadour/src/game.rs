//! The trait a game implements, and the page it writes to.

use serde::Serialize;
use serde::de::DeserializeOwned;
use troubadour_story::{Content, ImagePanel, InfoPanel, Panels, Presenter, RenderSink, Story};

use crate::error::TroubadourResult;
use crate::interface::Input;

/// A game: named pages that write to the story and return the inputs to show next.
///
/// The game value is serialized into every save, so all of its progress must
/// live in its fields.
pub trait Game: Clone + Serialize + DeserializeOwned {
    /// Run the page `method`. `value` carries the text of a submitted input.
    ///
    /// Report a name the game does not know as
    /// [`TroubadourError::UnknownMethod`](crate::TroubadourError::UnknownMethod).
    fn call<S: RenderSink>(
        &mut self,
        method: &str,
        value: Option<&str>,
        page: &mut Page<'_, S>,
    ) -> TroubadourResult<Vec<Input>>;
}

/// What a running page may change.
pub struct Page<'a, S> {
    story: &'a mut Story,
    panels: &'a mut Panels,
    out: &'a mut Presenter<S>,
}

impl<'a, S: RenderSink> Page<'a, S> {
    /// Borrow the parts of a session a page writes to.
    pub fn new(
        story: &'a mut Story,
        panels: &'a mut Panels,
        out: &'a mut Presenter<S>,
    ) -> Self {
        Self { story, panels, out }
    }

    /// Show content in the story. Plain strings are read as troubadown.
    pub fn display(&mut self, content: impl Into<Content>) -> TroubadourResult<()> {
        Ok(self.story.display(content, self.out)?)
    }

    /// Start a new page.
    pub fn newpage(&mut self) -> TroubadourResult<()> {
        Ok(self.story.newpage(self.out)?)
    }

    /// Show an image in the story.
    pub fn image(&mut self, url: impl Into<String>, alt: impl Into<String>) -> TroubadourResult<()> {
        Ok(self.story.image(url, alt, self.out)?)
    }

    /// The main info panel.
    pub fn info(&mut self) -> &mut InfoPanel {
        &mut self.panels.info
    }

    /// The secondary info panel.
    pub fn extra(&mut self) -> &mut InfoPanel {
        &mut self.panels.extra
    }

    /// The porthole image.
    pub fn porthole(&mut self) -> &mut ImagePanel {
        &mut self.panels.porthole
    }
}
