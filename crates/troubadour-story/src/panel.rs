//! Side panels: two text panels and the porthole image.

use serde::{Deserialize, Serialize};
use troubadour_text::{Rendered, RichText};

use crate::error::StoryResult;
use crate::presenter::Presenter;
use crate::region;
use crate::sink::RenderSink;

/// A titled text panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoPanel {
    /// Heading, rendered inline.
    #[serde(default)]
    pub title: Option<RichText>,
    /// Body, rendered with Markdown.
    #[serde(default)]
    pub text: RichText,
}

impl InfoPanel {
    /// Panel with a body and no title.
    pub fn new(text: impl Into<RichText>) -> Self {
        Self {
            title: None,
            text: text.into(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<RichText>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn render<S: RenderSink>(
        &self,
        out: &mut Presenter<S>,
        title_region: &str,
        content_region: &str,
    ) -> StoryResult<()> {
        let title = match &self.title {
            Some(title) => out.render(title, false)?,
            None => Rendered::default(),
        };
        let text = out.render(&self.text, true)?;
        out.replace(title_region, title);
        out.replace(content_region, text);
        Ok(())
    }
}

/// An image shown beside the story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePanel {
    /// Image location, used verbatim.
    pub url: String,
    /// Alternative text.
    pub alt: String,
}

impl ImagePanel {
    /// Panel showing `url`.
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}

/// Every panel a session shows besides the story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panels {
    /// Main info panel.
    #[serde(default)]
    pub info: InfoPanel,
    /// Secondary info panel.
    #[serde(default)]
    pub extra: InfoPanel,
    /// Porthole image.
    #[serde(default)]
    pub porthole: ImagePanel,
}

impl Panels {
    /// Write every panel to its regions, replacing what was there.
    pub fn render<S: RenderSink>(&self, out: &mut Presenter<S>) -> StoryResult<()> {
        self.info
            .render(out, region::INFO_TITLE, region::INFO_CONTENT)?;
        self.extra
            .render(out, region::EXTRA_TITLE, region::EXTRA_CONTENT)?;
        out.set_attribute(region::PORTHOLE, "src", &self.porthole.url);
        out.set_attribute(region::PORTHOLE, "alt", &self.porthole.alt);
        Ok(())
    }
}
