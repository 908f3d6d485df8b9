//! Story commands and their HTML.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use troubadour_text::{IdAllocator, Markup, Rendered, RichText, TextResult, html};

use crate::error::{StoryError, StoryResult};

/// Display format of page dividers.
pub const DIVIDER_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Something that can be shown in the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    /// Structured rich text, rendered with Markdown.
    Rich(RichText),
    /// Troubadown source.
    Markup(Markup),
}

impl Content {
    /// Render to HTML and tooltip bindings.
    pub fn render(&self, ids: &mut IdAllocator) -> TextResult<Rendered> {
        match self {
            Content::Rich(text) => text.render(ids, true),
            Content::Markup(markup) => markup.render(ids),
        }
    }
}

impl From<RichText> for Content {
    fn from(text: RichText) -> Self {
        Content::Rich(text)
    }
}

impl From<Markup> for Content {
    fn from(markup: Markup) -> Self {
        Content::Markup(markup)
    }
}

impl From<&str> for Content {
    fn from(source: &str) -> Self {
        Content::Markup(Markup::new(source))
    }
}

impl From<String> for Content {
    fn from(source: String) -> Self {
        Content::Markup(Markup::new(source))
    }
}

/// One entry in the story log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Show content.
    Display {
        /// What to show.
        content: Content,
    },
    /// Insert a dated page divider.
    NewPage {
        /// When the page was first started.
        timestamp: NaiveDateTime,
    },
    /// Show an image card.
    Image {
        /// Image location, used verbatim.
        url: String,
        /// Alternative text.
        alt: String,
    },
    /// A kind written by another build. Never produced, only decoded.
    #[serde(other)]
    Unrecognized,
}

impl Command {
    /// Render this command. `position` is reported if the command is unrecognized.
    pub(crate) fn render(&self, ids: &mut IdAllocator, position: usize) -> StoryResult<Rendered> {
        match self {
            Command::Display { content } => Ok(content.render(ids)?),
            Command::NewPage { timestamp } => Ok(Rendered::plain(format!(
                "<div class=\"divider\">{}</div>",
                timestamp.format(DIVIDER_FORMAT)
            ))),
            Command::Image { url, alt } => Ok(Rendered::plain(image_card(
                &ids.element_id("image"),
                url,
                alt,
            ))),
            Command::Unrecognized => Err(StoryError::UnrecognizedCommand { position }),
        }
    }
}

fn image_card(id: &str, url: &str, alt: &str) -> String {
    format!(
        "<div class=\"card\"><div class=\"card-image\"><figure class=\"image\">\
         <img id=\"{}\" src=\"{}\" alt=\"{}\"></figure></div></div>",
        html::escape_attr(id),
        html::escape_attr(url),
        html::escape_attr(alt)
    )
}
