//! The story log.
//!
//! Every visible story change is recorded as a [`Command`], so the whole
//! transcript can be rebuilt from saved state with [`Story::replay`].

use std::collections::VecDeque;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::{Command, Content};
use crate::error::{StoryError, StoryResult};
use crate::presenter::Presenter;
use crate::region;
use crate::sink::RenderSink;

/// Ordered record of story commands, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    history: VecDeque<Command>,
}

impl Story {
    /// Create an empty story.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, most recent first.
    pub fn history(&self) -> &VecDeque<Command> {
        &self.history
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Show content in the story.
    pub fn display<S: RenderSink>(
        &mut self,
        content: impl Into<Content>,
        out: &mut Presenter<S>,
    ) -> StoryResult<()> {
        self.issue(
            Command::Display {
                content: content.into(),
            },
            out,
        )
    }

    /// Start a new page, dated now.
    pub fn newpage<S: RenderSink>(&mut self, out: &mut Presenter<S>) -> StoryResult<()> {
        self.newpage_at(Local::now().naive_local(), out)
    }

    /// Start a new page with an explicit date.
    pub fn newpage_at<S: RenderSink>(
        &mut self,
        timestamp: NaiveDateTime,
        out: &mut Presenter<S>,
    ) -> StoryResult<()> {
        self.issue(Command::NewPage { timestamp }, out)
    }

    /// Show an image card.
    pub fn image<S: RenderSink>(
        &mut self,
        url: impl Into<String>,
        alt: impl Into<String>,
        out: &mut Presenter<S>,
    ) -> StoryResult<()> {
        self.issue(
            Command::Image {
                url: url.into(),
                alt: alt.into(),
            },
            out,
        )
    }

    /// Clear the story region and re-present every recorded command, oldest first.
    ///
    /// Every command is rendered before anything is written, so an unknown
    /// command or a failed render leaves both the story and the region
    /// untouched.
    pub fn replay<S: RenderSink>(&self, out: &mut Presenter<S>) -> StoryResult<()> {
        if let Some(position) = self
            .history
            .iter()
            .position(|c| matches!(c, Command::Unrecognized))
        {
            return Err(StoryError::UnrecognizedCommand { position });
        }

        let rendered = self
            .history
            .iter()
            .enumerate()
            .rev()
            .map(|(position, command)| command.render(out.ids(), position))
            .collect::<StoryResult<Vec<_>>>()?;

        debug!(commands = rendered.len(), "replaying story");
        out.clear(region::STORY);
        for entry in rendered {
            out.present(region::STORY, entry);
        }
        Ok(())
    }

    fn issue<S: RenderSink>(&mut self, command: Command, out: &mut Presenter<S>) -> StoryResult<()> {
        let rendered = command.render(out.ids(), 0)?;
        self.history.push_front(command);
        out.present(region::STORY, rendered);
        Ok(())
    }
}
