//! Immutable, composable rich text templates.
//!
//! A [`RichText`] is a format string plus the values substituted into it,
//! CSS classes for the rendered span, and an optional tooltip which is itself
//! rich text. Builders never modify the receiver; they return a new value.
//!
//! Rendering is depth-first: arguments are rendered (without Markdown) and
//! substituted first, then the node's own span and tooltip anchor are
//! attached, and only the outermost call applies the Markdown transform.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TextResult;
use crate::html;
use crate::id::{IdAllocator, TOOLTIP};
use crate::markdown;
use crate::template;

/// Anchor id → rendered tooltip HTML.
pub type TooltipTable = BTreeMap<String, String>;

/// Output of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// The rendered HTML fragment.
    pub html: String,
    /// Tooltip bodies keyed by the anchor ids that appear in `html`.
    pub tooltips: TooltipTable,
}

impl Rendered {
    /// Wrap already-final HTML that carries no tooltips.
    pub fn plain(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            tooltips: TooltipTable::new(),
        }
    }
}

/// A template node with classes, an optional tooltip and arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tooltip: Option<Box<RichText>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    named_args: Vec<(String, RichText)>,
}

impl RichText {
    /// Create rich text from a format string.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Rich text holding the `Display` form of any value.
    pub fn from_display(value: &impl fmt::Display) -> Self {
        Self::new(value.to_string())
    }

    /// The format string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// CSS classes applied to the rendered span.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The tooltip, if any.
    pub fn tooltip(&self) -> Option<&RichText> {
        self.tooltip.as_deref()
    }

    /// Positional arguments.
    pub fn args(&self) -> &[RichText] {
        &self.args
    }

    /// Named arguments in insertion order.
    pub fn named_args(&self) -> &[(String, RichText)] {
        &self.named_args
    }

    /// Look up a named argument.
    pub fn named_arg(&self, key: &str) -> Option<&RichText> {
        self.named_args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Append CSS classes.
    pub fn with_classes<I, C>(&self, classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let mut result = self.clone();
        result.classes.extend(classes.into_iter().map(Into::into));
        result
    }

    /// Attach (or replace) the tooltip.
    pub fn with_tooltip(&self, tooltip: impl Into<RichText>) -> Self {
        let mut result = self.clone();
        result.tooltip = Some(Box::new(tooltip.into()));
        result
    }

    /// Append positional arguments.
    pub fn with_args<I, A>(&self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<RichText>,
    {
        let mut result = self.clone();
        result.args.extend(args.into_iter().map(Into::into));
        result
    }

    /// Set a named argument. An existing key keeps its position.
    pub fn with_named_arg(&self, key: impl Into<String>, value: impl Into<RichText>) -> Self {
        let mut result = self.clone();
        result.set_named(key.into(), value.into());
        result
    }

    /// Set several named arguments at once.
    pub fn with_named_args<I, K, V>(&self, args: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RichText>,
    {
        let mut result = self.clone();
        for (key, value) in args {
            result.set_named(key.into(), value.into());
        }
        result
    }

    fn set_named(&mut self, key: String, value: RichText) {
        match self.named_args.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.named_args.push((key, value)),
        }
    }

    /// Render to HTML plus the tooltip table.
    ///
    /// Nested arguments are always rendered with `markdown = false`; tooltip
    /// bodies are always rendered with `markdown = true`.
    pub fn render(&self, ids: &mut IdAllocator, markdown: bool) -> TextResult<Rendered> {
        let mut tooltips = TooltipTable::new();

        let mut positional = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            let rendered = arg.render(ids, false)?;
            tooltips.extend(rendered.tooltips);
            positional.push(rendered.html);
        }

        let mut named = Vec::with_capacity(self.named_args.len());
        for (key, arg) in &self.named_args {
            let rendered = arg.render(ids, false)?;
            tooltips.extend(rendered.tooltips);
            named.push((key.clone(), rendered.html));
        }

        let body = template::substitute(&self.text, &positional, &named)?;

        let mut classes: Vec<&str> = Vec::with_capacity(self.classes.len() + 1);
        let anchor = match &self.tooltip {
            Some(tooltip) => {
                classes.push(TOOLTIP);
                let anchor = ids.tooltip_anchor();
                let rendered = tooltip.render(ids, true)?;
                tooltips.extend(rendered.tooltips);
                tooltips.insert(anchor.clone(), rendered.html);
                Some(anchor)
            }
            None => None,
        };
        classes.extend(self.classes.iter().map(String::as_str));

        let html = html::span(&classes, anchor.as_deref(), &body);
        let html = if markdown {
            markdown::to_html(&html)
        } else {
            html
        };

        Ok(Rendered { html, tooltips })
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&String> for RichText {
    fn from(text: &String) -> Self {
        Self::new(text.as_str())
    }
}

impl From<&RichText> for RichText {
    fn from(text: &RichText) -> Self {
        text.clone()
    }
}
