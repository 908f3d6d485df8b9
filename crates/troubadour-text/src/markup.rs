//! Troubadown: inline markup for classes and tooltips.
//!
//! A span is written `|[name?][class:]body|`:
//!
//! - `|red:rabbit|`: class only
//! - `|?rabbit|`: anonymous tooltip
//! - `|lbl?red:rabbit|`: named tooltip plus class
//!
//! Spans do not nest. An unterminated `|` and everything outside spans is
//! copied through unchanged, so parsing never fails.

use std::collections::BTreeMap;
use std::fmt;

use logos::Logos;
use serde::{Deserialize, Serialize};

use crate::error::{TextError, TextResult};
use crate::html;
use crate::id::{IdAllocator, TOOLTIP};
use crate::markdown;
use crate::rich_text::{Rendered, RichText, TooltipTable};

/// How a tooltip span is referred to by the caller.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TooltipKey {
    /// The n-th anonymous tooltip span (`|?...|`), counting from 0.
    Index(usize),
    /// A named tooltip span (`|name?...|`).
    Name(String),
}

impl fmt::Display for TooltipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TooltipKey::Index(i) => write!(f, "#{i}"),
            TooltipKey::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Result of parsing troubadown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// HTML with spans substituted.
    pub html: String,
    /// Tooltip key → allocated anchor id.
    pub refs: BTreeMap<TooltipKey, String>,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"\|[^|]*\|")]
    Span,

    #[token("|")]
    Pipe,

    #[regex(r"[^|]+")]
    Text,
}

/// The decomposed inside of a `|...|` span.
#[derive(Debug, PartialEq, Eq)]
struct SpanParts<'a> {
    tooltip: Option<&'a str>,
    class: Option<&'a str>,
    body: &'a str,
}

/// Split off a leading ASCII alphanumeric run terminated by `delim`.
fn take_label(s: &str, delim: char) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(s.len());
    s[end..]
        .strip_prefix(delim)
        .map(|rest| (&s[..end], rest))
}

fn split_span(inner: &str) -> SpanParts<'_> {
    let (tooltip, rest) = match take_label(inner, '?') {
        Some((name, rest)) => (Some(name), rest),
        None => (None, inner),
    };
    let (class, body) = match take_label(rest, ':') {
        Some((class, body)) => (Some(class).filter(|c| !c.is_empty()), body),
        None => (None, rest),
    };
    SpanParts {
        tooltip,
        class,
        body,
    }
}

/// Parse troubadown into HTML, allocating one anchor per tooltip span.
pub fn parse(input: &str, ids: &mut IdAllocator) -> Parsed {
    let mut html_out = String::with_capacity(input.len());
    let mut refs = BTreeMap::new();
    let mut next_index = 0usize;
    let mut lexer = RawToken::lexer(input);

    while let Some(token) = lexer.next() {
        let slice = lexer.slice();
        match token {
            Ok(RawToken::Span) => {
                let parts = split_span(&slice[1..slice.len() - 1]);
                match parts.tooltip {
                    Some(name) => {
                        let anchor = ids.tooltip_anchor();
                        let mut classes = vec![TOOLTIP];
                        classes.extend(parts.class);
                        let span = html::span(&classes, Some(anchor.as_str()), parts.body);
                        html_out.push_str(&span);

                        let key = if name.is_empty() {
                            let key = TooltipKey::Index(next_index);
                            next_index += 1;
                            key
                        } else {
                            TooltipKey::Name(name.to_string())
                        };
                        refs.insert(key, anchor);
                    }
                    None => {
                        let classes: Vec<&str> = parts.class.into_iter().collect();
                        html_out.push_str(&html::span(&classes, None, parts.body));
                    }
                }
            }
            Ok(RawToken::Pipe) | Ok(RawToken::Text) | Err(()) => html_out.push_str(slice),
        }
    }

    tracing::trace!(spans = refs.len(), "parsed troubadown");
    Parsed {
        html: html_out,
        refs,
    }
}

/// Troubadown source together with the tooltip bodies it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markup {
    /// Troubadown source text.
    pub source: String,
    /// Whether the parsed HTML is passed through Markdown.
    #[serde(default = "default_markdown")]
    pub markdown: bool,
    /// Bodies for anonymous tooltip spans, by order of appearance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tooltips: Vec<RichText>,
    /// Bodies for named tooltip spans.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub named_tooltips: BTreeMap<String, RichText>,
}

fn default_markdown() -> bool {
    true
}

impl Markup {
    /// Markup rendered with Markdown and no tooltip bodies.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            markdown: true,
            tooltips: Vec::new(),
            named_tooltips: BTreeMap::new(),
        }
    }

    /// Enable or disable the Markdown pass.
    pub fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    /// Append a body for the next anonymous tooltip span.
    pub fn with_tooltip(mut self, tooltip: impl Into<RichText>) -> Self {
        self.tooltips.push(tooltip.into());
        self
    }

    /// Set the body for a named tooltip span.
    pub fn with_named_tooltip(
        mut self,
        name: impl Into<String>,
        tooltip: impl Into<RichText>,
    ) -> Self {
        self.named_tooltips.insert(name.into(), tooltip.into());
        self
    }

    /// Parse, optionally apply Markdown, and render each supplied tooltip
    /// body against the anchor its span was given.
    pub fn render(&self, ids: &mut IdAllocator) -> TextResult<Rendered> {
        let parsed = parse(&self.source, ids);
        let html = if self.markdown {
            markdown::to_html(&parsed.html)
        } else {
            parsed.html
        };

        let keyed = self
            .tooltips
            .iter()
            .enumerate()
            .map(|(i, body)| (TooltipKey::Index(i), body))
            .chain(
                self.named_tooltips
                    .iter()
                    .map(|(name, body)| (TooltipKey::Name(name.clone()), body)),
            );

        let mut tooltips = TooltipTable::new();
        for (key, body) in keyed {
            let anchor = parsed
                .refs
                .get(&key)
                .cloned()
                .ok_or(TextError::UnboundTooltip(key))?;
            let rendered = body.render(ids, true)?;
            tooltips.extend(rendered.tooltips);
            tooltips.insert(anchor, rendered.html);
        }

        Ok(Rendered { html, tooltips })
    }
}

impl From<&str> for Markup {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Markup {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_fresh(input: &str) -> Parsed {
        parse(input, &mut IdAllocator::new())
    }

    #[test]
    fn class_only() {
        let out = parse_fresh("|red:text|");
        assert_eq!(out.html, r#"<span class="red">text</span>"#);
        assert!(out.refs.is_empty());
    }

    #[test]
    fn anonymous_tooltip() {
        let out = parse_fresh("|?text|");
        assert_eq!(
            out.html,
            r#"<span class="tooltip" id="troubadour_tooltip_0">text</span>"#
        );
        assert_eq!(
            out.refs.get(&TooltipKey::Index(0)).map(String::as_str),
            Some("troubadour_tooltip_0")
        );
    }

    #[test]
    fn named_tooltip_with_class() {
        let out = parse_fresh("|lbl?red:rabbit|");
        assert_eq!(
            out.html,
            r#"<span class="tooltip red" id="troubadour_tooltip_0">rabbit</span>"#
        );
        assert_eq!(
            out.refs.get(&TooltipKey::Name("lbl".into())).map(String::as_str),
            Some("troubadour_tooltip_0")
        );
    }

    #[test]
    fn anonymous_counter_is_separate_from_ids() {
        let mut ids = IdAllocator::starting_at(7);
        let out = parse("|?a| |n?b| |?c|", &mut ids);
        assert_eq!(out.refs[&TooltipKey::Index(0)], "troubadour_tooltip_7");
        assert_eq!(out.refs[&TooltipKey::Name("n".into())], "troubadour_tooltip_8");
        assert_eq!(out.refs[&TooltipKey::Index(1)], "troubadour_tooltip_9");
    }

    #[test]
    fn repeated_name_rebinds_to_later_span() {
        let out = parse_fresh("|n?a| |n?b|");
        assert_eq!(out.refs.len(), 1);
        assert_eq!(out.refs[&TooltipKey::Name("n".into())], "troubadour_tooltip_1");

        let rendered = Markup::new("|n?a| |n?b|")
            .with_markdown(false)
            .with_named_tooltip("n", "only the second")
            .render(&mut IdAllocator::new())
            .unwrap();
        assert!(rendered.html.contains(r#"id="troubadour_tooltip_0">a</span>"#));
        assert_eq!(rendered.tooltips.len(), 1);
        assert_eq!(
            rendered.tooltips["troubadour_tooltip_1"],
            "<p>only the second</p>\n"
        );
    }

    #[test]
    fn plain_span_emits_body() {
        assert_eq!(parse_fresh("a |just text| b").html, "a just text b");
    }

    #[test]
    fn empty_class_is_ignored() {
        assert_eq!(parse_fresh("|:body|").html, "body");
    }

    #[test]
    fn text_outside_spans_is_unchanged() {
        let out = parse_fresh("Are we |?red:doomed|?");
        assert_eq!(
            out.html,
            r#"Are we <span class="tooltip red" id="troubadour_tooltip_0">doomed</span>?"#
        );
    }

    #[test]
    fn unterminated_pipe_is_literal() {
        let out = parse_fresh("start |red:never closed");
        assert_eq!(out.html, "start |red:never closed");
        assert!(out.refs.is_empty());
    }

    #[test]
    fn trailing_pipe_after_span() {
        let out = parse_fresh("|a:b|c|d");
        assert_eq!(out.html, r#"<span class="a">b</span>c|d"#);
    }

    #[test]
    fn colon_in_body_after_class() {
        let out = parse_fresh("|note:time: 12:00|");
        assert_eq!(out.html, r#"<span class="note">time: 12:00</span>"#);
    }

    #[test]
    fn question_mark_after_non_label() {
        // `hey there?` has a space, so it is body text rather than a tooltip name
        let out = parse_fresh("|hey there?|");
        assert_eq!(out.html, "hey there?");
        assert!(out.refs.is_empty());
    }

    #[test]
    fn empty_span() {
        assert_eq!(parse_fresh("||").html, "");
    }

    #[test]
    fn split_span_parts() {
        assert_eq!(
            split_span("tt?cls:body"),
            SpanParts {
                tooltip: Some("tt"),
                class: Some("cls"),
                body: "body"
            }
        );
        assert_eq!(
            split_span("?body"),
            SpanParts {
                tooltip: Some(""),
                class: None,
                body: "body"
            }
        );
    }

    #[test]
    fn ids_never_reused_across_calls() {
        let mut ids = IdAllocator::new();
        let first = parse("|?a|", &mut ids);
        let second = parse("|?b|", &mut ids);
        assert_ne!(
            first.refs[&TooltipKey::Index(0)],
            second.refs[&TooltipKey::Index(0)]
        );
    }

    #[test]
    fn markup_binds_tooltips() {
        let markup = Markup::new("Are we |?red:doomed|? Ask |who?the oracle|.")
            .with_tooltip("Probably.")
            .with_named_tooltip("who", RichText::new("a *seer*"));
        let out = markup.render(&mut IdAllocator::new()).unwrap();
        insta::assert_snapshot!(
            out.html.trim_end(),
            @r#"<p>Are we <span class="tooltip red" id="troubadour_tooltip_0">doomed</span>? Ask <span class="tooltip" id="troubadour_tooltip_1">the oracle</span>.</p>"#
        );
        assert_eq!(out.tooltips["troubadour_tooltip_0"], "<p>Probably.</p>\n");
        assert_eq!(out.tooltips["troubadour_tooltip_1"], "<p>a <em>seer</em></p>\n");
    }

    #[test]
    fn markup_without_markdown() {
        let out = Markup::new("|blue:sky|")
            .with_markdown(false)
            .render(&mut IdAllocator::new())
            .unwrap();
        assert_eq!(out.html, r#"<span class="blue">sky</span>"#);
    }

    #[test]
    fn markup_unbound_tooltip_is_error() {
        let err = Markup::new("no spans here")
            .with_tooltip("orphan")
            .render(&mut IdAllocator::new())
            .unwrap_err();
        assert_eq!(err, TextError::UnboundTooltip(TooltipKey::Index(0)));
    }

    #[test]
    fn markup_span_without_body_is_fine() {
        let out = Markup::new("|?lonely|")
            .render(&mut IdAllocator::new())
            .unwrap();
        assert!(out.tooltips.is_empty());
        assert!(out.html.contains("troubadour_tooltip_0"));
    }
}
