//! The presentation capability the story renders into.
//!
//! The runtime never touches a display surface itself. Everything visible
//! goes through a [`RenderSink`], which a frontend implements on top of its
//! document model. [`MemorySink`] is a complete in-memory implementation for
//! tests and headless use.

use std::collections::BTreeMap;

/// Primitives a presentation layer provides.
pub trait RenderSink {
    /// Append HTML at the end of a region.
    fn append_html(&mut self, region: &str, html: &str);

    /// Replace the content of a region.
    fn set_html(&mut self, region: &str, html: &str);

    /// Remove all content from a region.
    fn clear(&mut self, region: &str) {
        self.set_html(region, "");
    }

    /// Set an attribute on a region's element.
    fn set_attribute(&mut self, region: &str, name: &str, value: &str);

    /// Activate a tooltip. Called after the anchor's HTML has been inserted.
    fn bind_tooltip(&mut self, anchor: &str, body: &str);

    /// Bring the end of a region into view.
    fn scroll_into_view(&mut self, _region: &str) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn append_html(&mut self, region: &str, html: &str) {
        (**self).append_html(region, html);
    }

    fn set_html(&mut self, region: &str, html: &str) {
        (**self).set_html(region, html);
    }

    fn clear(&mut self, region: &str) {
        (**self).clear(region);
    }

    fn set_attribute(&mut self, region: &str, name: &str, value: &str) {
        (**self).set_attribute(region, name, value);
    }

    fn bind_tooltip(&mut self, anchor: &str, body: &str) {
        (**self).bind_tooltip(anchor, body);
    }

    fn scroll_into_view(&mut self, region: &str) {
        (**self).scroll_into_view(region);
    }
}

/// One call received by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// `append_html`.
    Append {
        /// Target region.
        region: String,
        /// Appended HTML.
        html: String,
    },
    /// `set_html` or `clear`.
    Set {
        /// Target region.
        region: String,
        /// New content.
        html: String,
    },
    /// `set_attribute`.
    Attribute {
        /// Target region.
        region: String,
        /// Attribute name.
        name: String,
        /// Attribute value.
        value: String,
    },
    /// `bind_tooltip`.
    Tooltip {
        /// Anchor element id.
        anchor: String,
        /// Tooltip HTML.
        body: String,
    },
    /// `scroll_into_view`.
    Scroll {
        /// Target region.
        region: String,
    },
}

/// In-memory presentation layer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    regions: BTreeMap<String, String>,
    attributes: BTreeMap<(String, String), String>,
    tooltips: BTreeMap<String, String>,
    events: Vec<SinkEvent>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of a region (empty if never written).
    pub fn region(&self, region: &str) -> &str {
        self.regions.get(region).map(String::as_str).unwrap_or("")
    }

    /// Current value of an attribute.
    pub fn attribute(&self, region: &str, name: &str) -> Option<&str> {
        self.attributes
            .get(&(region.to_string(), name.to_string()))
            .map(String::as_str)
    }

    /// Body bound to a tooltip anchor.
    pub fn tooltip(&self, anchor: &str) -> Option<&str> {
        self.tooltips.get(anchor).map(String::as_str)
    }

    /// All tooltip bindings.
    pub fn tooltips(&self) -> &BTreeMap<String, String> {
        &self.tooltips
    }

    /// Every call received, in order.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// HTML fragments appended to a region, in order.
    pub fn appended(&self, region: &str) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Append { region: r, html } if r == region => Some(html.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for MemorySink {
    fn append_html(&mut self, region: &str, html: &str) {
        self.regions
            .entry(region.to_string())
            .or_default()
            .push_str(html);
        self.events.push(SinkEvent::Append {
            region: region.to_string(),
            html: html.to_string(),
        });
    }

    fn set_html(&mut self, region: &str, html: &str) {
        self.regions.insert(region.to_string(), html.to_string());
        self.events.push(SinkEvent::Set {
            region: region.to_string(),
            html: html.to_string(),
        });
    }

    fn set_attribute(&mut self, region: &str, name: &str, value: &str) {
        self.attributes
            .insert((region.to_string(), name.to_string()), value.to_string());
        self.events.push(SinkEvent::Attribute {
            region: region.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn bind_tooltip(&mut self, anchor: &str, body: &str) {
        self.tooltips.insert(anchor.to_string(), body.to_string());
        self.events.push(SinkEvent::Tooltip {
            anchor: anchor.to_string(),
            body: body.to_string(),
        });
    }

    fn scroll_into_view(&mut self, region: &str) {
        self.events.push(SinkEvent::Scroll {
            region: region.to_string(),
        });
    }
}
