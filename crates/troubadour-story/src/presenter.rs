//! Bridges rendered output to a [`RenderSink`].

use troubadour_text::{IdAllocator, Rendered, RichText};

use crate::error::StoryResult;
use crate::sink::RenderSink;

/// Owns the render sink and the session's id allocator.
///
/// Every HTML fragment reaches the sink before the tooltips anchored in it
/// are bound, so a frontend can always find the anchor element.
#[derive(Debug)]
pub struct Presenter<S> {
    sink: S,
    ids: IdAllocator,
}

impl<S: RenderSink> Presenter<S> {
    /// Create a presenter with a fresh allocator.
    pub fn new(sink: S) -> Self {
        Self::with_allocator(sink, IdAllocator::new())
    }

    /// Create a presenter continuing from an existing allocator.
    pub fn with_allocator(sink: S, ids: IdAllocator) -> Self {
        Self { sink, ids }
    }

    /// The id allocator.
    pub fn ids(&mut self) -> &mut IdAllocator {
        &mut self.ids
    }

    /// The sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give the sink back.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Render rich text with this presenter's allocator.
    pub fn render(&mut self, text: &RichText, markdown: bool) -> StoryResult<Rendered> {
        Ok(text.render(&mut self.ids, markdown)?)
    }

    /// Append rendered output to a region, bind its tooltips and scroll.
    pub fn present(&mut self, region: &str, rendered: Rendered) {
        self.sink.append_html(region, &rendered.html);
        self.bind(rendered);
        self.sink.scroll_into_view(region);
    }

    /// Replace a region with rendered output and bind its tooltips.
    pub fn replace(&mut self, region: &str, rendered: Rendered) {
        self.sink.set_html(region, &rendered.html);
        self.bind(rendered);
    }

    fn bind(&mut self, rendered: Rendered) {
        for (anchor, body) in &rendered.tooltips {
            self.sink.bind_tooltip(anchor, body);
        }
    }

    /// Append raw HTML to a region.
    pub fn append(&mut self, region: &str, html: &str) {
        self.sink.append_html(region, html);
    }

    /// Replace a region with raw HTML.
    pub fn set_html(&mut self, region: &str, html: &str) {
        self.sink.set_html(region, html);
    }

    /// Empty a region.
    pub fn clear(&mut self, region: &str) {
        self.sink.clear(region);
    }

    /// Set an attribute on a region's element.
    pub fn set_attribute(&mut self, region: &str, name: &str, value: &str) {
        self.sink.set_attribute(region, name, value);
    }

    /// Bind a single tooltip.
    pub fn bind_tooltip(&mut self, anchor: &str, body: &str) {
        self.sink.bind_tooltip(anchor, body);
    }
}
