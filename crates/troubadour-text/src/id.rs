//! Monotonic identifiers for tooltip anchors and interactive elements.

/// Prefix shared by every generated element id.
pub const ID_PREFIX: &str = "troubadour";

/// Element kind used for tooltip anchors.
pub const TOOLTIP: &str = "tooltip";

/// Hands out unique, strictly increasing ids.
///
/// One allocator is threaded through every render and parse call of a
/// session so that anchors produced by rich text, markup and inputs never
/// collide on the same page. It is never reset; a new process starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Allocate an element id of the form `troubadour_<kind>_<n>`.
    pub fn element_id(&mut self, kind: &str) -> String {
        format!("{ID_PREFIX}_{kind}_{}", self.next_id())
    }

    /// Allocate a tooltip anchor id (`troubadour_tooltip_<n>`).
    pub fn tooltip_anchor(&mut self) -> String {
        self.element_id(TOOLTIP)
    }
}
