//! Rich text and inline markup for Troubadour.
//!
//! Two ways of producing annotated HTML share one [`IdAllocator`]:
//! [`RichText`], an immutable template tree built in code, and troubadown
//! ([`markup`]), a compact `|name?class:body|` syntax for plain strings.
//! Both yield HTML plus a table of tooltip bodies keyed by anchor id.

pub mod error;
pub mod html;
pub mod id;
pub mod markdown;
pub mod markup;
pub mod rich_text;
pub mod template;

pub use error::{FormatError, TextError, TextResult};
pub use id::IdAllocator;
pub use markup::{Markup, Parsed, TooltipKey, parse};
pub use rich_text::{Rendered, RichText, TooltipTable};
