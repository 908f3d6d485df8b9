//! Error types for rich text rendering.

use thiserror::Error;

use crate::markup::TooltipKey;

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;

/// Errors raised while substituting arguments into a template string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A positional placeholder refers to an argument that was not supplied.
    #[error("positional argument {0} is missing")]
    MissingPositional(usize),

    /// A named placeholder refers to an argument that was not supplied.
    #[error("named argument '{0}' is missing")]
    MissingNamed(String),

    /// A `{` without a matching `}`.
    #[error("unmatched '{{' at byte {0}")]
    UnmatchedOpen(usize),

    /// A single `}` outside of a placeholder.
    #[error("single '}}' encountered at byte {0}")]
    UnmatchedClose(usize),

    /// `{}` and `{0}` placeholders were mixed in one template.
    #[error("cannot mix automatic and manual field numbering")]
    MixedNumbering,

    /// Format specs and conversions (`{:>4}`, `{!r}`) are not supported.
    #[error("unsupported format spec in '{{{0}}}'")]
    UnsupportedSpec(String),
}

/// Errors that can occur while rendering rich text or markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// Template substitution failed.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// A tooltip body was supplied for a span that does not exist.
    #[error("no span for tooltip {0}")]
    UnboundTooltip(TooltipKey),
}
