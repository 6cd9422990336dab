//! Error types for the markup crate.
//!
//! Transcoding itself is total (bad input degrades to literal text); these
//! errors surface only at the validating constructors.

use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum MarkupError {
    /// Size keyword outside the six toolbar levels.
    #[error("unknown size keyword: {0:?}")]
    #[diagnostic(code(backline::markup::unknown_size))]
    UnknownSize(String),

    /// Color literal that is empty or unsafe to embed in an attribute.
    #[error("invalid color literal: {0:?}")]
    #[diagnostic(code(backline::markup::invalid_color))]
    InvalidColor(String),
}
