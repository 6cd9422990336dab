//! Error types for document load/save and validation.

use miette::Diagnostic;

use crate::validate::ValidationIssue;

#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ConfigError {
    /// IO error while reading or writing a document.
    #[error(transparent)]
    #[diagnostic(code(backline::config::io))]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    #[diagnostic(code(backline::config::json))]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error(transparent)]
    #[diagnostic(code(backline::config::toml))]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error(transparent)]
    #[diagnostic(code(backline::config::toml))]
    TomlSer(#[from] toml::ser::Error),

    /// File extension outside the supported set (json, toml).
    #[error("unsupported document format: {0:?}")]
    #[diagnostic(
        code(backline::config::format),
        help("supported extensions are .json and .toml")
    )]
    UnsupportedFormat(String),

    /// The document failed structural validation.
    #[error("document is invalid ({} issue(s))", .0.len())]
    #[diagnostic(code(backline::config::invalid))]
    Invalid(Vec<ValidationIssue>),
}
