//! Error types for the CSS Engine.

use thiserror::Error;

/// Main error type for CSS Engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A stylesheet, declaration, or value failed to parse.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// An `@import` or other external resource load was rejected by the
    /// host's `ResourceLoadPolicy`.
    #[error("security error loading {url}: {reason}")]
    Security {
        /// The URL that was rejected.
        url: String,
        /// Why the host rejected it.
        reason: String,
    },

    /// `get_computed_style` was asked for a property the registry does not
    /// know about.
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// A mutation event referenced an event kind the invalidator cannot
    /// dispatch on.
    #[error("invalid event kind: {0}")]
    InvalidEventKind(String),

    /// An `@import` URL could not be resolved against its document base.
    #[error("failed to resolve import '{url}' against base '{base}'")]
    ImportResolution {
        /// The import's URL, as written.
        url: String,
        /// The base URI it was resolved against.
        base: String,
    },
}

impl From<css_parser_core::ParseError> for EngineError {
    fn from(err: css_parser_core::ParseError) -> Self {
        EngineError::Syntax(err.to_string())
    }
}

impl From<css_types::CssError> for EngineError {
    fn from(err: css_types::CssError) -> Self {
        EngineError::Syntax(err.to_string())
    }
}
