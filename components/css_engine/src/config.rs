//! Engine configuration.
//!
//! Per the design notes, the engine's configuration surface is exactly its
//! constructor parameters and setters — there is no config file, env var,
//! or CLI. This struct gathers the pieces that change rarely (attribute
//! names, the presentational-hints flag, the initial media list, the
//! document's base URI) so construction reads as one call rather than a
//! long parameter list.

use browser_interfaces::{AllowAllLoads, ResourceLoadPolicy};

/// Construction-time configuration for a [`crate::CssEngine`].
pub struct EngineConfig {
    /// Initial active media (e.g. `["screen"]`); empty matches `all`.
    pub media: Vec<String>,
    /// Policy consulted before resolving an `@import`.
    pub resource_load_policy: Box<dyn ResourceLoadPolicy>,
    /// Name of the attribute carrying an element's inline style
    /// declaration (`"style"` for HTML).
    pub style_attribute: String,
    /// Whether non-CSS presentational hints (attributes whose local name
    /// matches a known property name) are recognised at all.
    pub wants_hints: bool,
    /// The document's base URI, used to resolve `@import` URLs and reported
    /// in syntax-error messages.
    pub document_uri: String,
}

impl EngineConfig {
    /// Default configuration: no media restriction, every load allowed,
    /// `style` as the inline-style attribute, hints disabled.
    pub fn new() -> Self {
        EngineConfig {
            media: Vec::new(),
            resource_load_policy: Box::new(AllowAllLoads),
            style_attribute: "style".to_string(),
            wants_hints: false,
            document_uri: String::new(),
        }
    }

    /// Enable non-CSS presentational hints.
    pub fn with_hints(mut self) -> Self {
        self.wants_hints = true;
        self
    }

    /// Set the initial active media list.
    pub fn with_media(mut self, media: Vec<String>) -> Self {
        self.media = media;
        self
    }

    /// Set the document's base URI.
    pub fn with_document_uri(mut self, document_uri: impl Into<String>) -> Self {
        self.document_uri = document_uri.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("media", &self.media)
            .field("style_attribute", &self.style_attribute)
            .field("wants_hints", &self.wants_hints)
            .field("document_uri", &self.document_uri)
            .finish_non_exhaustive()
    }
}
