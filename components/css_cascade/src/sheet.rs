//! A stylesheet bound to a cascade origin and, for linked/alternate
//! stylesheets, a media list and enabled flag.

use css_parser_core::Stylesheet;
use css_types::Origin;

/// One stylesheet the cascade assembler considers, tagged with the origin
/// its rules cascade under.
#[derive(Debug, Clone)]
pub struct CascadeSheet {
    /// The parsed rules.
    pub stylesheet: Stylesheet,
    /// Which cascade origin this sheet's rules belong to. A sheet parsed by
    /// `css_parser_core` carries its own (3-origin) `Origin`, but the
    /// cascade's 5-origin model lets a host attach the same parsed rules to
    /// `NonCss` or `InlineAuthor` as appropriate — that mapping happens at
    /// construction, not here.
    pub origin: Origin,
    /// Media list this sheet is scoped to (e.g. from a `<link media="...">`
    /// equivalent); empty means "all media".
    pub media_queries: Vec<String>,
    /// Whether this sheet currently participates in the cascade. An
    /// alternate stylesheet the host has not selected is present but
    /// disabled.
    pub enabled: bool,
    /// The sheet's `title`, if any (as for a `<link title="...">`
    /// equivalent). Only meaningful together with `is_alternate`.
    pub title: Option<String>,
    /// Whether this is a preferred-alternate sheet: a titled sheet that
    /// only applies when its title matches the engine's selected alternate
    /// title (see `set_alternate_style_sheet`).
    pub is_alternate: bool,
}

impl CascadeSheet {
    /// Wrap `stylesheet` as an always-enabled, all-media sheet at `origin`.
    pub fn new(stylesheet: Stylesheet, origin: Origin) -> Self {
        CascadeSheet {
            stylesheet,
            origin,
            media_queries: Vec::new(),
            enabled: true,
            title: None,
            is_alternate: false,
        }
    }

    /// Attach a media list, as for a linked stylesheet with a `media`
    /// attribute.
    pub fn with_media(mut self, media_queries: Vec<String>) -> Self {
        self.media_queries = media_queries;
        self
    }

    /// Mark this sheet as a disabled alternate stylesheet.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Attach a title, as for a `<link title="...">` equivalent.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Mark this sheet as a preferred-alternate sheet: it only applies
    /// while its title is the engine's currently selected alternate title.
    pub fn alternate(mut self) -> Self {
        self.is_alternate = true;
        self
    }
}
