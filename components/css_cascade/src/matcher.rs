//! Matches the reference grammar parser's simple selectors against an
//! element, for crates exercising `css_cascade` end-to-end without a host
//! selector engine. A host with a richer selector grammar supplies its own
//! matching via `browser_interfaces::StyleSelector` instead; this module is
//! the fallback used when a `CascadeSheet`'s rules come from
//! `css_parser_core`.

use css_matcher_core::ElementLike;
use css_parser_core::Selector;

/// Does `selector` match `element`?
pub fn selector_matches<E: ElementLike>(selector: &Selector, element: &E) -> bool {
    match selector {
        Selector::Universal => true,
        Selector::Element(name) => element.tag_name().eq_ignore_ascii_case(name),
        Selector::Class(name) => element.classes().iter().any(|c| c == name),
        Selector::Id(name) => element.id() == Some(name.as_str()),
        Selector::Compound { element: el, classes, id } => {
            el.as_ref()
                .map(|name| element.tag_name().eq_ignore_ascii_case(name))
                .unwrap_or(true)
                && classes
                    .iter()
                    .all(|name| element.classes().iter().any(|c| c == name))
                && id.as_ref().map(|name| element.id() == Some(name.as_str())).unwrap_or(true)
        }
    }
}
