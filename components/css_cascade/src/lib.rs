//! CSS Cascade Algorithm Implementation
//!
//! Assembles a [`css_stylist_core::StyleMap`] for an element from the
//! stylesheets, inline style, and presentational hints that apply to it:
//! - Selector matching and specificity (via the reference grammar/matcher)
//! - Cascade ordering across the engine's five origins
//! - `!important` handling
//! - Simple media-list scoping for linked and `@media`-scoped rules
//!
//! Computed-value resolution itself — inheritance, defaults, unit
//! resolution — lives in `css_stylist_core`; this crate only builds the
//! cascaded map that resolver consumes.

mod assemble;
mod convert;
mod matcher;
mod media;
mod sheet;

pub use assemble::{build_style_map, InlineDeclaration};
pub use convert::property_value_to_lexical_unit;
pub use matcher::selector_matches;
pub use media::media_list_matches;
pub use sheet::CascadeSheet;

pub use css_types::{Origin, Specificity};
