//! CSS Stylist Core — the primitive cascade/computed-value machinery shared
//! by the cascade assembler and the invalidator:
//! - the tagged [`value::Value`] model
//! - the per-element [`style_map::StyleMap`] slot array
//! - the [`registry::PropertyRegistry`] of value/shorthand managers
//! - the [`compute::get_computed_style`] resolver
//!
//! This crate knows nothing about selectors, specificity, or stylesheets —
//! that assembly lives in `css_cascade`, which depends on this crate rather
//! than the other way around.

pub mod compute;
pub mod registry;
pub mod style_map;
pub mod value;

pub use compute::{get_computed_style, ComputeContext, StyleMapProvider};
pub use registry::{ParseContext, PropertyRegistry, ShorthandManager, StylistError, ValueManager};
pub use style_map::{Slot, StyleMap};
pub use value::{Value, ValuePayload};
