//! CSS Engine - Main public API
//!
//! This crate provides the engine facade that orchestrates CSS parsing,
//! cascade resolution, selector matching, computed-value resolution, and
//! incremental invalidation for a single document: [`CssEngine`].
//!
//! # Example
//!
//! ```
//! use css_engine::{CssEngine, EngineConfig};
//! use css_engine::dom::TestDocument;
//!
//! let mut engine = CssEngine::new(EngineConfig::new());
//! engine.parse_style_sheet("p { color: green; }", None, false, Vec::new()).unwrap();
//!
//! let doc = TestDocument::new();
//! let p = doc.element("p");
//! let color_idx = engine.registry().index_of("color");
//! let computed = engine.get_computed_style(&p, None, color_idx).unwrap();
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod managers;
mod engine;

pub use config::EngineConfig;
pub use engine::{CssEngine, Listener, ListenerId};
pub use error::EngineError;
