//! The property registry: the ordered set of value managers and shorthand
//! managers an engine was constructed with.

use crate::compute::ComputeContext;
use crate::value::Value;
use browser_interfaces::DomNode;
use css_parser_values::LexicalUnit;
use css_types::{PropertyIndex, NO_PROPERTY};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors a value manager can raise while parsing a declaration's value.
#[derive(Debug, Error)]
pub enum StylistError {
    /// The lexical unit was not a valid value for this property.
    #[error("invalid value for property '{property}': {reason}")]
    InvalidValue {
        /// The property being parsed.
        property: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Scratch context threaded through value-manager calls made while parsing
/// a stylesheet or declaration, in place of engine-wide mutable scratch
/// fields (see the design notes on scratch-state handling).
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// The base URI against which relative URLs in the current stylesheet
    /// resolve.
    pub css_base_uri: &'a str,
}

impl<'a> ParseContext<'a> {
    /// Build a parse context rooted at `css_base_uri`.
    pub fn new(css_base_uri: &'a str) -> Self {
        ParseContext { css_base_uri }
    }
}

/// One property's parsing and computation behavior.
///
/// Implementors are registered with a [`PropertyRegistry`] at engine
/// construction and are consulted by the cascade assembler (to parse a
/// declaration's value) and by the computed-value resolver (to turn a
/// cascaded value into a computed one).
pub trait ValueManager<E: DomNode>: fmt::Debug + Send + Sync {
    /// The property's canonical CSS name (e.g. `"font-size"`).
    fn property_name(&self) -> &str;

    /// Whether this property inherits by default (absent a cascaded value
    /// and an `inherit` keyword, does it still take the parent's computed
    /// value?).
    fn is_inherited(&self) -> bool;

    /// The property's initial value per its CSS definition.
    fn default_value(&self) -> Value;

    /// Parse a declaration's lexical unit into a cascaded `Value`.
    fn create_value(
        &self,
        lexical_unit: &LexicalUnit,
        ctx: &ParseContext,
    ) -> Result<Value, StylistError>;

    /// Resolve a cascaded value into its computed form.
    ///
    /// `ctx` gives access to the element, its style map, and (via
    /// [`ComputeContext::computed`]) other already-computed properties on
    /// the same element — reading `font-size`/`line-height`/`color` this
    /// way automatically marks the corresponding relative-dependence flag.
    fn compute_value(&self, ctx: &mut ComputeContext<'_, E>, cascaded: &Value) -> Value;
}

/// A property whose declaration expands into several longhands.
pub trait ShorthandManager<E: DomNode>: fmt::Debug + Send + Sync {
    /// The shorthand's canonical CSS name (e.g. `"margin"`).
    fn property_name(&self) -> &str;

    /// Parse `lexical_unit` and emit each longhand it expands to through
    /// `emit(name, lexical_unit, important)`.
    fn set_values(
        &self,
        lexical_unit: &LexicalUnit,
        important: bool,
        ctx: &ParseContext,
        emit: &mut dyn FnMut(&str, &LexicalUnit, bool),
    ) -> Result<(), StylistError>;

    #[allow(unused)]
    fn _marker(&self, _e: Option<&E>) {}
}

/// The immutable, construction-time registry of known properties.
pub struct PropertyRegistry<E: DomNode> {
    value_managers: Vec<Box<dyn ValueManager<E>>>,
    shorthand_managers: Vec<Box<dyn ShorthandManager<E>>>,
    longhand_index: HashMap<String, PropertyIndex>,
    shorthand_index: HashMap<String, usize>,
    font_size_index: PropertyIndex,
    line_height_index: PropertyIndex,
    color_index: PropertyIndex,
}

impl<E: DomNode> PropertyRegistry<E> {
    /// Build a registry from an ordered list of value managers and
    /// shorthand managers. Property indices are assigned in `value_managers`
    /// order and are stable for the registry's lifetime.
    pub fn new(
        value_managers: Vec<Box<dyn ValueManager<E>>>,
        shorthand_managers: Vec<Box<dyn ShorthandManager<E>>>,
    ) -> Self {
        let mut longhand_index = HashMap::new();
        for (idx, manager) in value_managers.iter().enumerate() {
            longhand_index.insert(manager.property_name().to_string(), idx as PropertyIndex);
        }

        let mut shorthand_index = HashMap::new();
        for (idx, manager) in shorthand_managers.iter().enumerate() {
            shorthand_index.insert(manager.property_name().to_string(), idx);
        }

        let font_size_index = *longhand_index.get("font-size").unwrap_or(&NO_PROPERTY);
        let line_height_index = *longhand_index.get("line-height").unwrap_or(&NO_PROPERTY);
        let color_index = *longhand_index.get("color").unwrap_or(&NO_PROPERTY);

        PropertyRegistry {
            value_managers,
            shorthand_managers,
            longhand_index,
            shorthand_index,
            font_size_index,
            line_height_index,
            color_index,
        }
    }

    /// Total number of known longhand properties.
    pub fn property_count(&self) -> usize {
        self.value_managers.len()
    }

    /// All known property indices, in registration order — used for bulk
    /// ("every property may have changed") change notifications.
    pub fn all_properties(&self) -> Vec<PropertyIndex> {
        (0..self.value_managers.len() as PropertyIndex).collect()
    }

    /// Look up a longhand property's index by name.
    pub fn index_of(&self, name: &str) -> PropertyIndex {
        *self.longhand_index.get(name).unwrap_or(&NO_PROPERTY)
    }

    /// Look up a shorthand manager by name.
    pub fn shorthand(&self, name: &str) -> Option<&dyn ShorthandManager<E>> {
        self.shorthand_index
            .get(name)
            .map(|&i| self.shorthand_managers[i].as_ref())
    }

    /// The value manager for a given property index.
    pub fn manager(&self, idx: PropertyIndex) -> &dyn ValueManager<E> {
        self.value_managers[idx as usize].as_ref()
    }

    /// Index of `font-size`, or [`NO_PROPERTY`] if not registered.
    pub fn font_size_index(&self) -> PropertyIndex {
        self.font_size_index
    }

    /// Index of `line-height`, or [`NO_PROPERTY`] if not registered.
    pub fn line_height_index(&self) -> PropertyIndex {
        self.line_height_index
    }

    /// Index of `color`, or [`NO_PROPERTY`] if not registered.
    pub fn color_index(&self) -> PropertyIndex {
        self.color_index
    }

    /// Parse a raw property value by name: tries a longhand first, falling
    /// back to a shorthand (whose longhands are emitted through `emit_longhand`).
    /// Returns `Ok(false)` for an unrecognised name — callers should drop
    /// the declaration silently, per the engine's error-handling design.
    pub fn create_value(
        &self,
        name: &str,
        lexical_unit: &LexicalUnit,
        important: bool,
        ctx: &ParseContext,
        emit_longhand: &mut dyn FnMut(PropertyIndex, Value, bool),
    ) -> Result<bool, StylistError> {
        let idx = self.index_of(name);
        if idx != NO_PROPERTY {
            let value = self.manager(idx).create_value(lexical_unit, ctx)?;
            emit_longhand(idx, value, important);
            return Ok(true);
        }

        if let Some(shorthand) = self.shorthand(name) {
            shorthand.set_values(lexical_unit, important, ctx, &mut |longhand_name, lu, imp| {
                let longhand_idx = self.index_of(longhand_name);
                if longhand_idx != NO_PROPERTY {
                    if let Ok(value) = self.manager(longhand_idx).create_value(lu, ctx) {
                        emit_longhand(longhand_idx, value, imp);
                    }
                }
            })?;
            return Ok(true);
        }

        Ok(false)
    }
}
