//! The per-element cascaded/computed property slot array.

use crate::value::Value;
use css_types::{Origin, PropertyIndex};

/// One property's cascade/computed state.
#[derive(Debug, Clone, Default)]
pub struct Slot {
    /// The cascaded value (or, once resolved, a `Value::Computed` wrapper
    /// retaining both forms). `None` means no declaration applied.
    pub value: Option<Value>,
    /// Which origin most recently wrote this slot.
    pub origin: Option<Origin>,
    /// Whether the writing declaration carried `!important`.
    pub important: bool,
    /// Has the computed-value resolver already processed this slot?
    pub computed: bool,
    /// The cascaded value was absent; `value` holds a lazily-computed
    /// default or inherited value instead.
    pub null_cascaded: bool,
    /// The computed value was obtained by inheriting from the parent;
    /// must be re-resolved if the parent's value changes.
    pub parent_relative: bool,
    /// The computed value depends on this element's own computed `font-size`.
    pub font_size_relative: bool,
    /// The computed value depends on this element's own computed `line-height`.
    pub line_height_relative: bool,
    /// The computed value depends on this element's own computed `color`.
    pub color_relative: bool,
}

impl Slot {
    /// Reset everything about this slot as though no cascade or computation
    /// had ever touched it.
    pub fn clear(&mut self) {
        *self = Slot::default();
    }

    /// Reset only the *computed* half, keeping whatever was cascaded.
    /// Used by invalidation to force recomputation without re-running
    /// cascade.
    pub fn clear_computed(&mut self) {
        if let Some(value) = self.value.take() {
            self.value = Some(value.cascaded().clone());
        }
        self.computed = false;
        self.null_cascaded = false;
        self.parent_relative = false;
        self.font_size_relative = false;
        self.line_height_relative = false;
        self.color_relative = false;
    }
}

/// A dense, per-property-index array of cascade/computed state for one
/// element (and, implicitly, one pseudo-element key — callers key maps by
/// `(element, pseudo)` externally).
#[derive(Debug, Clone)]
pub struct StyleMap {
    slots: Vec<Slot>,
    /// True if this map was imported wholesale from another engine's tree
    /// (`import_cascaded_style_maps`); cascade must not rewrite it.
    pub fixed_cascaded_style: bool,
}

impl StyleMap {
    /// Create an empty style map sized to hold `property_count` properties.
    pub fn new(property_count: usize) -> Self {
        StyleMap {
            slots: vec![Slot::default(); property_count],
            fixed_cascaded_style: false,
        }
    }

    /// Number of property slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if this map has no slots (only possible for a zero-property registry).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Borrow a slot.
    pub fn get(&self, idx: PropertyIndex) -> &Slot {
        &self.slots[idx as usize]
    }

    /// Mutably borrow a slot.
    pub fn get_mut(&mut self, idx: PropertyIndex) -> &mut Slot {
        &mut self.slots[idx as usize]
    }

    /// The cascade write rule used by origins `NonCss`, `Author`, and
    /// `InlineAuthor` (the engine's "author write rule", see the cascade
    /// assembler design docs §4.4a). `UserAgent`/`User` origins should use
    /// [`StyleMap::write_unconditional`] instead since specificity sort
    /// already orders those correctly.
    pub fn write_author(
        &mut self,
        idx: PropertyIndex,
        value: Value,
        important: bool,
        origin: Origin,
    ) {
        debug_assert!(matches!(
            origin,
            Origin::NonCss | Origin::Author | Origin::InlineAuthor
        ));

        let slot = self.get_mut(idx);
        let may_overwrite = match slot.origin {
            None => true,
            Some(Origin::UserAgent) => true,
            Some(Origin::User) => !slot.important,
            Some(Origin::Author) => !slot.important || important,
            Some(Origin::NonCss) | Some(Origin::InlineAuthor) => !slot.important || important,
        };

        if may_overwrite {
            slot.value = Some(value);
            slot.origin = Some(origin);
            slot.important = important;
            slot.computed = false;
        }
    }

    /// Write rule for `UserAgent`/`User` origins: specificity-sorted rules
    /// are written in ascending order, so a later write always wins.
    pub fn write_unconditional(
        &mut self,
        idx: PropertyIndex,
        value: Value,
        important: bool,
        origin: Origin,
    ) {
        debug_assert!(matches!(origin, Origin::UserAgent | Origin::User));
        let slot = self.get_mut(idx);
        slot.value = Some(value);
        slot.origin = Some(origin);
        slot.important = important;
        slot.computed = false;
    }
}
