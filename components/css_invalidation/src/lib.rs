//! CSS Invalidation — incremental style invalidation driven by DOM mutation
//! events.
//!
//! Tracks which elements need their `StyleMap` recomputed after a mutation,
//! dispatching on the mutation's kind rather than walking the whole tree on
//! every change:
//!
//! - `AttributeModified` on the `style` attribute only ever affects the
//!   mutated element's own inline declarations.
//! - `AttributeModified` on any other attribute only matters if some active
//!   selector actually tests that attribute name.
//! - `NodeInserted`/`NodeRemoved` invalidate a subtree; removal is deferred
//!   until the following `SubtreeModified` settles, so a burst of removals
//!   during one DOM operation invalidates once rather than per-node.
//! - `CharacterDataModified` never invalidates style — text content is not
//!   part of this engine's selector vocabulary.

use browser_interfaces::{AttrChangeKind, MutationEvent, MutationKind, NodeId};
use css_stylist_core::StyleMap;
use std::collections::HashSet;

/// Tracks dirty elements and dirty subtrees produced by a stream of
/// [`MutationEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct InvalidationTracker {
    dirty_elements: HashSet<NodeId>,
    dirty_subtrees: HashSet<NodeId>,
    pending_removals: HashSet<NodeId>,
}

impl InvalidationTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements whose own computed style must be recomputed.
    pub fn dirty_elements(&self) -> &HashSet<NodeId> {
        &self.dirty_elements
    }

    /// Elements whose entire subtree (including themselves) must be
    /// recomputed.
    pub fn dirty_subtrees(&self) -> &HashSet<NodeId> {
        &self.dirty_subtrees
    }

    /// True if `id` (or an ancestor marking its subtree dirty) needs restyle.
    pub fn is_dirty(&self, id: NodeId) -> bool {
        self.dirty_elements.contains(&id) || self.dirty_subtrees.contains(&id)
    }

    /// Clear the dirty flags for `id` once the engine has restyled it.
    pub fn clear_dirty(&mut self, id: NodeId) {
        self.dirty_elements.remove(&id);
        self.dirty_subtrees.remove(&id);
    }

    fn mark_element_dirty(&mut self, id: NodeId) {
        self.dirty_elements.insert(id);
    }

    fn mark_subtree_dirty(&mut self, id: NodeId) {
        self.dirty_subtrees.insert(id);
    }

    /// Process one mutation event.
    ///
    /// `selector_attributes` is the union, across every active stylesheet,
    /// of attribute names any selector tests — typically gathered by
    /// calling `fill_attribute_set` on each matched
    /// `browser_interfaces::StyleSelector`.
    pub fn process_mutation(&mut self, event: &MutationEvent, selector_attributes: &HashSet<String>) {
        match event.kind {
            MutationKind::AttributeModified => self.process_attribute(event, selector_attributes),
            MutationKind::NodeInserted => self.mark_subtree_dirty(event.target),
            MutationKind::NodeRemoved => {
                self.pending_removals.insert(event.target);
            }
            MutationKind::SubtreeModified => self.settle(event.target),
            MutationKind::CharacterDataModified => {}
        }
    }

    fn process_attribute(&mut self, event: &MutationEvent, selector_attributes: &HashSet<String>) {
        let Some(name) = event.related_attribute.as_deref() else {
            return;
        };

        // The `style` attribute cascades only at `InlineAuthor` for this
        // element; it can never change which OTHER elements a selector
        // matches, so it never needs a subtree invalidation.
        if name == "style" {
            self.mark_element_dirty(event.target);
            return;
        }

        if selector_attributes.contains(name) {
            self.mark_element_dirty(event.target);
        }
    }

    /// Settle any invalidation deferred by a prior `NodeRemoved` event
    /// reported against `target` (or one of its now-gone children).
    fn settle(&mut self, target: NodeId) {
        if self.pending_removals.remove(&target) {
            self.mark_subtree_dirty(target);
        }
    }
}

/// Reset the computed half of every slot in `map` without discarding its
/// cascaded values, so the next `get_computed_style` call recomputes from
/// cascade rather than re-running the whole cascade assembler.
pub fn invalidate_computed(map: &mut StyleMap) {
    for idx in 0..map.len() as css_types::PropertyIndex {
        map.get_mut(idx).clear_computed();
    }
}
