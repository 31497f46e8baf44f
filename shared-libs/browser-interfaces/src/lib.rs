//! Browser interfaces — the DOM, selector-matching, and resource-loading
//! trait seams the CSS engine is built against.
//!
//! The engine never assumes a concrete DOM or selector-grammar
//! implementation; it is driven entirely through these traits so that a
//! host embedding it can plug in its own tree and its own parser/matcher.
//! This crate is synchronous throughout — the engine's concurrency model
//! (single-threaded, cooperative) has no use for `async`/await at this
//! seam, unlike a networked browser-component boundary.

use css_matcher_core::ElementLike;
use css_types::Specificity;
use std::collections::HashSet;

/// Opaque identifier for a DOM node, stable for the node's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Construct a new node id.
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }
}

/// A DOM node as seen by the CSS engine.
///
/// Implementors provide the tree-navigation and attribute-access surface
/// the cascade assembler and invalidator need. `ElementLike` is a supertrait
/// so any `DomNode` can also be matched against selectors by
/// `css_matcher_core::SelectorMatcher` or a host-supplied matcher.
pub trait DomNode: ElementLike {
    /// Stable identity for this node.
    fn node_id(&self) -> NodeId;

    /// True if this node participates in the CSS style-map protocol
    /// (i.e. it is an element, not text/comment/document).
    fn is_stylable(&self) -> bool;

    /// True if this node carries author stylesheets (e.g. a `<style>` or
    /// `<link rel=stylesheet>` element, or their equivalent).
    fn is_stylesheet_carrier(&self) -> bool;

    /// True if this node is the host of an imported subtree (its "logical"
    /// children live under a separate imported root rather than as direct
    /// DOM children).
    fn is_import_host(&self) -> bool {
        false
    }

    /// The root of the subtree imported by this node, if it is an import
    /// host and the import has resolved.
    fn imported_root(&self) -> Option<Self>
    where
        Self: Sized,
    {
        None
    }

    /// Iterate this node's attribute `(name, value)` pairs.
    fn attributes_iter(&self) -> Vec<(String, String)>;
}

/// Walk up physical parents, substituting the logical parent (the import
/// host's parent) whenever `node` is itself an imported root — i.e. the
/// edge a real import host installs back to its own parent.
///
/// Most `DomNode` implementations have no imports and this is simply
/// `node.parent()`; hosts that support `@import`-like embedding should
/// override the parent-of-imported-root case by giving the imported root's
/// `parent()` implementation the host's parent directly.
pub fn logical_parent<E: DomNode + Clone>(node: &E) -> Option<E> {
    node.parent().cloned()
}

/// The first logical child of `node`: if `node` is an import host with a
/// resolved imported root, that root; otherwise `node`'s first physical
/// child is not modeled by `ElementLike` (it exposes ancestors/siblings,
/// not children), so hosts that need forward traversal do so via their own
/// child iteration and call this only to special-case import hosts.
pub fn imported_child<E: DomNode + Clone>(node: &E) -> Option<E> {
    if node.is_import_host() {
        node.imported_root()
    } else {
        None
    }
}

/// Ascend through logical parents until the first stylable ancestor,
/// exclusive of `node` itself.
pub fn nearest_stylable_ancestor<E: DomNode + Clone>(node: &E) -> Option<E> {
    let mut current = logical_parent(node);
    while let Some(candidate) = current {
        if candidate.is_stylable() {
            return Some(candidate);
        }
        current = logical_parent(&candidate);
    }
    None
}

/// How an attribute mutation changed the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrChangeKind {
    /// The attribute did not exist before and now does.
    Addition,
    /// The attribute existed before and its value changed.
    Modification,
    /// The attribute existed before and has been removed.
    Removal,
}

/// The kind of DOM mutation that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// An attribute on `target` was added, changed, or removed.
    AttributeModified,
    /// A node was inserted as a child of `target`'s parent.
    NodeInserted,
    /// A node was removed from `target`'s parent.
    NodeRemoved,
    /// A subtree rooted near `target` finished mutating (fires after a
    /// batch of insert/remove operations settles).
    SubtreeModified,
    /// The character data of a text node changed.
    CharacterDataModified,
}

/// A single DOM mutation event, in the shape the engine's invalidator
/// dispatches on (see the mutation-dispatch rules in the design docs).
#[derive(Debug, Clone)]
pub struct MutationEvent {
    /// What kind of mutation this is.
    pub kind: MutationKind,
    /// The node the mutation is reported against.
    pub target: NodeId,
    /// For `AttributeModified`, the attribute's local name.
    pub related_attribute: Option<String>,
    /// For `AttributeModified`, how the attribute changed.
    pub attr_change: Option<AttrChangeKind>,
    /// For `AttributeModified`, the attribute's previous value.
    pub prev_value: Option<String>,
    /// For `AttributeModified`, the attribute's new value.
    pub new_value: Option<String>,
}

impl MutationEvent {
    /// Construct an attribute-modified event.
    pub fn attribute(
        target: NodeId,
        attribute: impl Into<String>,
        change: AttrChangeKind,
        prev_value: Option<String>,
        new_value: Option<String>,
    ) -> Self {
        MutationEvent {
            kind: MutationKind::AttributeModified,
            target,
            related_attribute: Some(attribute.into()),
            attr_change: Some(change),
            prev_value,
            new_value,
        }
    }

    /// Construct a node-inserted/removed/subtree-modified/character-data
    /// event with no attribute payload.
    pub fn node(kind: MutationKind, target: NodeId) -> Self {
        MutationEvent {
            kind,
            target,
            related_attribute: None,
            attr_change: None,
            prev_value: None,
            new_value: None,
        }
    }
}

/// A CSS selector, external to the engine's own cascade/invalidation logic.
///
/// The engine never inspects a selector's internal grammar; it asks the
/// selector whether it matches, what its specificity is, and which
/// attributes it references (for the invalidator's `selector_attributes`
/// set).
pub trait StyleSelector<E: DomNode> {
    /// Does this selector match `element`, optionally restricted to a
    /// pseudo-element/class context named by `pseudo`?
    fn matches(&self, element: &E, pseudo: Option<&str>) -> bool;

    /// This selector's specificity, per the CSS cascade's specificity rules.
    fn specificity(&self) -> Specificity;

    /// Add every attribute name this selector tests to `set`.
    fn fill_attribute_set(&self, set: &mut HashSet<String>);
}

/// Hook invoked before the engine fetches an `@import`ed stylesheet.
///
/// Returning `Err` aborts the import; the engine surfaces the error
/// through its own error type and otherwise treats the import as if its
/// URL failed to resolve.
pub trait ResourceLoadPolicy {
    /// Check whether loading `target_url` from a stylesheet whose document
    /// base is `document_url` is permitted.
    fn check_load_external_resource(
        &self,
        target_url: &str,
        document_url: &str,
    ) -> Result<(), String>;
}

/// A `ResourceLoadPolicy` that allows every load; the default when a host
/// does not care to restrict `@import` resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllLoads;

impl ResourceLoadPolicy for AllowAllLoads {
    fn check_load_external_resource(
        &self,
        _target_url: &str,
        _document_url: &str,
    ) -> Result<(), String> {
        Ok(())
    }
}
