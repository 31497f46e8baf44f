//! A minimal in-memory DOM, implementing `browser_interfaces::DomNode`, for
//! exercising the engine end to end without a host document tree.
//!
//! Nodes are reference-counted and parent-linked so that selector matching
//! (ancestors, previous siblings) and cascade inheritance (logical parent)
//! both work the way they would against a real document.

use browser_interfaces::{DomNode, NodeId};
use css_matcher_core::ElementLike;
use std::cell::RefCell;
use std::rc::Rc;

struct NodeData {
    id: NodeId,
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    parent: Option<TestNode>,
    previous_sibling: Option<TestNode>,
    stylable: bool,
}

/// A cheaply-cloned handle to one node in a [`TestDocument`].
#[derive(Clone)]
pub struct TestNode(Rc<NodeData>);

impl TestNode {
    fn id_attr(&self) -> Option<&str> {
        self.0
            .attrs
            .iter()
            .find(|(name, _)| name == "id")
            .map(|(_, value)| value.as_str())
    }
}

impl ElementLike for TestNode {
    fn tag_name(&self) -> &str {
        &self.0.tag
    }

    fn id(&self) -> Option<&str> {
        self.id_attr()
    }

    fn classes(&self) -> &[String] {
        &self.0.classes
    }

    fn parent(&self) -> Option<&Self> {
        self.0.parent.as_ref()
    }

    fn previous_sibling(&self) -> Option<&Self> {
        self.0.previous_sibling.as_ref()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }
}

impl DomNode for TestNode {
    fn node_id(&self) -> NodeId {
        self.0.id
    }

    fn is_stylable(&self) -> bool {
        self.0.stylable
    }

    fn is_stylesheet_carrier(&self) -> bool {
        self.0.tag == "style" || self.0.tag == "link"
    }

    fn attributes_iter(&self) -> Vec<(String, String)> {
        self.0.attrs.clone()
    }
}

/// A builder for a small, explicitly-linked test tree. Node ids are
/// assigned sequentially as nodes are appended.
#[derive(Default)]
pub struct TestDocument {
    next_id: RefCell<u64>,
}

impl TestDocument {
    pub fn new() -> Self {
        TestDocument { next_id: RefCell::new(1) }
    }

    fn fresh_id(&self) -> NodeId {
        let mut next = self.next_id.borrow_mut();
        let id = NodeId::new(*next);
        *next += 1;
        id
    }

    /// Create a root element (no parent, no previous sibling).
    pub fn element(&self, tag: &str) -> TestNode {
        TestNode(Rc::new(NodeData {
            id: self.fresh_id(),
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
            parent: None,
            previous_sibling: None,
            stylable: true,
        }))
    }

    /// Create an element that is the next child of `parent`, after
    /// `previous_sibling` if one is given.
    pub fn child(&self, tag: &str, parent: &TestNode, previous_sibling: Option<&TestNode>) -> TestNode {
        TestNode(Rc::new(NodeData {
            id: self.fresh_id(),
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
            parent: Some(parent.clone()),
            previous_sibling: previous_sibling.cloned(),
            stylable: true,
        }))
    }
}

/// Builder-style attribute/class mutators; these return a new handle since
/// `TestNode` is otherwise immutable once linked into the tree.
impl TestNode {
    pub fn with_class(self, class: impl Into<String>) -> Self {
        let mut data = (*self.0).clone_data();
        data.classes.push(class.into());
        TestNode(Rc::new(data))
    }

    pub fn with_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut data = (*self.0).clone_data();
        data.attrs.push((name.into(), value.into()));
        TestNode(Rc::new(data))
    }
}

impl NodeData {
    fn clone_data(&self) -> NodeData {
        NodeData {
            id: self.id,
            tag: self.tag.clone(),
            attrs: self.attrs.clone(),
            classes: self.classes.clone(),
            parent: self.parent.clone(),
            previous_sibling: self.previous_sibling.clone(),
            stylable: self.stylable,
        }
    }
}
