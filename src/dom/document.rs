//! Document - Element Arena and Queries
//!
//! Owns all elements of a page plus the document title and viewport.
//! Queries mirror the selector uses of the feature controllers: by id,
//! by class, by attribute presence, and descendant lookups.

use crate::dom::element::{Element, NodeId};

/// Viewport geometry and scroll position
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_VIEWPORT_WIDTH,
            height: crate::constants::DEFAULT_VIEWPORT_HEIGHT,
            scroll_y: 0.0,
        }
    }
}

/// A page document
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    title: String,
    /// Total scrollable height, used by the scroll-progress indicator
    pub scroll_height: f32,
    pub viewport: Viewport,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only the root element
    pub fn new() -> Self {
        let root = Element::new("html");
        Self {
            nodes: vec![root],
            root: NodeId(0),
            title: String::new(),
            scroll_height: crate::constants::DEFAULT_VIEWPORT_HEIGHT,
            viewport: Viewport::default(),
        }
    }

    /// Root element handle
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Document title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the document title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    // ==================== Tree construction ====================

    /// Append a new element under `parent`, returning its handle
    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        element.parent = Some(parent);
        self.nodes.push(element);
        self.nodes[parent.0].children.push(id);
        id
    }

    // ==================== Access ====================

    /// Borrow an element
    pub fn get(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    /// Mutably borrow an element
    pub fn get_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    /// Children of an element
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Parent of an element
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Whether `node` is `ancestor` or sits somewhere below it
    pub fn is_within(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    // ==================== Queries ====================

    /// Find an element by id
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
            .map(NodeId)
    }

    /// The body element, if the page defines one
    pub fn body(&self) -> Option<NodeId> {
        self.nodes.iter().position(|el| el.tag == "body").map(NodeId)
    }

    /// All elements carrying a class
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.select(|el| el.has_class(class))
    }

    /// All elements carrying an attribute
    pub fn elements_with_attr(&self, name: &str) -> Vec<NodeId> {
        self.select(|el| el.has_attribute(name))
    }

    /// All elements matching a predicate, in document order
    pub fn select(&self, pred: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, el)| pred(el))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// First descendant of `node` carrying a class
    pub fn descendant_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .find(|&id| self.nodes[id.0].has_class(class))
    }

    /// All descendants of `node` carrying a class
    pub fn descendants_with_class(&self, node: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|&id| self.nodes[id.0].has_class(class))
            .collect()
    }

    /// Descendants of `node` in depth-first document order (excludes `node`)
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[node.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    /// Walk upward from `node` to the first element (inclusive) with a class
    pub fn closest_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.nodes[id.0].has_class(class) {
                return Some(id);
            }
            current = self.nodes[id.0].parent;
        }
        None
    }
}
