//! Element - Document Node Data
//!
//! Plain data for a single element: tag, identity, classes, attributes,
//! inline styles, text content and layout offset. Elements are owned by
//! the [`Document`](super::Document) arena and addressed by [`NodeId`].

use ahash::AHashMap;

/// Handle into the document arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single document element
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Tag name ("div", "button", "input", ...)
    pub tag: String,
    /// Optional element id
    pub id: Option<String>,
    /// Class list (insertion-ordered)
    classes: Vec<String>,
    /// Attributes (data-i18n, placeholder, href, disabled, ...)
    attributes: AHashMap<String, String>,
    /// Inline styles written by the motion engine and controllers
    styles: AHashMap<String, String>,
    /// Rendered text content
    text: String,
    /// Vertical layout position, used by scroll gating
    pub offset_top: f32,
    /// Horizontal layout position
    pub offset_left: f32,
    /// Layout width and height, used by the magnetic pointer math
    pub width: f32,
    pub height: f32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    /// Create an element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder: set the element id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: add a class
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Builder: set an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder: set the layout offset
    pub fn with_offset(mut self, top: f32) -> Self {
        self.offset_top = top;
        self
    }

    /// Builder: set the full layout rectangle
    pub fn with_rect(mut self, left: f32, top: f32, width: f32, height: f32) -> Self {
        self.offset_left = left;
        self.offset_top = top;
        self.width = width;
        self.height = height;
        self
    }

    /// Layout center point
    pub fn center(&self) -> (f32, f32) {
        (
            self.offset_left + self.width / 2.0,
            self.offset_top + self.height / 2.0,
        )
    }

    // ==================== Classes ====================

    /// Check for a class
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class (idempotent)
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Remove a class if present
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Replace the whole class list (`className = "..."` analog)
    pub fn set_classes(&mut self, classes: &[&str]) {
        self.classes = classes.iter().map(|c| (*c).to_string()).collect();
    }

    /// Class list accessor
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    // ==================== Attributes ====================

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Remove an attribute
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Attribute presence check
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    // ==================== Styles ====================

    /// Get an inline style value
    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    /// Set an inline style
    pub fn set_style(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.styles.insert(name.into(), value.into());
    }

    /// Remove an inline style
    pub fn remove_style(&mut self, name: &str) {
        self.styles.remove(name);
    }

    // ==================== Text ====================

    /// Rendered text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the rendered text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
