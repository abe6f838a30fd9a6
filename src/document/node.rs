use super::markers::*;
use std::fmt;

pub const OPAQUE: f32 = 1.0;
pub const TRANSPARENT: f32 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub classes: Vec<String>,
    pub text: String,
    pub opacity: f32,
    pub disabled: bool,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    fn new(classes: &[&str], text: &str, opacity: f32) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            text: text.to_string(),
            opacity,
            disabled: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > TRANSPARENT
    }
}

/// Arena-backed node tree standing in for the page a copy widget lives in.
///
/// Nodes are never removed, so a `NodeId` handed out by this document stays
/// valid for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(&["document"], "", OPAQUE)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Create a node and append it as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, classes: &[&str], text: &str, opacity: f32) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(classes, text, opacity);
        node.parent = Some(parent);
        self.nodes.push(node);
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        id
    }

    /// Build one complete copy widget under the root and return its block.
    ///
    /// Layout mirrors the page the widget was designed for:
    ///
    /// ```text
    /// copyable-text-block
    /// ├── copyable-text-caption   (only when a caption is given)
    /// ├── copyable-text
    /// ├── copyable-text-button
    /// │   ├── clipboard-copy-icon
    /// │   ├── clipboard-check-icon
    /// │   └── clipboard-x-icon
    /// ├── copy-successful-message
    /// └── copy-failure-message
    /// ```
    pub fn append_copyable_block(&mut self, caption: Option<&str>, payload: &str) -> NodeId {
        let root = self.root;
        let block = self.append(root, &[COPYABLE_TEXT_BLOCK], "", OPAQUE);

        if let Some(caption) = caption {
            self.append(block, &[COPYABLE_TEXT_CAPTION], caption, OPAQUE);
        }
        self.append(block, &[COPYABLE_TEXT], payload, OPAQUE);

        let button = self.append(block, &[COPYABLE_TEXT_BUTTON], "", OPAQUE);
        self.append(button, &[CLIPBOARD_COPY_ICON], "⧉", OPAQUE);
        self.append(button, &[CLIPBOARD_CHECK_ICON], "✓", TRANSPARENT);
        self.append(button, &[CLIPBOARD_X_ICON], "✗", TRANSPARENT);

        self.append(block, &[COPY_SUCCESSFUL_MESSAGE], SUCCESS_MESSAGE_TEXT, TRANSPARENT);
        self.append(block, &[COPY_FAILURE_MESSAGE], FAILURE_MESSAGE_TEXT, TRANSPARENT);

        block
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).is_some_and(|n| n.has_class(class))
    }

    /// Nearest inclusive ancestor of `id` carrying `class`.
    pub fn closest(&self, id: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(cur) = current {
            let node = self.node(cur)?;
            if node.has_class(class) {
                return Some(cur);
            }
            current = node.parent;
        }
        None
    }

    /// First descendant of `scope` (pre-order, `scope` itself excluded) carrying `class`.
    pub fn query(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| self.has_class(id, class))
    }

    /// All descendants of `scope` carrying `class`, in document order.
    pub fn query_all(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.node(scope) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };

        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.text.as_str())
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.text = text.into();
        }
    }

    pub fn set_opacity(&mut self, id: NodeId, opacity: f32) {
        if let Some(node) = self.node_mut(id) {
            node.opacity = opacity;
        }
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_visible)
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.disabled)
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        if let Some(node) = self.node_mut(id) {
            node.disabled = disabled;
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
