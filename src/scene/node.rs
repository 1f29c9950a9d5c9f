use crate::scene::NodeHandle;
use crate::scene::transform::Transform;

/// A scene node.
///
/// Nodes form a tree through parent-child relationships. Page models are
/// instantiated as subtrees hanging below an anchor node, so hiding the anchor
/// hides the whole page.
#[derive(Debug, Clone)]
pub struct Node {
    /// Optional name (glTF node name, `page{n}`, `anchor{n}`)
    pub name: Option<String>,
    /// Parent node handle (None for root nodes)
    pub(crate) parent: Option<NodeHandle>,
    /// Child node handles
    pub(crate) children: Vec<NodeHandle>,
    /// Transform relative to the parent
    pub transform: Transform,
    /// Visibility flag, inherited by the subtree
    pub visible: bool,
}

impl Node {
    /// Creates a new visible node with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
        }
    }

    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
