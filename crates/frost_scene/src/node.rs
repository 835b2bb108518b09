//! Scene node representation.

use serde::{Deserialize, Serialize};

use crate::transform::Transform;
use crate::visual::Visual;

/// Identifier of a node within a [`crate::SceneGraph`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Variant of a scene node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    #[default]
    Empty,
    Sprite,
    Label,
}

/// A single node of the editable scene tree.
///
/// The node is the source of truth for its name, visibility and transform.
/// The attached [`Visual`] mirrors those values to the render layer and must
/// be updated on every mutation; it is never persisted.
#[derive(Debug)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    /// Sprite or font key, depending on `kind`.
    pub content: Option<String>,
    pub use_window_size: bool,
    pub visible: bool,
    pub transform: Transform,
    pub visual: Option<Box<dyn Visual>>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            content: None,
            use_window_size: false,
            visible: true,
            transform: Transform::default(),
            visual: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// The owning parent, if this node is not a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ordered child ids.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
