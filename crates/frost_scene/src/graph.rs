//! Scene graph arena.

use serde::{Deserialize, Serialize};

use crate::node::{NodeId, SceneNode};
use crate::visual::Visual;

/// Scene-level metadata carried alongside the node tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
}

/// Ordered tree of scene nodes with parent back-references.
///
/// Nodes live in an arena indexed by [`NodeId`]. The parent link is an arena
/// id, never a second owning pointer, so dropping the graph tears the whole
/// tree down in one pass. Invariant: every non-root node's parent is exactly
/// the node whose children list contains it.
#[derive(Debug, Default)]
pub struct SceneGraph {
    pub metadata: SceneMetadata,
    /// Content keys this scene depends on (sprites, fonts).
    pub content: Vec<String>,
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    /// Ordered top-level node ids.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Ordered child ids of `id`, or empty when `id` is unknown.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children()).unwrap_or_default()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// The sibling list under `parent`: its children, or the roots when
    /// `parent` is `None`. This is the scope `cd` and `ls` operate on.
    pub fn nodes_under(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            Some(id) => self.children(id),
            None => self.roots(),
        }
    }

    /// Find a node by exact name among the siblings under `parent`.
    pub fn find_by_name(&self, parent: Option<NodeId>, name: &str) -> Option<NodeId> {
        self.nodes_under(parent)
            .iter()
            .copied()
            .find(|&id| self.get(id).is_some_and(|n| n.name == name))
    }

    /// Append `node` as a new root.
    pub fn add_root(&mut self, node: SceneNode) -> NodeId {
        let id = self.push(node, None);
        self.roots.push(id);
        id
    }

    /// Append `node` as the last child of `parent`.
    ///
    /// Returns `None` when `parent` is not in the graph.
    pub fn add_child(&mut self, parent: NodeId, node: SceneNode) -> Option<NodeId> {
        if self.get(parent).is_none() {
            return None;
        }
        let id = self.push(node, Some(parent));
        self.nodes[parent.index()].children.push(id);
        Some(id)
    }

    fn push(&mut self, mut node: SceneNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = parent;
        self.nodes.push(node);
        id
    }

    /// All node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Attach one live visual per node, seeded by `factory`.
    ///
    /// Called once after a scene is loaded; the render layer supplies the
    /// factory, headless hosts use [`crate::DetachedVisual`].
    pub fn attach_visuals(&mut self, factory: &mut dyn FnMut(&SceneNode) -> Box<dyn Visual>) {
        for node in &mut self.nodes {
            node.visual = Some(factory(node));
        }
    }
}
