//! Scene persistence to and from JSON documents.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::graph::{SceneGraph, SceneMetadata};
use crate::node::{NodeId, NodeKind, SceneNode};
use crate::transform::{SideValues, Transform};

/// Scene persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A scene file document.
///
/// Parent links are never persisted; they are derived when the document is
/// loaded into a [`SceneGraph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneData {
    pub metadata: SceneMetadata,
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<NodeData>,
}

/// One node of the persisted tree, children nested in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData {
    pub name: String,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub use_window_size: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub transform: TransformData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeData>,
}

fn default_visible() -> bool {
    true
}

/// Persisted transform fields, all defaulted on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformData {
    pub position: [f32; 2],
    pub rotation: f32,
    pub pivot: [f32; 2],
    pub anchors: SideValues,
    pub offsets: SideValues,
    pub width: f32,
    pub height: f32,
}

impl From<TransformData> for Transform {
    fn from(data: TransformData) -> Self {
        Self {
            position: Vec2::from(data.position),
            rotation: data.rotation,
            pivot: Vec2::from(data.pivot),
            anchors: data.anchors,
            offsets: data.offsets,
            width: data.width,
            height: data.height,
        }
    }
}

impl From<Transform> for TransformData {
    fn from(transform: Transform) -> Self {
        Self {
            position: transform.position.into(),
            rotation: transform.rotation,
            pivot: transform.pivot.into(),
            anchors: transform.anchors,
            offsets: transform.offsets,
            width: transform.width,
            height: transform.height,
        }
    }
}

impl SceneGraph {
    /// Build the runtime graph from a persisted document, deriving parent
    /// links from the nesting.
    pub fn from_data(data: SceneData) -> Self {
        let mut graph = SceneGraph::new();
        graph.metadata = data.metadata;
        graph.content = data.content;
        for node in data.nodes {
            insert(&mut graph, None, node);
        }
        graph
    }

    /// Re-nest the arena into a persistable document.
    pub fn to_data(&self) -> SceneData {
        SceneData {
            metadata: self.metadata.clone(),
            content: self.content.clone(),
            nodes: self
                .roots()
                .iter()
                .filter_map(|&id| self.node_to_data(id))
                .collect(),
        }
    }

    fn node_to_data(&self, id: NodeId) -> Option<NodeData> {
        let node = self.get(id)?;
        Some(NodeData {
            name: node.name.clone(),
            kind: node.kind,
            content: node.content.clone(),
            use_window_size: node.use_window_size,
            visible: node.visible,
            transform: node.transform.into(),
            children: node
                .children()
                .iter()
                .filter_map(|&child| self.node_to_data(child))
                .collect(),
        })
    }
}

fn insert(graph: &mut SceneGraph, parent: Option<NodeId>, data: NodeData) {
    let NodeData {
        name,
        kind,
        content,
        use_window_size,
        visible,
        transform,
        children,
    } = data;

    if graph.find_by_name(parent, &name).is_some() {
        log::warn!("duplicate sibling name '{}' in scene document", name);
    }

    let mut node = SceneNode::new(name, kind);
    node.content = content;
    node.use_window_size = use_window_size;
    node.visible = visible;
    node.transform = transform.into();

    let id = match parent {
        None => Some(graph.add_root(node)),
        Some(p) => graph.add_child(p, node),
    };
    if let Some(id) = id {
        for child in children {
            insert(graph, Some(id), child);
        }
    }
}

/// Load a scene document from `path` and derive the runtime graph.
pub fn load_scene(path: &Path) -> Result<SceneGraph, SceneError> {
    let bytes = fs::read(path)?;
    let data: SceneData = serde_json::from_slice(&bytes)?;
    let graph = SceneGraph::from_data(data);
    log::debug!(
        "loaded scene '{}' ({} nodes) from {}",
        graph.metadata.name,
        graph.len(),
        path.display()
    );
    Ok(graph)
}

/// Persist the graph back to `path` as a scene document.
pub fn save_scene(graph: &SceneGraph, path: &Path) -> Result<(), SceneError> {
    let data = graph.to_data();
    let bytes = serde_json::to_vec_pretty(&data)?;
    fs::write(path, bytes)?;
    log::debug!("saved scene '{}' to {}", graph.metadata.name, path.display());
    Ok(())
}
