//! Test fixtures shared by unit tests.

use std::path::{Path, PathBuf};

use frost_scene::{DetachedVisual, NodeId, NodeKind, SceneGraph, SceneNode, Vec2};

use crate::editor::Editor;

/// In-memory editor over a small fixed scene:
/// `hud` (with `score` and `health`) and `background` at the root.
pub(crate) struct TestEditor {
    pub graph: SceneGraph,
    pub active: Option<NodeId>,
    pub path: PathBuf,
}

impl TestEditor {
    pub fn sample() -> Self {
        let mut graph = SceneGraph::new();
        graph.metadata.name = "sample".to_string();

        let hud = graph.add_root(SceneNode::new("hud", NodeKind::Empty));

        let mut score = SceneNode::new("score", NodeKind::Label);
        score.transform.position = Vec2::new(10.0, 20.0);
        score.transform.width = 64.0;
        score.transform.height = 16.0;
        graph.add_child(hud, score);

        graph.add_child(hud, SceneNode::new("health", NodeKind::Sprite));
        graph.add_root(SceneNode::new("background", NodeKind::Sprite));

        graph.attach_visuals(&mut |node| Box::new(DetachedVisual::from_node(node)));

        Self {
            graph,
            active: None,
            path: PathBuf::from("sample.json"),
        }
    }

    /// Id of the uniquely named node, searched across the whole arena.
    pub fn named(&self, name: &str) -> NodeId {
        self.graph
            .node_ids()
            .find(|&id| self.graph.get(id).unwrap().name == name)
            .unwrap()
    }

    /// The detached visual attached to a node, for mirror assertions.
    pub fn visual(&self, id: NodeId) -> &DetachedVisual {
        self.graph
            .get(id)
            .unwrap()
            .visual
            .as_deref()
            .unwrap()
            .as_any()
            .downcast_ref()
            .unwrap()
    }
}

impl Editor for TestEditor {
    fn active(&self) -> Option<NodeId> {
        self.active
    }

    fn set_active(&mut self, node: Option<NodeId>) {
        self.active = node;
    }

    fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
