//! # Frost Editor
//!
//! Host for the scene console: concrete editor state over one open scene,
//! project workspace files, and a line-oriented REPL feeding the
//! interpreter in [`frost_shell`].

pub mod workspace;

use std::path::{Path, PathBuf};

use frost_scene::{load_scene, DetachedVisual, NodeId, SceneError, SceneGraph};
use frost_shell::{Console, Editor};

/// Editor state for one open scene.
///
/// Owns the scene graph and the active selection; replaced wholesale when a
/// different scene is opened.
pub struct SceneEditor {
    graph: SceneGraph,
    active: Option<NodeId>,
    path: PathBuf,
}

impl SceneEditor {
    /// Load the scene document at `path` and attach a live visual to every
    /// node. Headless hosts get [`DetachedVisual`] mirrors; a render layer
    /// would use [`SceneGraph::attach_visuals`] with its own factory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SceneError> {
        let path = path.into();
        let mut graph = load_scene(&path)?;
        graph.attach_visuals(&mut |node| Box::new(DetachedVisual::from_node(node)));
        log::info!(
            "opened scene '{}' ({} nodes)",
            graph.metadata.name,
            graph.len()
        );
        Ok(Self {
            graph,
            active: None,
            path,
        })
    }

    /// Wrap an already-built graph; visuals are attached here too.
    pub fn from_graph(mut graph: SceneGraph, path: impl Into<PathBuf>) -> Self {
        graph.attach_visuals(&mut |node| Box::new(DetachedVisual::from_node(node)));
        Self {
            graph,
            active: None,
            path: path.into(),
        }
    }
}

impl Editor for SceneEditor {
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

/// Line-oriented console session over one editor.
pub struct Repl {
    console: Console,
    editor: SceneEditor,
    running: bool,
}

impl Repl {
    pub fn new(editor: SceneEditor) -> Self {
        Self {
            console: Console::new(),
            editor,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn editor(&self) -> &SceneEditor {
        &self.editor
    }

    /// Prompt shows the active node name, `/` at the root.
    pub fn prompt(&self) -> String {
        let name = self
            .editor
            .active()
            .and_then(|id| self.editor.graph().get(id))
            .map(|node| node.name.clone());
        match name {
            Some(name) => format!("{name}> "),
            None => "/> ".to_string(),
        }
    }

    /// Execute one input line, rendering failures as output text.
    pub fn process_line(&mut self, line: &str) -> String {
        let line = line.trim();
        if line.is_empty() {
            return String::new();
        }

        if line == "exit" || line == "quit" {
            self.running = false;
            return "goodbye".to_string();
        }

        match self.console.run(&mut self.editor, line) {
            Ok(output) => output,
            Err(err) => format!("error: {err}"),
        }
    }

    /// Completion candidates for a partial input line.
    pub fn complete(&self, partial: &str) -> Vec<String> {
        self.console.suggestions(&self.editor, partial)
    }
}
