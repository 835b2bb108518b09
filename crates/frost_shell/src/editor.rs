//! Editor adapter.

use std::path::Path;

use frost_scene::{NodeId, SceneGraph};

/// The narrow interface commands use to read and mutate host state.
///
/// Implemented by the editor host. Commands never see rendering, windowing
/// or input handling, only the scene graph, the active selection and the
/// persistence target.
pub trait Editor {
    /// The currently selected node, the console's working directory.
    fn active(&self) -> Option<NodeId>;

    fn set_active(&mut self, node: Option<NodeId>);

    fn graph(&self) -> &SceneGraph;

    fn graph_mut(&mut self) -> &mut SceneGraph;

    /// Persistence target for `write`.
    fn path(&self) -> &Path;
}
