//! Live-visual capability.

use std::any::Any;
use std::fmt;

use glam::Vec2;

use crate::node::SceneNode;
use crate::transform::SideValues;

/// Render-layer mirror of a scene node.
///
/// One implementation is attached to every node after a scene is loaded.
/// Mutation commands write through both the node and this mirror; the node
/// stays the source of truth, the mirror is derived state.
pub trait Visual: fmt::Debug {
    fn set_visible(&mut self, visible: bool);
    fn set_position(&mut self, position: Vec2);
    fn set_rotation(&mut self, radians: f32);
    fn set_pivot(&mut self, pivot: Vec2);
    fn set_size(&mut self, width: f32, height: f32);
    fn set_anchors(&mut self, anchors: SideValues);
    fn set_offsets(&mut self, offsets: SideValues);

    /// Recover the concrete mirror type.
    fn as_any(&self) -> &dyn Any;
}

/// A [`Visual`] with no render target behind it.
///
/// Holds the mirrored state as plain fields. Used by headless hosts and by
/// tests asserting that mutations keep both representations in sync.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetachedVisual {
    pub visible: bool,
    pub position: Vec2,
    pub rotation: f32,
    pub pivot: Vec2,
    pub width: f32,
    pub height: f32,
    pub anchors: SideValues,
    pub offsets: SideValues,
}

impl DetachedVisual {
    /// Seed the mirror from the node it will shadow.
    pub fn from_node(node: &SceneNode) -> Self {
        Self {
            visible: node.visible,
            position: node.transform.position,
            rotation: node.transform.rotation,
            pivot: node.transform.pivot,
            width: node.transform.width,
            height: node.transform.height,
            anchors: node.transform.anchors,
            offsets: node.transform.offsets,
        }
    }
}

impl Visual for DetachedVisual {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn set_anchors(&mut self, anchors: SideValues) {
        self.anchors = anchors;
    }

    fn set_offsets(&mut self, offsets: SideValues) {
        self.offsets = offsets;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
