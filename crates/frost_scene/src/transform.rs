//! Layout transform of a scene node.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One value per rectangle side, used for anchors and offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl SideValues {
    pub fn splat(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

/// Layout state of a scene node.
///
/// Every field is independently settable from the console; anchors and
/// offsets address individual sides, position and pivot individual axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
    pub pivot: Vec2,
    pub anchors: SideValues,
    pub offsets: SideValues,
    pub width: f32,
    pub height: f32,
}
