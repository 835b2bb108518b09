//! # Frost Scene
//!
//! Scene graph model for the Frost editor:
//! - Arena-based node tree with parent back-references
//! - Layout transforms (position, rotation, pivot, anchors, offsets, size)
//! - JSON scene documents (load/save, parent links derived on load)
//! - The [`Visual`] capability mirroring node state to a render layer
//!
//! ## Ownership
//!
//! Nodes live in a [`SceneGraph`] arena and refer to each other by
//! [`NodeId`]. A node owns its children list; the parent link is a plain
//! arena id used only for upward navigation. The render-facing mirror is a
//! boxed [`Visual`] attached to each node after load and is never persisted.

pub mod data;
pub mod graph;
pub mod node;
pub mod transform;
pub mod visual;

pub use data::{load_scene, save_scene, NodeData, SceneData, SceneError, TransformData};
pub use graph::{SceneGraph, SceneMetadata};
pub use node::{NodeId, NodeKind, SceneNode};
pub use transform::{SideValues, Transform};
pub use visual::{DetachedVisual, Visual};

pub use glam::Vec2;
