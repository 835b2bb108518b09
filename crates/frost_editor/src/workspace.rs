//! Project workspace files.
//!
//! A project keeps its editable data under a `.frost/` directory: shared
//! asset and content registries plus one JSON document per scene. The
//! underscore-prefixed registry files are never scenes themselves.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use frost_scene::SceneError;

/// Directory holding workspace files, relative to the project root.
pub const WORKSPACE_DIR: &str = ".frost";
pub const ASSETS_FILE: &str = "_assets.json";
pub const CONTENTS_FILE: &str = "_content.json";
pub const METADATA_FILE: &str = "_metadata.json";

/// Raw file kind an asset is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Image,
    OpenType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub file: String,
}

/// How an asset is presented in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Sprite,
    SlicedSprite,
    Font,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteContent {
    #[serde(default)]
    pub asset: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontContent {
    #[serde(default)]
    pub asset: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub dpi: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<SpriteContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub assets_path: String,
    #[serde(default)]
    pub scenes_path: String,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SceneError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn load_assets(root: &Path) -> Result<HashMap<String, Asset>, SceneError> {
    read_json(&root.join(WORKSPACE_DIR).join(ASSETS_FILE))
}

pub fn load_content(root: &Path) -> Result<HashMap<String, Content>, SceneError> {
    read_json(&root.join(WORKSPACE_DIR).join(CONTENTS_FILE))
}

pub fn load_metadata(root: &Path) -> Result<Metadata, SceneError> {
    read_json(&root.join(WORKSPACE_DIR).join(METADATA_FILE))
}

/// Path of the named scene document inside the workspace.
pub fn scene_path(root: &Path, name: &str) -> PathBuf {
    root.join(WORKSPACE_DIR).join(format!("{name}.json"))
}

/// Scene names available in the workspace, registry files skipped and the
/// `.json` suffix trimmed. Sorted for a stable listing.
pub fn existing_scenes(root: &Path) -> Result<Vec<String>, SceneError> {
    let mut scenes = Vec::new();
    for entry in fs::read_dir(root.join(WORKSPACE_DIR))? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == ASSETS_FILE || name == CONTENTS_FILE || name == METADATA_FILE {
            continue;
        }
        scenes.push(name.trim_end_matches(".json").to_string());
    }
    scenes.sort();
    Ok(scenes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let ws = dir.path().join(WORKSPACE_DIR);
        fs::create_dir(&ws).unwrap();

        fs::write(
            ws.join(ASSETS_FILE),
            r#"{ "ui": { "type": "Image", "file": "ui.png" } }"#,
        )
        .unwrap();
        fs::write(
            ws.join(CONTENTS_FILE),
            r#"{ "panel": { "type": "Sprite", "sprite": { "asset": "ui" } } }"#,
        )
        .unwrap();
        fs::write(
            ws.join(METADATA_FILE),
            r#"{ "assetsPath": "assets", "scenesPath": "scenes" }"#,
        )
        .unwrap();
        fs::write(ws.join("menu.json"), "{}").unwrap();
        fs::write(ws.join("game.json"), "{}").unwrap();
        dir
    }

    #[test]
    fn existing_scenes_skips_registry_files() {
        let dir = workspace_root();
        let scenes = existing_scenes(dir.path()).unwrap();
        assert_eq!(scenes, vec!["game".to_string(), "menu".to_string()]);
    }

    #[test]
    fn registries_parse() {
        let dir = workspace_root();

        let assets = load_assets(dir.path()).unwrap();
        assert_eq!(assets["ui"].kind, AssetKind::Image);
        assert_eq!(assets["ui"].file, "ui.png");

        let content = load_content(dir.path()).unwrap();
        assert_eq!(content["panel"].kind, ContentKind::Sprite);
        assert_eq!(content["panel"].sprite.as_ref().unwrap().asset, "ui");

        let metadata = load_metadata(dir.path()).unwrap();
        assert_eq!(metadata.assets_path, "assets");
        assert_eq!(metadata.scenes_path, "scenes");
    }

    #[test]
    fn missing_workspace_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            existing_scenes(dir.path()),
            Err(SceneError::Io(_))
        ));
    }
}
