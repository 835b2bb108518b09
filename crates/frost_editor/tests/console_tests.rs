//! End-to-end tests for the scene console.
//!
//! Drives the full stack: scene document on disk, editor state, command
//! interpreter, live-visual mirrors, persistence.

use std::fs;
use std::path::PathBuf;

use frost_editor::{Repl, SceneEditor};
use frost_scene::{load_scene, DetachedVisual, NodeId, Vec2};
use frost_shell::{CommandError, Console, Editor};

const SCENE_JSON: &str = r#"{
    "metadata": { "name": "menu" },
    "content": ["ui-atlas", "main-font"],
    "nodes": [
        {
            "name": "panel",
            "kind": "Sprite",
            "content": "ui-atlas",
            "transform": { "position": [10.0, 0.0], "width": 200.0, "height": 100.0 },
            "children": [
                { "name": "title", "kind": "Label", "content": "main-font" },
                { "name": "start", "kind": "Sprite" }
            ]
        },
        { "name": "backdrop", "kind": "Sprite", "visible": false }
    ]
}"#;

struct Fixture {
    _dir: tempfile::TempDir,
    path: PathBuf,
    console: Console,
    editor: SceneEditor,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    fs::write(&path, SCENE_JSON).unwrap();

    let editor = SceneEditor::open(&path).unwrap();
    Fixture {
        _dir: dir,
        path,
        console: Console::new(),
        editor,
    }
}

fn mirror(editor: &SceneEditor, id: NodeId) -> &DetachedVisual {
    editor
        .graph()
        .get(id)
        .unwrap()
        .visual
        .as_deref()
        .unwrap()
        .as_any()
        .downcast_ref()
        .unwrap()
}

#[test]
fn open_derives_parents_and_attaches_visuals() {
    let f = fixture();
    let graph = f.editor.graph();

    let panel = graph.find_by_name(None, "panel").unwrap();
    let title = graph.find_by_name(Some(panel), "title").unwrap();
    assert_eq!(graph.parent(title), Some(panel));

    for id in graph.node_ids() {
        assert!(graph.get(id).unwrap().visual.is_some());
    }

    // Mirrors are seeded from the document.
    assert_eq!(mirror(&f.editor, panel).position, Vec2::new(10.0, 0.0));
    let backdrop = graph.find_by_name(None, "backdrop").unwrap();
    assert!(!mirror(&f.editor, backdrop).visible);
}

#[test]
fn cd_walks_down_and_up_the_tree() {
    let mut f = fixture();

    f.console.run(&mut f.editor, "cd panel").unwrap();
    let panel = f.editor.active().unwrap();

    f.console.run(&mut f.editor, "cd title").unwrap();
    assert_ne!(f.editor.active(), Some(panel));

    f.console.run(&mut f.editor, "cd ..").unwrap();
    assert_eq!(f.editor.active(), Some(panel));

    f.console.run(&mut f.editor, "cd").unwrap();
    assert_eq!(f.editor.active(), None);
}

#[test]
fn ls_lists_scope_with_prefixes() {
    let mut f = fixture();

    let output = f.console.run(&mut f.editor, "ls").unwrap();
    assert_eq!(output, "No selection\n./panel\n./backdrop\n");

    f.console.run(&mut f.editor, "cd panel").unwrap();
    let output = f.console.run(&mut f.editor, "ls").unwrap();
    assert_eq!(output, ".panel\n./title\n./start\n");
}

#[test]
fn set_position_updates_model_and_mirror_together() {
    let mut f = fixture();

    // Without a selection the command fails and nothing moves.
    let err = f.console.run(&mut f.editor, "set position x + 5").unwrap_err();
    assert!(matches!(err, CommandError::NoActiveNode));

    f.console.run(&mut f.editor, "cd panel").unwrap();
    f.console.run(&mut f.editor, "set position x + 5").unwrap();

    let panel = f.editor.active().unwrap();
    let node = f.editor.graph().get(panel).unwrap();
    assert_eq!(node.transform.position.x, 15.0);
    assert_eq!(mirror(&f.editor, panel).position.x, 15.0);
}

#[test]
fn write_persists_mutations() {
    let mut f = fixture();

    f.console.run(&mut f.editor, "cd panel").unwrap();
    f.console.run(&mut f.editor, "set width = 300").unwrap();
    f.console.run(&mut f.editor, "set name menu_panel").unwrap();

    let output = f.console.run(&mut f.editor, "write").unwrap();
    assert_eq!(output, "scene saved");

    let reloaded = load_scene(&f.path).unwrap();
    let panel = reloaded.find_by_name(None, "menu_panel").unwrap();
    assert_eq!(reloaded.get(panel).unwrap().transform.width, 300.0);
    // Children and untouched siblings survive the round trip.
    assert!(reloaded.find_by_name(Some(panel), "title").is_some());
    assert!(reloaded.find_by_name(None, "backdrop").is_some());
}

#[test]
fn write_failure_is_a_persistence_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    fs::write(&path, SCENE_JSON).unwrap();

    let graph = load_scene(&path).unwrap();
    let gone = dir.path().join("missing").join("menu.json");
    let mut editor = SceneEditor::from_graph(graph, &gone);

    let console = Console::new();
    let err = console.run(&mut editor, "write").unwrap_err();
    assert!(matches!(err, CommandError::Persistence(_)));
}

#[test]
fn suggestions_span_structural_and_positional_modes() {
    let f = fixture();

    assert_eq!(
        f.console.suggestions(&f.editor, "s"),
        vec!["set".to_string()]
    );
    assert_eq!(
        f.console.suggestions(&f.editor, "set p"),
        vec!["pivot".to_string(), "position".to_string()]
    );
    assert_eq!(
        f.console.suggestions(&f.editor, "cd PA"),
        vec!["panel".to_string()]
    );
    assert_eq!(
        f.console.suggestions(&f.editor, "set position x "),
        vec!["x".to_string()]
    );
}

#[test]
fn repl_session_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    fs::write(&path, SCENE_JSON).unwrap();

    let mut repl = Repl::new(SceneEditor::open(&path).unwrap());

    assert_eq!(repl.process_line("cd panel"), "");
    assert_eq!(repl.prompt(), "panel> ");

    let output = repl.process_line("set position q + 5");
    assert!(output.starts_with("error: argument 0 is invalid"));

    assert_eq!(repl.process_line("set position x = 42"), "");
    assert_eq!(repl.process_line("write"), "scene saved");

    assert_eq!(repl.complete("se"), vec!["set".to_string()]);

    repl.process_line("exit");
    assert!(!repl.is_running());
}
