//! Frost scene console binary.
//!
//! Opens a scene from the project workspace and drives the console over
//! stdin, one command per line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use frost_editor::{workspace, Repl, SceneEditor};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = PathBuf::from(".");
    let scene = match std::env::args().nth(1) {
        Some(name) => name,
        None => match workspace::existing_scenes(&root) {
            Ok(scenes) => match scenes.into_iter().next() {
                Some(first) => first,
                None => {
                    eprintln!("no scenes found under {}", workspace::WORKSPACE_DIR);
                    return ExitCode::FAILURE;
                }
            },
            Err(err) => {
                eprintln!("failure to find scenes: {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    let path = workspace::scene_path(&root, &scene);
    let editor = match SceneEditor::open(&path) {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("unable to open {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    log::info!("editing scene '{scene}', type 'help' for commands");

    let mut repl = Repl::new(editor);
    let stdin = io::stdin();
    while repl.is_running() {
        print!("{}", repl.prompt());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let output = repl.process_line(&line);
                if output.is_empty() {
                    continue;
                }
                if output.ends_with('\n') {
                    print!("{output}");
                } else {
                    println!("{output}");
                }
            }
            Err(err) => {
                eprintln!("read error: {err}");
                break;
            }
        }
    }

    ExitCode::SUCCESS
}
