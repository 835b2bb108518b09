//! Built-in console commands.
//!
//! Navigation and inspection commands plus the `set` mutation subtree from
//! [`crate::set_commands`].

use crate::command::{missing_node, Command, CommandError, Context};
use crate::dispatch::{filter_prefix, resolve};
use crate::editor::Editor;
use crate::set_commands::set_command;

/// Build the full command registry.
///
/// Called once at startup; the tree is immutable afterwards. Registry order
/// is the order help and completion enumerate.
pub fn registry() -> Vec<Command> {
    vec![
        cd_command(),
        help_command(),
        ls_command(),
        set_command(),
        write_command(),
    ]
}

fn cd_command() -> Command {
    Command::new("cd", "change active object up or down")
        .with_suggest(cd_suggestions)
        .with_run(cd_run)
}

fn cd_suggestions(editor: &dyn Editor, partial: &[&str]) -> Vec<String> {
    if partial.len() != 1 {
        return Vec::new();
    }

    let graph = editor.graph();
    let names = graph
        .nodes_under(editor.active())
        .iter()
        .filter_map(|&id| graph.get(id))
        .map(|node| node.name.as_str());
    filter_prefix(partial[0], names)
}

fn cd_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    if args.is_empty() {
        ctx.editor.set_active(None);
        return Ok(String::new());
    }

    if args[0] == ".." {
        if let Some(active) = ctx.editor.active() {
            let parent = ctx.editor.graph().parent(active);
            ctx.editor.set_active(parent);
        }
        return Ok(String::new());
    }

    // An unknown name is ignored on purpose; navigation stays forgiving.
    let target = ctx.editor.graph().find_by_name(ctx.editor.active(), args[0]);
    if target.is_some() {
        ctx.editor.set_active(target);
    }
    Ok(String::new())
}

fn help_command() -> Command {
    Command::new("help", "print help on running a command").with_run(help_run)
}

fn help_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    if args.is_empty() {
        let longest = ctx.commands.iter().map(|c| c.key.len()).max().unwrap_or(0);
        let mut out = String::new();
        for command in ctx.commands {
            out.push_str(&format!("{:<longest$} {}\n", command.key, command.help));
        }
        return Ok(out);
    }

    match resolve(None, ctx.commands, args) {
        (Some(command), _) => Ok(command.help.to_string()),
        (None, _) => Err(CommandError::NotFound(args.join(" "))),
    }
}

fn ls_command() -> Command {
    Command::new("ls", "list the current object and children names").with_run(ls_run)
}

fn ls_run(ctx: &mut Context<'_>, _args: &[&str]) -> Result<String, CommandError> {
    let graph = ctx.editor.graph();
    let mut out = String::new();

    let scope = match ctx.editor.active() {
        Some(active) => {
            let node = graph.get(active).ok_or_else(|| missing_node(active))?;
            out.push_str(&format!(".{}\n", node.name));
            graph.children(active)
        }
        None => {
            out.push_str("No selection\n");
            graph.roots()
        }
    };

    for &child in scope {
        if let Some(node) = graph.get(child) {
            out.push_str(&format!("./{}\n", node.name));
        }
    }

    Ok(out)
}

fn write_command() -> Command {
    Command::new("write", "save scene to disk").with_run(write_run)
}

fn write_run(ctx: &mut Context<'_>, _args: &[&str]) -> Result<String, CommandError> {
    frost_scene::save_scene(ctx.editor.graph(), ctx.editor.path())?;
    Ok("scene saved".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEditor;
    use crate::Console;

    #[test]
    fn cd_without_args_clears_active() {
        let console = Console::new();
        let mut editor = TestEditor::sample();
        editor.active = Some(editor.named("hud"));

        console.run(&mut editor, "cd").unwrap();
        assert!(editor.active.is_none());
    }

    #[test]
    fn cd_into_child_and_back_restores_prior_active() {
        let console = Console::new();
        let mut editor = TestEditor::sample();
        let hud = editor.named("hud");

        console.run(&mut editor, "cd hud").unwrap();
        assert_eq!(editor.active, Some(hud));

        console.run(&mut editor, "cd score").unwrap();
        assert_eq!(editor.active, Some(editor.named("score")));

        console.run(&mut editor, "cd ..").unwrap();
        assert_eq!(editor.active, Some(hud));
    }

    #[test]
    fn cd_dotdot_at_root_is_noop() {
        let console = Console::new();
        let mut editor = TestEditor::sample();

        console.run(&mut editor, "cd ..").unwrap();
        assert!(editor.active.is_none());
    }

    #[test]
    fn cd_unknown_name_is_silently_ignored() {
        let console = Console::new();
        let mut editor = TestEditor::sample();
        let hud = editor.named("hud");
        editor.active = Some(hud);

        let output = console.run(&mut editor, "cd nothere").unwrap();
        assert!(output.is_empty());
        assert_eq!(editor.active, Some(hud));
    }

    #[test]
    fn cd_only_sees_current_siblings() {
        let console = Console::new();
        let mut editor = TestEditor::sample();

        // score is a child of hud, not a root; cd from the root ignores it.
        console.run(&mut editor, "cd score").unwrap();
        assert!(editor.active.is_none());
    }

    #[test]
    fn ls_at_root_lists_root_nodes() {
        let console = Console::new();
        let mut editor = TestEditor::sample();

        let output = console.run(&mut editor, "ls").unwrap();
        assert_eq!(output, "No selection\n./hud\n./background\n");
    }

    #[test]
    fn ls_with_active_lists_self_and_children() {
        let console = Console::new();
        let mut editor = TestEditor::sample();
        editor.active = Some(editor.named("hud"));

        let output = console.run(&mut editor, "ls").unwrap();
        assert_eq!(output, ".hud\n./score\n./health\n");
    }

    #[test]
    fn help_lists_every_top_level_command() {
        let console = Console::new();
        let mut editor = TestEditor::sample();

        let output = console.run(&mut editor, "help").unwrap();
        for key in ["cd", "help", "ls", "set", "write"] {
            assert!(output.contains(key), "missing {key} in:\n{output}");
        }
        // Keys are padded to the longest one.
        assert!(output.contains("cd    change active object"));
    }

    #[test]
    fn help_resolves_nested_commands() {
        let console = Console::new();
        let mut editor = TestEditor::sample();

        let output = console.run(&mut editor, "help set position").unwrap();
        assert_eq!(output, "set the position of our object");
    }

    #[test]
    fn help_unknown_command_names_the_text() {
        let console = Console::new();
        let mut editor = TestEditor::sample();

        let err = console.run(&mut editor, "help bogus").unwrap_err();
        assert!(matches!(err, CommandError::NotFound(text) if text == "bogus"));
    }

    #[test]
    fn cd_suggestions_filter_sibling_names() {
        let console = Console::new();
        let mut editor = TestEditor::sample();

        assert_eq!(console.suggestions(&editor, "cd h"), vec!["hud"]);
        assert_eq!(console.suggestions(&editor, "cd B"), vec!["background"]);

        editor.active = Some(editor.named("hud"));
        assert_eq!(
            console.suggestions(&editor, "cd "),
            Vec::<String>::new(),
            "a trailing space leaves no partial argument"
        );
        assert_eq!(console.suggestions(&editor, "cd s"), vec!["score"]);
    }

    #[test]
    fn top_level_suggestions_follow_registry_order() {
        let console = Console::new();
        let editor = TestEditor::sample();

        let all = console.suggestions(&editor, " ");
        assert_eq!(all, vec!["cd", "help", "ls", "set", "write"]);
    }
}
