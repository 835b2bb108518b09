//! Command resolution and the suggestion engine.

use crate::command::Command;
use crate::editor::Editor;

/// Walk `commands` matching consecutive tokens against sibling keys and
/// return the deepest command reached plus the unconsumed tokens.
///
/// `base` is the closest ancestor resolved so far and is returned when no
/// sibling matches the next token; at the top level that means no command at
/// all. A matched leaf consumes its token and keeps the rest as arguments;
/// a matched interior command with no tokens left is returned with none.
///
/// `tokens` must be non-empty (splitting any string on spaces yields at
/// least one token).
pub fn resolve<'c, 't>(
    base: Option<&'c Command>,
    commands: &'c [Command],
    tokens: &'t [&'t str],
) -> (Option<&'c Command>, &'t [&'t str]) {
    for command in commands {
        if tokens[0] != command.key {
            continue;
        }

        if command.subcommands.is_empty() {
            return (Some(command), &tokens[1..]);
        }

        if tokens.len() > 1 {
            return resolve(Some(command), &command.subcommands, &tokens[1..]);
        }

        return (Some(command), &[]);
    }

    (base, tokens)
}

/// Case-insensitive prefix filter preserving candidate order.
pub fn filter_prefix<'a, I>(prefix: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = prefix.to_lowercase();
    candidates
        .into_iter()
        .filter(|candidate| candidate.to_lowercase().starts_with(&prefix))
        .map(str::to_string)
        .collect()
}

/// Candidate completions for the last token of `text`.
///
/// Resolution reuses [`resolve`]: an interior command (or a top-level miss)
/// completes sibling keys; a leaf with a suggestion generator delegates to
/// it with the residual argument list; anything else completes nothing.
pub fn suggestions(commands: &[Command], editor: &dyn Editor, text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<&str> = text.trim_matches(' ').split(' ').collect();
    let (command, partial) = resolve(None, commands, &tokens);

    let search = match command {
        None => commands,
        Some(command) => command.subcommands.as_slice(),
    };

    if !search.is_empty() {
        let last = partial.last().copied().unwrap_or("");
        return filter_prefix(last, search.iter().map(|c| c.key));
    }

    if let Some(generate) = command.and_then(|c| c.suggest) {
        return generate(editor, partial);
    }

    Vec::new()
}
