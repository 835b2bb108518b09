//! Command descriptors and errors.

use frost_scene::{NodeId, SceneError};

use crate::editor::Editor;
use crate::validate::Validation;

/// Run action of a leaf command: mutate or query the editor, produce the
/// command's output text.
pub type RunFn = fn(&mut Context<'_>, &[&str]) -> Result<String, CommandError>;

/// Suggestion generator: map the partial argument list to candidates. The
/// argument position decides which candidate set applies.
pub type SuggestFn = fn(&dyn Editor, &[&str]) -> Vec<String>;

/// Command error
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("command not found: {0}")]
    NotFound(String),

    #[error("incorrect number of arguments: {found} != {expected}")]
    ArgCount { expected: usize, found: usize },

    #[error("argument {index} is invalid: expected {expected}")]
    InvalidArgument { index: usize, expected: String },

    #[error("no active node selected")]
    NoActiveNode,

    #[error("failed to persist scene: {0}")]
    Persistence(#[from] SceneError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub(crate) fn missing_node(id: NodeId) -> CommandError {
    CommandError::Internal(format!("{id} missing from graph"))
}

/// A named node of the command tree.
///
/// Commands are plain data built once at startup: behavior lives in free
/// functions referenced by pointer, never in captured closures. A command is
/// either a leaf (run action, no subcommands) or an interior grouping node.
/// Keys are case-sensitive and unique within a sibling list.
#[derive(Debug)]
pub struct Command {
    pub key: &'static str,
    pub help: &'static str,
    pub suggest: Option<SuggestFn>,
    pub validations: &'static [Validation],
    pub run: Option<RunFn>,
    pub subcommands: Vec<Command>,
}

impl Command {
    pub fn new(key: &'static str, help: &'static str) -> Self {
        Self {
            key,
            help,
            suggest: None,
            validations: &[],
            run: None,
            subcommands: Vec::new(),
        }
    }

    pub fn with_run(mut self, run: RunFn) -> Self {
        self.run = Some(run);
        self
    }

    pub fn with_suggest(mut self, suggest: SuggestFn) -> Self {
        self.suggest = Some(suggest);
        self
    }

    pub fn with_validations(mut self, validations: &'static [Validation]) -> Self {
        self.validations = validations;
        self
    }

    pub fn with_subcommands(mut self, subcommands: Vec<Command>) -> Self {
        self.subcommands = subcommands;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.subcommands.is_empty()
    }
}

/// Context handed to run actions: the host editor plus the full registry,
/// which `help` introspects.
pub struct Context<'a> {
    pub editor: &'a mut dyn Editor,
    pub commands: &'a [Command],
}
