//! # Frost Shell
//!
//! Command interpreter for the Frost scene editor:
//! - Static tree of nestable commands with per-command help, validations
//!   and suggestion generators
//! - Recursive dispatch of space-delimited input
//! - Prefix-based completion over the same tree plus data-dependent
//!   candidate lists
//! - An ordered, short-circuiting validation pipeline
//!
//! ## Architecture
//!
//! ```text
//! Input Line ──► resolve ──► Validations ──► Run Action ──► Output String
//!                   │
//!                   ▼
//!              Suggestions
//! ```
//!
//! Commands are plain data dispatched through free function pointers; the
//! registry is built once by [`builtins::registry`] and never mutated. Host
//! state is reached only through the [`Editor`] adapter, so the interpreter
//! knows nothing about rendering or windowing.

pub mod builtins;
pub mod command;
pub mod dispatch;
pub mod editor;
pub mod ops;
pub mod set_commands;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{Command, CommandError, Context, RunFn, SuggestFn};
pub use dispatch::{filter_prefix, resolve, suggestions};
pub use editor::Editor;
pub use ops::apply_op;
pub use set_commands::{AXIS_KEYS, BOOL_KEYS, OPERATORS, SIDE_KEYS};
pub use validate::Validation;

/// The console facade.
///
/// Owns the command registry and turns raw input lines into executed
/// commands or completion candidates. One command runs to completion before
/// the next line is processed; suggestion queries are read-only and safe to
/// interleave with edits from the same thread.
pub struct Console {
    commands: Vec<Command>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            commands: builtins::registry(),
        }
    }

    /// The full registry, for introspection.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Tokenize, resolve, validate and run one line of input.
    ///
    /// Validations run in declared order and the first failure aborts before
    /// the run action executes; failures never leave partial mutations
    /// behind. A line resolving to an interior command without a run action
    /// is reported as not found.
    pub fn run(&self, editor: &mut dyn Editor, text: &str) -> Result<String, CommandError> {
        let tokens: Vec<&str> = text.split(' ').collect();
        let (command, args) = dispatch::resolve(None, &self.commands, &tokens);
        let command = command.ok_or_else(|| CommandError::NotFound(text.to_string()))?;
        let run = command
            .run
            .ok_or_else(|| CommandError::NotFound(text.to_string()))?;

        validate::run_pipeline(command.validations, &*editor, args)?;

        log::debug!("running '{}' with {} args", command.key, args.len());
        let mut ctx = Context {
            editor,
            commands: &self.commands,
        };
        run(&mut ctx, args)
    }

    /// Candidate completions for the last token of `text`.
    pub fn suggestions(&self, editor: &dyn Editor, text: &str) -> Vec<String> {
        dispatch::suggestions(&self.commands, editor, text)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
