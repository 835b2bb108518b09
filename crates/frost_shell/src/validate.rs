//! Composable validation pipeline.

use crate::command::CommandError;
use crate::editor::Editor;

/// A single pure predicate checked before a command runs.
///
/// Commands declare their validations in a fixed order; the pipeline stops
/// at the first failure and the run action is never invoked after one. No
/// validation mutates state.
#[derive(Debug, Clone, Copy)]
pub enum Validation {
    /// Exactly this many arguments.
    ExactArgs(usize),
    /// The argument at the index is one of the listed options.
    ArgIn(usize, &'static [&'static str]),
    /// The argument at the index parses as a number.
    ArgNumber(usize),
    /// An active node must be selected.
    ActiveNode,
}

impl Validation {
    pub fn check(&self, editor: &dyn Editor, args: &[&str]) -> Result<(), CommandError> {
        match *self {
            Validation::ExactArgs(expected) => {
                if args.len() != expected {
                    return Err(CommandError::ArgCount {
                        expected,
                        found: args.len(),
                    });
                }
            }
            Validation::ArgIn(index, options) => {
                let Some(&arg) = args.get(index) else {
                    return Err(CommandError::ArgCount {
                        expected: index + 1,
                        found: args.len(),
                    });
                };
                if !options.iter().any(|&option| option == arg) {
                    return Err(CommandError::InvalidArgument {
                        index,
                        expected: format!("one of {}", options.join(", ")),
                    });
                }
            }
            Validation::ArgNumber(index) => {
                let Some(arg) = args.get(index) else {
                    return Err(CommandError::ArgCount {
                        expected: index + 1,
                        found: args.len(),
                    });
                };
                if arg.parse::<f32>().is_err() {
                    return Err(CommandError::InvalidArgument {
                        index,
                        expected: "a number".to_string(),
                    });
                }
            }
            Validation::ActiveNode => {
                if editor.active().is_none() {
                    return Err(CommandError::NoActiveNode);
                }
            }
        }
        Ok(())
    }
}

/// Run `validations` in declared order, stopping at the first failure.
pub fn run_pipeline(
    validations: &[Validation],
    editor: &dyn Editor,
    args: &[&str],
) -> Result<(), CommandError> {
    for validation in validations {
        validation.check(editor, args)?;
    }
    Ok(())
}
