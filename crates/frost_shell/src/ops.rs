//! Arithmetic applied by numeric mutation commands.

use crate::command::CommandError;

/// Apply `operator` to the current value and an operand.
///
/// `=` replaces, the rest combine. Division by zero follows IEEE-754 and
/// yields an infinity or NaN rather than an error. The operator set is
/// guaranteed by the validation pipeline before this runs; anything else is
/// an invariant violation surfaced as an internal error.
pub fn apply_op(current: f32, operator: &str, operand: f32) -> Result<f32, CommandError> {
    match operator {
        "=" => Ok(operand),
        "+" => Ok(current + operand),
        "-" => Ok(current - operand),
        "*" => Ok(current * operand),
        "/" => Ok(current / operand),
        other => Err(CommandError::Internal(format!("unknown operator: {other}"))),
    }
}
