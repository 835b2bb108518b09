//! The `set` mutation subtree.
//!
//! Every field mutation requires an active node, parses a trailing
//! `<operator> <operand>` expression where one applies, and writes the new
//! value into both the node and its attached live visual. Keeping the two
//! representations in sync is the invariant these commands exist to uphold.

use frost_scene::{SceneNode, Visual};

use crate::command::{missing_node, Command, CommandError, Context};
use crate::dispatch::filter_prefix;
use crate::editor::Editor;
use crate::ops::apply_op;
use crate::validate::Validation;

/// Boolean literals accepted by `set visible`.
pub const BOOL_KEYS: &[&str] = &["true", "false"];
/// Side names accepted by anchor and offset mutations.
pub const SIDE_KEYS: &[&str] = &["left", "right", "top", "bottom"];
/// Axis names accepted by position and pivot mutations.
pub const AXIS_KEYS: &[&str] = &["x", "y"];
/// Arithmetic operators accepted by numeric mutations.
pub const OPERATORS: &[&str] = &["+", "-", "*", "/", "="];

pub fn set_command() -> Command {
    Command::new("set", "modify a value of our visual").with_subcommands(vec![
        anchor_command(),
        height_command(),
        name_command(),
        offsets_command(),
        pivot_command(),
        position_command(),
        visible_command(),
        width_command(),
    ])
}

fn name_command() -> Command {
    Command::new("name", "change the name of our visual")
        .with_validations(&[Validation::ExactArgs(1), Validation::ActiveNode])
        .with_run(name_run)
}

fn name_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let node = active_node_mut(ctx.editor)?;
    node.name = args[0].to_string();
    Ok(String::new())
}

fn visible_command() -> Command {
    Command::new("visible", "turn on or off our object")
        .with_suggest(bool_suggestions)
        .with_validations(&[
            Validation::ActiveNode,
            Validation::ExactArgs(1),
            Validation::ArgIn(0, BOOL_KEYS),
        ])
        .with_run(visible_run)
}

fn visible_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let node = active_node_mut(ctx.editor)?;
    let visible = args[0] == "true";
    node.visible = visible;
    live_visual(node)?.set_visible(visible);
    Ok(String::new())
}

fn position_command() -> Command {
    Command::new("position", "set the position of our object")
        .with_suggest(axis_op_suggestions)
        .with_validations(&[
            Validation::ActiveNode,
            Validation::ExactArgs(3),
            Validation::ArgIn(0, AXIS_KEYS),
            Validation::ArgIn(1, OPERATORS),
            Validation::ArgNumber(2),
        ])
        .with_run(position_run)
}

fn position_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let operand = parse_operand(args, 2)?;
    let node = active_node_mut(ctx.editor)?;

    let mut position = node.transform.position;
    match args[0] {
        "x" => position.x = apply_op(position.x, args[1], operand)?,
        _ => position.y = apply_op(position.y, args[1], operand)?,
    }
    node.transform.position = position;
    live_visual(node)?.set_position(position);
    Ok(String::new())
}

fn pivot_command() -> Command {
    Command::new("pivot", "set the pivot of our object")
        .with_suggest(axis_op_suggestions)
        .with_validations(&[
            Validation::ActiveNode,
            Validation::ExactArgs(3),
            Validation::ArgIn(0, AXIS_KEYS),
            Validation::ArgIn(1, OPERATORS),
            Validation::ArgNumber(2),
        ])
        .with_run(pivot_run)
}

fn pivot_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let operand = parse_operand(args, 2)?;
    let node = active_node_mut(ctx.editor)?;

    let mut pivot = node.transform.pivot;
    match args[0] {
        "x" => pivot.x = apply_op(pivot.x, args[1], operand)?,
        _ => pivot.y = apply_op(pivot.y, args[1], operand)?,
    }
    node.transform.pivot = pivot;
    live_visual(node)?.set_pivot(pivot);
    Ok(String::new())
}

fn width_command() -> Command {
    Command::new("width", "set the width of our object")
        .with_suggest(op_suggestions)
        .with_validations(&[
            Validation::ActiveNode,
            Validation::ExactArgs(2),
            Validation::ArgIn(0, OPERATORS),
            Validation::ArgNumber(1),
        ])
        .with_run(width_run)
}

fn width_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let operand = parse_operand(args, 1)?;
    let node = active_node_mut(ctx.editor)?;

    let width = apply_op(node.transform.width, args[0], operand)?;
    node.transform.width = width;
    let height = node.transform.height;
    live_visual(node)?.set_size(width, height);
    Ok(String::new())
}

fn height_command() -> Command {
    Command::new("height", "set the height of our object")
        .with_suggest(op_suggestions)
        .with_validations(&[
            Validation::ActiveNode,
            Validation::ExactArgs(2),
            Validation::ArgIn(0, OPERATORS),
            Validation::ArgNumber(1),
        ])
        .with_run(height_run)
}

fn height_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let operand = parse_operand(args, 1)?;
    let node = active_node_mut(ctx.editor)?;

    let height = apply_op(node.transform.height, args[0], operand)?;
    node.transform.height = height;
    let width = node.transform.width;
    live_visual(node)?.set_size(width, height);
    Ok(String::new())
}

fn anchor_command() -> Command {
    Command::new("anchor", "set the anchors of our object")
        .with_suggest(side_op_suggestions)
        .with_validations(&[
            Validation::ActiveNode,
            Validation::ExactArgs(3),
            Validation::ArgIn(0, SIDE_KEYS),
            Validation::ArgIn(1, OPERATORS),
            Validation::ArgNumber(2),
        ])
        .with_run(anchor_run)
}

fn anchor_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let operand = parse_operand(args, 2)?;
    let node = active_node_mut(ctx.editor)?;

    let mut anchors = node.transform.anchors;
    let slot = match args[0] {
        "left" => &mut anchors.left,
        "right" => &mut anchors.right,
        "top" => &mut anchors.top,
        _ => &mut anchors.bottom,
    };
    *slot = apply_op(*slot, args[1], operand)?;
    node.transform.anchors = anchors;
    live_visual(node)?.set_anchors(anchors);
    Ok(String::new())
}

fn offsets_command() -> Command {
    Command::new("offsets", "set the offsets of our object")
        .with_suggest(side_op_suggestions)
        .with_validations(&[
            Validation::ActiveNode,
            Validation::ExactArgs(3),
            Validation::ArgIn(0, SIDE_KEYS),
            Validation::ArgIn(1, OPERATORS),
            Validation::ArgNumber(2),
        ])
        .with_run(offsets_run)
}

fn offsets_run(ctx: &mut Context<'_>, args: &[&str]) -> Result<String, CommandError> {
    let operand = parse_operand(args, 2)?;
    let node = active_node_mut(ctx.editor)?;

    let mut offsets = node.transform.offsets;
    let slot = match args[0] {
        "left" => &mut offsets.left,
        "right" => &mut offsets.right,
        "top" => &mut offsets.top,
        _ => &mut offsets.bottom,
    };
    *slot = apply_op(*slot, args[1], operand)?;
    node.transform.offsets = offsets;
    live_visual(node)?.set_offsets(offsets);
    Ok(String::new())
}

fn bool_suggestions(_editor: &dyn Editor, partial: &[&str]) -> Vec<String> {
    match partial.len() {
        1 => filter_prefix(partial[0], BOOL_KEYS.iter().copied()),
        _ => Vec::new(),
    }
}

fn op_suggestions(_editor: &dyn Editor, partial: &[&str]) -> Vec<String> {
    match partial.len() {
        1 => filter_prefix(partial[0], OPERATORS.iter().copied()),
        _ => Vec::new(),
    }
}

fn axis_op_suggestions(_editor: &dyn Editor, partial: &[&str]) -> Vec<String> {
    match partial.len() {
        1 => filter_prefix(partial[0], AXIS_KEYS.iter().copied()),
        2 => filter_prefix(partial[1], OPERATORS.iter().copied()),
        _ => Vec::new(),
    }
}

fn side_op_suggestions(_editor: &dyn Editor, partial: &[&str]) -> Vec<String> {
    match partial.len() {
        1 => filter_prefix(partial[0], SIDE_KEYS.iter().copied()),
        2 => filter_prefix(partial[1], OPERATORS.iter().copied()),
        _ => Vec::new(),
    }
}

/// Re-read an argument the pipeline already validated as a number.
fn parse_operand(args: &[&str], index: usize) -> Result<f32, CommandError> {
    args.get(index)
        .and_then(|arg| arg.parse().ok())
        .ok_or_else(|| CommandError::Internal(format!("argument {index} not validated as a number")))
}

fn active_node_mut(editor: &mut dyn Editor) -> Result<&mut SceneNode, CommandError> {
    let id = editor.active().ok_or(CommandError::NoActiveNode)?;
    editor.graph_mut().get_mut(id).ok_or_else(|| missing_node(id))
}

fn live_visual(node: &mut SceneNode) -> Result<&mut (dyn Visual + 'static), CommandError> {
    node.visual
        .as_deref_mut()
        .ok_or_else(|| CommandError::Internal(format!("no live visual attached to '{}'", node.name)))
}
