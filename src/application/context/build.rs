//! Rebuilding a scope's source text with its edits shown in place.

use super::trim::trim_hunk;
use crate::domain::{ContextError, EnclosingScope, Hunk, LineKind};

/// Render one scope with the combined hunk's edits re-injected.
///
/// The scope's line range is sliced out of the new file as base text.
/// The trimmed hunk's marker lines are spliced in at the offset of the
/// first edit, replacing the `drop_count` base lines the edit block
/// covers (every trimmed line except removals, which only exist in the
/// old file). The synthetic header carries the *untrimmed* combined
/// hunk's coordinates. Output is byte-stable for identical inputs.
pub fn build_scope_context(
    new_contents: &str,
    scope: &EnclosingScope,
    combined: &Hunk,
) -> Result<String, ContextError> {
    let trimmed = trim_hunk(combined)?;
    let file_lines: Vec<&str> = new_contents.lines().collect();

    if scope.start_line == 0 || scope.start_line > scope.end_line || scope.end_line > file_lines.len()
    {
        return Err(ContextError::InvalidHunkCoordinates(format!(
            "scope {} -> {} does not fit a file of {} lines",
            scope.start_line,
            scope.end_line,
            file_lines.len()
        )));
    }

    let mut context: Vec<String> = file_lines[scope.start_line - 1..scope.end_line]
        .iter()
        .map(|line| (*line).to_string())
        .collect();

    let injection_idx = trimmed
        .new_start
        .checked_sub(scope.start_line)
        .ok_or_else(|| {
            ContextError::InvalidHunkCoordinates(format!(
                "hunk at +{} starts before scope line {}",
                trimmed.new_start, scope.start_line
            ))
        })?;
    if injection_idx > context.len() {
        return Err(ContextError::InvalidHunkCoordinates(format!(
            "injection index {} exceeds scope of {} lines",
            injection_idx,
            context.len()
        )));
    }

    let drop_count = trimmed
        .lines
        .iter()
        .filter(|line| line.kind != LineKind::Removed)
        .count();
    let drop_end = (injection_idx + drop_count).min(context.len());
    let edits: Vec<String> = trimmed.lines.iter().map(|line| line.marker_line()).collect();
    context.splice(injection_idx..drop_end, edits);

    Ok(format!("{}\n{}", combined.header(), context.join("\n")))
}
