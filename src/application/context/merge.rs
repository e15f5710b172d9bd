//! Merging the hunks of one scope into a single contiguous hunk.

use anyhow::anyhow;
use crate::domain::{ContextError, DiffLine, Hunk};

/// Merge all hunks grouped under one scope into a combined hunk.
///
/// Hunks are sorted by `new_start` first; when several patches target
/// the same function they may have been discovered out of diff order.
/// Gaps between consecutive hunks are filled with the unmodified
/// new-file lines so the result, laid against the new file at its
/// `new_start`, is one gapless region covering every input hunk's
/// edits. Gap lines are accounted on the new side only; per-hunk line
/// counts accumulate on both sides.
pub fn merge_hunks(hunks: &[Hunk], new_contents: &str) -> Result<Hunk, ContextError> {
    let mut sorted: Vec<&Hunk> = hunks.iter().collect();
    sorted.sort_by_key(|hunk| hunk.new_start);

    let Some((first, rest)) = sorted.split_first() else {
        return Err(ContextError::Pipeline(anyhow!(
            "attempted to merge an empty scope group"
        )));
    };

    let file_lines: Vec<&str> = new_contents.lines().collect();
    let mut combined = (*first).clone();
    let mut last_hunk_end = combined.new_end();

    for hunk in rest {
        if hunk.new_start > last_hunk_end {
            let gap_start = last_hunk_end - 1;
            let gap_end = hunk.new_start - 1;
            if gap_end > file_lines.len() {
                return Err(ContextError::InvalidHunkCoordinates(format!(
                    "gap fill {}..{} exceeds file of {} lines",
                    last_hunk_end,
                    hunk.new_start,
                    file_lines.len()
                )));
            }
            for line in &file_lines[gap_start..gap_end] {
                combined.lines.push(DiffLine::context(*line));
            }
            combined.new_lines += gap_end - gap_start;
        }

        combined.old_lines += hunk.old_lines;
        combined.new_lines += hunk.new_lines;
        combined.lines.extend(hunk.lines.iter().cloned());
        last_hunk_end = hunk.new_end();
    }

    Ok(combined)
}
