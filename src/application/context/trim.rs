//! Hunk trimming: reduce a hunk to its minimal edit span.

use crate::domain::{ContextError, Hunk};

/// A copy of `hunk` whose lines run from the first through the last
/// added/removed line, with `new_start` moved forward past the leading
/// context. The declared line counts are left as parsed; consumers of
/// a trimmed hunk only read its lines and `new_start`.
///
/// Trimming is idempotent. A hunk with no edit line at all is
/// rejected as `DegenerateHunk` rather than silently passed through.
pub fn trim_hunk(hunk: &Hunk) -> Result<Hunk, ContextError> {
    let first = hunk.first_edit_index().ok_or(ContextError::DegenerateHunk)?;
    let last = hunk.last_edit_index().ok_or(ContextError::DegenerateHunk)?;

    Ok(Hunk {
        old_start: hunk.old_start,
        old_lines: hunk.old_lines,
        new_start: hunk.new_start + first,
        new_lines: hunk.new_lines,
        lines: hunk.lines[first..=last].to_vec(),
    })
}
