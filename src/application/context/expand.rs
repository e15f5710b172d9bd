//! Margin expansion: the syntax-free fallback window.

use crate::domain::{ContextConfig, ContextError, Hunk};

/// Expand a hunk with a fixed window of pre-change file lines.
///
/// Emits up to `margin_above` old-file lines before the hunk, the
/// synthetic hunk header, the hunk's own marker lines, then up to
/// `margin_below` old-file lines after it. A hunk line already present
/// verbatim in the emitted block is skipped, which keeps the window
/// and hunk body from doubling up when margins are small. Strictly
/// textual; the only failure is hunk coordinates that do not fit the
/// file, which is a contract violation.
pub fn expand_hunk(
    old_contents: &str,
    hunk: &Hunk,
    config: &ContextConfig,
) -> Result<String, ContextError> {
    if hunk.old_start == 0 {
        return Err(ContextError::InvalidHunkCoordinates(
            "hunk old_start must be 1-indexed".to_string(),
        ));
    }

    let file_lines: Vec<&str> = old_contents.lines().collect();
    let hunk_start = hunk.old_start - 1;
    if hunk_start > file_lines.len() {
        return Err(ContextError::InvalidHunkCoordinates(format!(
            "hunk at -{} starts beyond a file of {} lines",
            hunk.old_start,
            file_lines.len()
        )));
    }

    let start = hunk_start.saturating_sub(config.margin_above);
    let end = (hunk_start + hunk.old_lines + config.margin_below).min(file_lines.len());

    let mut expansion: Vec<String> = Vec::new();
    for line in &file_lines[start..hunk_start] {
        expansion.push((*line).to_string());
    }

    expansion.push(hunk.header());
    for line in &hunk.lines {
        let rendered = line.marker_line();
        if !expansion.contains(&rendered) {
            expansion.push(rendered);
        }
    }

    let tail_start = (hunk_start + hunk.old_lines).min(file_lines.len());
    for line in &file_lines[tail_start..end] {
        expansion.push((*line).to_string());
    }

    Ok(expansion.join("\n"))
}
