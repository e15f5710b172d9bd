//! Parsed-diff data model: patch sets, patches, hunks and their lines.
//!
//! All entities here are created while processing a single file's diff
//! and consumed before the file's context string is returned. Nothing
//! is retained across files.

use serde::{Deserialize, Serialize};

/// Tag of one line inside a hunk, derived from its unified-diff marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Unchanged line present in both files (` ` marker).
    Context,
    /// Line present only in the new file (`+` marker).
    Added,
    /// Line present only in the old file (`-` marker).
    Removed,
}

impl LineKind {
    /// The unified-diff marker character for this kind.
    pub fn marker(&self) -> char {
        match self {
            LineKind::Context => ' ',
            LineKind::Added => '+',
            LineKind::Removed => '-',
        }
    }

    /// Whether lines of this kind occupy a row in the old file.
    pub fn counts_old(&self) -> bool {
        matches!(self, LineKind::Context | LineKind::Removed)
    }

    /// Whether lines of this kind occupy a row in the new file.
    pub fn counts_new(&self) -> bool {
        matches!(self, LineKind::Context | LineKind::Added)
    }
}

/// One line of a hunk: marker tag, text without the marker, and the
/// line-ending delimiter that followed it in the diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: LineKind,
    pub text: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String {
    "\n".to_string()
}

impl DiffLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            delimiter: default_delimiter(),
        }
    }

    /// An unchanged line, as spliced in when filling gaps between hunks.
    pub fn context(text: impl Into<String>) -> Self {
        Self::new(LineKind::Context, text)
    }

    /// True for added and removed lines.
    pub fn is_edit(&self) -> bool {
        matches!(self.kind, LineKind::Added | LineKind::Removed)
    }

    /// The line as it appears in a unified diff, marker included.
    pub fn marker_line(&self) -> String {
        format!("{}{}", self.kind.marker(), self.text)
    }
}

/// One contiguous block of a unified diff.
///
/// `old_start`/`new_start` are 1-indexed rows into the old/new file.
/// Invariant for parsed hunks: `old_lines` equals the number of
/// context+removed lines and `new_lines` the number of context+added
/// lines. Combined hunks produced by merging relax this for gap-filled
/// lines, which are accounted on the new side only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub old_start: usize,
    pub old_lines: usize,
    pub new_start: usize,
    pub new_lines: usize,
    pub lines: Vec<DiffLine>,
}

impl Hunk {
    /// Synthetic hunk header in unified-diff form.
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_lines, self.new_start, self.new_lines
        )
    }

    /// Index of the first added/removed line, if any.
    pub fn first_edit_index(&self) -> Option<usize> {
        self.lines.iter().position(|line| line.is_edit())
    }

    /// Index of the last added/removed line, if any.
    pub fn last_edit_index(&self) -> Option<usize> {
        self.lines.iter().rposition(|line| line.is_edit())
    }

    /// Number of lines this hunk occupies in the old file.
    pub fn old_side_count(&self) -> usize {
        self.lines.iter().filter(|line| line.kind.counts_old()).count()
    }

    /// Number of lines this hunk occupies in the new file.
    pub fn new_side_count(&self) -> usize {
        self.lines.iter().filter(|line| line.kind.counts_new()).count()
    }

    /// One past the last new-file row covered by this hunk.
    pub fn new_end(&self) -> usize {
        self.new_start + self.new_lines
    }
}

/// The hunks belonging to one file section of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub old_path: String,
    pub new_path: String,
    pub hunks: Vec<Hunk>,
}

/// Ordered sequence of patches parsed out of one diff text.
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSet {
    patches: Vec<Patch>,
}

impl PatchSet {
    pub fn new(patches: Vec<Patch>) -> Self {
        Self { patches }
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}
