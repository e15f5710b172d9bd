//! Input surface of the engine: one changed file as supplied by the
//! platform-integration layer that fetched the pull request.

use serde::{Deserialize, Serialize};

/// A single file under review: both full contents plus the unified
/// diff between them. Everything the pipeline needs for one file; no
/// state outlives its processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFile {
    /// Path of the file as it appears in the pull request.
    pub filename: String,
    /// Full pre-change contents.
    pub old_contents: String,
    /// Full post-change contents.
    pub new_contents: String,
    /// Unified-diff patch text for this file.
    pub patch: String,
}

impl ReviewFile {
    pub fn new(
        filename: impl Into<String>,
        old_contents: impl Into<String>,
        new_contents: impl Into<String>,
        patch: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            old_contents: old_contents.into(),
            new_contents: new_contents.into(),
            patch: patch.into(),
        }
    }
}
