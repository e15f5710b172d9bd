//! Tunable knobs for context extraction.

use serde::{Deserialize, Serialize};

/// Margins and search windows used by the extraction pipeline.
///
/// Plain data; nothing reads a config file implicitly. Callers either
/// use `ContextConfig::default()` or load one explicitly via
/// `infra::config::load_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Lines of pre-change file emitted above a hunk during margin
    /// expansion.
    pub margin_above: usize,
    /// Lines of pre-change file emitted below a hunk during margin
    /// expansion.
    pub margin_below: usize,
    /// Lines added above and below a hunk's edit span when querying a
    /// resolver for the enclosing scope.
    pub scope_search_margin: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            margin_above: 5,
            margin_below: 5,
            scope_search_margin: 50,
        }
    }
}
