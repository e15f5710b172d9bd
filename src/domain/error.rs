//! Domain error types for the context extraction pipeline.
//!
//! These errors represent the failure taxonomy of the diff-to-context
//! engine. Every variant is absorbed at some pipeline boundary: nothing
//! here escapes to the caller of a strategy function, which always
//! degrades to a simpler strategy instead of dropping the file.

use thiserror::Error;

/// Errors raised while turning a file's diff into a context string.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The diff text could not be parsed into header + hunk lines.
    /// Fatal to the smart-context path for the file; the caller routes
    /// the file to margin expansion.
    #[error("Malformed unified diff: {0}")]
    MalformedDiff(String),

    /// The grammar rejected the file text outright (not merely a file
    /// containing structural error nodes). Treated by callers as
    /// "no scope resolvable", not propagated.
    #[error("Parser rejected file text: {0}")]
    ParseFailure(String),

    /// A hunk contained no added or removed line. Well-formed diffs
    /// never produce this; trimming must not silently accept it.
    #[error("Hunk contains no added or removed lines")]
    DegenerateHunk,

    /// Hunk or scope coordinates do not fit the file they are laid
    /// against. A programming-contract violation, never retried.
    #[error("Invalid hunk coordinates: {0}")]
    InvalidHunkCoordinates(String),

    /// Anything else escaping the scope pipeline. Caught at the
    /// strategy boundary and converted into full margin expansion.
    #[error("Context pipeline failed: {0}")]
    Pipeline(#[from] anyhow::Error),
}
