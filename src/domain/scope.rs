//! Syntactic scope model: what the per-language resolvers return.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an enclosing syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    /// Function, method or class definition.
    Definition,
    /// Control-flow construct: conditional, loop, exception handler or
    /// context-manager block.
    Block,
}

/// The smallest syntactic construct fully containing a queried line
/// range, located in the new file's syntax tree.
///
/// Produced fresh per query; carries plain data only, never a live
/// tree node, so nothing borrows from a syntax tree across files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingScope {
    pub kind: ScopeKind,
    /// 1-indexed first line of the scope in the new file, inclusive.
    pub start_line: usize,
    /// 1-indexed last line of the scope in the new file, inclusive.
    pub end_line: usize,
    /// Raw text of the scope's span.
    pub text: String,
}

impl EnclosingScope {
    pub fn key(&self) -> ScopeKey {
        ScopeKey::new(self.start_line, self.end_line)
    }
}

/// Grouping key identifying a scope purely by its line span.
///
/// Two scopes with the same span compare equal regardless of content;
/// the key is never used for anything but bucketing hunks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeKey(String);

impl ScopeKey {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self(format!("{start_line} -> {end_line}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a structural validity check over a whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    pub valid: bool,
    /// Human-readable description of the first structural error, when
    /// the input is invalid.
    pub error: Option<String>,
}

impl Validity {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_key_format() {
        assert_eq!(ScopeKey::new(10, 42).as_str(), "10 -> 42");
        assert_eq!(ScopeKey::new(10, 42), ScopeKey::new(10, 42));
        assert_ne!(ScopeKey::new(10, 42), ScopeKey::new(10, 43));
    }

    #[test]
    fn test_scope_key_from_scope() {
        let scope = EnclosingScope {
            kind: ScopeKind::Definition,
            start_line: 3,
            end_line: 9,
            text: "def f():\n    pass".to_string(),
        };
        assert_eq!(scope.key().to_string(), "3 -> 9");
    }
}
