//! Per-language syntax capabilities.
//!
//! Each supported language implements `ScopeResolver`; selection is
//! table-driven by file extension and fails soft (an unknown extension
//! simply yields no resolver, routing the file to margin expansion).
//!
//! Grammar construction is memoized per language behind a mutex so
//! concurrent first use initializes exactly once; repeated calls reuse
//! the cached grammar. `reset_grammar_cache` is the test hook.

pub mod javascript;
pub mod python;
pub mod rust;
mod walk;

pub use javascript::JavascriptResolver;
pub use python::PythonResolver;
pub use rust::RustResolver;

use crate::domain::{ContextError, EnclosingScope, Validity};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use tree_sitter::Language;

/// Languages with a bundled grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Python,
    Rust,
    Javascript,
}

impl LanguageId {
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Python => "Python",
            LanguageId::Rust => "Rust",
            LanguageId::Javascript => "JavaScript",
        }
    }
}

/// The syntax capability contract, one implementation per language.
///
/// Lines are 1-indexed at this boundary; implementations translate to
/// tree-sitter's 0-indexed rows internally. Both operations are pure
/// functions of their inputs apart from the memoized grammar.
pub trait ScopeResolver: Send + Sync {
    fn language(&self) -> LanguageId;

    /// The smallest definition-like node whose span fully contains
    /// `[line_start, line_end]`, falling back to the smallest
    /// block-like node; `None` when nothing qualifies. Size ties keep
    /// the first node found in pre-order traversal.
    fn find_enclosing_scope(
        &self,
        file: &str,
        line_start: usize,
        line_end: usize,
    ) -> Result<Option<EnclosingScope>, ContextError>;

    /// Whether the file parses without structural errors.
    fn check_validity(&self, file: &str) -> Result<Validity, ContextError>;
}

static GRAMMAR_CACHE: Lazy<Mutex<HashMap<LanguageId, Language>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Memoized grammar for a language. First use constructs the grammar
/// under the cache lock (single-flight); later calls clone the cached
/// handle, which is a cheap reference-counted copy.
pub(crate) fn grammar(id: LanguageId) -> Language {
    let mut cache = GRAMMAR_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    cache
        .entry(id)
        .or_insert_with(|| match id {
            LanguageId::Python => tree_sitter_python::LANGUAGE.into(),
            LanguageId::Rust => tree_sitter_rust::LANGUAGE.into(),
            LanguageId::Javascript => tree_sitter_javascript::LANGUAGE.into(),
        })
        .clone()
}

/// Drop all memoized grammars. Test hook; the next `grammar` call
/// re-initializes from scratch.
pub fn reset_grammar_cache() {
    GRAMMAR_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clear();
}

/// Resolver for a file path, selected by extension. Unknown and
/// missing extensions yield `None`.
pub fn resolver_for_path(path: &str) -> Option<&'static dyn ScopeResolver> {
    let extension = Path::new(path).extension()?.to_str()?.to_lowercase();
    match extension.as_str() {
        "py" | "pyi" => Some(&PythonResolver),
        "rs" => Some(&RustResolver),
        "js" | "jsx" | "mjs" | "cjs" => Some(&JavascriptResolver),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_selection_by_extension() {
        assert_eq!(
            resolver_for_path("src/app.py").map(|r| r.language()),
            Some(LanguageId::Python)
        );
        assert_eq!(
            resolver_for_path("src/lib.rs").map(|r| r.language()),
            Some(LanguageId::Rust)
        );
        assert_eq!(
            resolver_for_path("web/index.mjs").map(|r| r.language()),
            Some(LanguageId::Javascript)
        );
    }

    #[test]
    fn test_unknown_extension_fails_soft() {
        assert!(resolver_for_path("README.md").is_none());
        assert!(resolver_for_path("Makefile").is_none());
        assert!(resolver_for_path("").is_none());
    }

    #[test]
    fn test_grammar_cache_reinitializes_after_reset() {
        let _ = grammar(LanguageId::Python);
        reset_grammar_cache();

        // The next use rebuilds the grammar from scratch and resolves
        // as before.
        let scope = PythonResolver
            .find_enclosing_scope("def f():\n    return 1\n", 2, 2)
            .unwrap();
        assert!(scope.is_some());
    }
}
