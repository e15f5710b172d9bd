//! Python scope resolution. The reference resolver implementation.

use super::walk::{self, KindTables};
use super::{grammar, LanguageId, ScopeResolver};
use crate::domain::{ContextError, EnclosingScope, Validity};

const TABLES: KindTables = KindTables {
    definitions: &[
        "function_definition",
        "class_definition",
        "decorated_definition",
    ],
    blocks: &[
        "if_statement",
        "for_statement",
        "while_statement",
        "try_statement",
        "with_statement",
        "match_statement",
        "except_clause",
        "finally_clause",
    ],
};

pub struct PythonResolver;

impl ScopeResolver for PythonResolver {
    fn language(&self) -> LanguageId {
        LanguageId::Python
    }

    fn find_enclosing_scope(
        &self,
        file: &str,
        line_start: usize,
        line_end: usize,
    ) -> Result<Option<EnclosingScope>, ContextError> {
        walk::find_enclosing_scope(
            &grammar(LanguageId::Python),
            &TABLES,
            file,
            line_start,
            line_end,
        )
    }

    fn check_validity(&self, file: &str) -> Result<Validity, ContextError> {
        walk::check_validity(&grammar(LanguageId::Python), file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScopeKind;

    const SAMPLE: &str = "\
import os


class Greeter:
    def __init__(self, name):
        self.name = name

    def greet(self):
        if self.name:
            print(f\"hello {self.name}\")
        return self.name


def main():
    Greeter(os.environ.get(\"USER\", \"\")).greet()
";

    #[test]
    fn test_smallest_definition_wins() {
        let scope = PythonResolver
            .find_enclosing_scope(SAMPLE, 9, 10)
            .unwrap()
            .unwrap();
        // `greet` (lines 8-11), not the whole class.
        assert_eq!(scope.kind, ScopeKind::Definition);
        assert_eq!(scope.start_line, 8);
        assert_eq!(scope.end_line, 11);
        assert!(scope.text.starts_with("def greet"));
    }

    #[test]
    fn test_class_contains_range_spanning_methods() {
        let scope = PythonResolver
            .find_enclosing_scope(SAMPLE, 5, 11)
            .unwrap()
            .unwrap();
        assert_eq!(scope.kind, ScopeKind::Definition);
        assert_eq!(scope.start_line, 4);
        assert_eq!(scope.end_line, 11);
    }

    #[test]
    fn test_block_fallback_inside_function() {
        let inside_if = "\
x = 1
if x:
    a = 1
    b = 2
    c = 3
";
        let scope = PythonResolver
            .find_enclosing_scope(inside_if, 3, 4)
            .unwrap()
            .unwrap();
        assert_eq!(scope.kind, ScopeKind::Block);
        assert_eq!(scope.start_line, 2);
        assert_eq!(scope.end_line, 5);
    }

    #[test]
    fn test_no_scope_at_module_level() {
        let scope = PythonResolver.find_enclosing_scope(SAMPLE, 1, 1).unwrap();
        assert!(scope.is_none());
    }

    #[test]
    fn test_window_past_end_of_file_is_clamped() {
        let scope = PythonResolver
            .find_enclosing_scope(SAMPLE, 14, 500)
            .unwrap()
            .unwrap();
        assert_eq!(scope.start_line, 14);
    }

    #[test]
    fn test_check_validity() {
        assert!(PythonResolver.check_validity(SAMPLE).unwrap().valid);

        let broken = "def f(:\n    return 1\n";
        let validity = PythonResolver.check_validity(broken).unwrap();
        assert!(!validity.valid);
        assert!(validity.error.unwrap().contains("syntax error"));
    }

    #[test]
    fn test_invalid_query_span_is_rejected() {
        assert!(matches!(
            PythonResolver.find_enclosing_scope(SAMPLE, 0, 3),
            Err(ContextError::InvalidHunkCoordinates(_))
        ));
        assert!(matches!(
            PythonResolver.find_enclosing_scope(SAMPLE, 5, 3),
            Err(ContextError::InvalidHunkCoordinates(_))
        ));
    }
}
