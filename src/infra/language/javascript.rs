//! JavaScript scope resolution.

use super::walk::{self, KindTables};
use super::{grammar, LanguageId, ScopeResolver};
use crate::domain::{ContextError, EnclosingScope, Validity};

const TABLES: KindTables = KindTables {
    definitions: &[
        "function_declaration",
        "generator_function_declaration",
        "function_expression",
        "arrow_function",
        "method_definition",
        "class_declaration",
    ],
    blocks: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "while_statement",
        "do_statement",
        "try_statement",
        "switch_statement",
        "catch_clause",
        "finally_clause",
    ],
};

pub struct JavascriptResolver;

impl ScopeResolver for JavascriptResolver {
    fn language(&self) -> LanguageId {
        LanguageId::Javascript
    }

    fn find_enclosing_scope(
        &self,
        file: &str,
        line_start: usize,
        line_end: usize,
    ) -> Result<Option<EnclosingScope>, ContextError> {
        walk::find_enclosing_scope(
            &grammar(LanguageId::Javascript),
            &TABLES,
            file,
            line_start,
            line_end,
        )
    }

    fn check_validity(&self, file: &str) -> Result<Validity, ContextError> {
        walk::check_validity(&grammar(LanguageId::Javascript), file)
    }
}
