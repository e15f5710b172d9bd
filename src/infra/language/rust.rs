//! Rust scope resolution.

use super::walk::{self, KindTables};
use super::{grammar, LanguageId, ScopeResolver};
use crate::domain::{ContextError, EnclosingScope, Validity};

const TABLES: KindTables = KindTables {
    definitions: &[
        "function_item",
        "impl_item",
        "trait_item",
        "struct_item",
        "enum_item",
        "mod_item",
        "closure_expression",
    ],
    blocks: &[
        "if_expression",
        "match_expression",
        "for_expression",
        "while_expression",
        "loop_expression",
    ],
};

pub struct RustResolver;

impl ScopeResolver for RustResolver {
    fn language(&self) -> LanguageId {
        LanguageId::Rust
    }

    fn find_enclosing_scope(
        &self,
        file: &str,
        line_start: usize,
        line_end: usize,
    ) -> Result<Option<EnclosingScope>, ContextError> {
        walk::find_enclosing_scope(
            &grammar(LanguageId::Rust),
            &TABLES,
            file,
            line_start,
            line_end,
        )
    }

    fn check_validity(&self, file: &str) -> Result<Validity, ContextError> {
        walk::check_validity(&grammar(LanguageId::Rust), file)
    }
}
