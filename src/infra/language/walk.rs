//! Shared tree-sitter traversal behind every language resolver.
//!
//! Resolvers differ only in their grammar and node-kind tables; the
//! containment search and validity walk live here once.

use crate::domain::{ContextError, EnclosingScope, ScopeKind, Validity};
use tree_sitter::{Language, Node, Parser, Tree};

/// Node kinds a language counts as definition-like or block-like.
pub(super) struct KindTables {
    pub definitions: &'static [&'static str],
    pub blocks: &'static [&'static str],
}

fn parse_tree(language: &Language, file: &str) -> Result<Tree, ContextError> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|err| ContextError::ParseFailure(err.to_string()))?;
    parser
        .parse(file, None)
        .ok_or_else(|| ContextError::ParseFailure("parser produced no syntax tree".to_string()))
}

/// Pre-order walk over every node of the tree using an explicit
/// cursor, no recursion. The callback returns `false` to stop early.
fn for_each_node<'tree>(tree: &'tree Tree, mut visit: impl FnMut(Node<'tree>) -> bool) {
    let mut cursor = tree.walk();
    loop {
        if !visit(cursor.node()) {
            return;
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

fn node_height(node: &Node<'_>) -> usize {
    node.end_position().row - node.start_position().row
}

/// Keep the strictly smaller node; size ties keep the earlier find.
/// Pre-order discovery order is the documented tie-break.
fn keep_smaller<'tree>(slot: &mut Option<Node<'tree>>, node: Node<'tree>) {
    match slot {
        Some(current) if node_height(&node) >= node_height(current) => {}
        _ => *slot = Some(node),
    }
}

/// Find the smallest definition-like node whose row span fully
/// contains the 1-indexed, inclusive `[line_start, line_end]`; when no
/// definition contains it, the smallest block-like node. A node only
/// qualifies if it spans at least two rows and its text is non-blank.
///
/// `line_end` is clamped to the file's last row, so windows widened
/// past end-of-file remain answerable.
pub(super) fn find_enclosing_scope(
    language: &Language,
    tables: &KindTables,
    file: &str,
    line_start: usize,
    line_end: usize,
) -> Result<Option<EnclosingScope>, ContextError> {
    if line_start == 0 || line_end < line_start {
        return Err(ContextError::InvalidHunkCoordinates(format!(
            "scope query {line_start}..{line_end} is not a valid 1-indexed span"
        )));
    }

    let last_row = file.lines().count().saturating_sub(1);
    let tree = parse_tree(language, file)?;
    let start_row = line_start - 1;
    let end_row = (line_end - 1).min(last_row);
    if start_row > end_row {
        return Ok(None);
    }

    let bytes = file.as_bytes();
    let mut best_definition: Option<Node<'_>> = None;
    let mut best_block: Option<Node<'_>> = None;

    for_each_node(&tree, |node| {
        let contains =
            node.start_position().row <= start_row && end_row <= node.end_position().row;
        if !contains || node_height(&node) < 1 {
            return true;
        }
        let Ok(text) = node.utf8_text(bytes) else {
            return true;
        };
        if text.trim().is_empty() {
            return true;
        }

        if tables.definitions.contains(&node.kind()) {
            keep_smaller(&mut best_definition, node);
        } else if tables.blocks.contains(&node.kind()) {
            keep_smaller(&mut best_block, node);
        }
        true
    });

    let chosen = best_definition
        .map(|node| (node, ScopeKind::Definition))
        .or(best_block.map(|node| (node, ScopeKind::Block)));

    let Some((node, kind)) = chosen else {
        return Ok(None);
    };
    let text = node
        .utf8_text(bytes)
        .map_err(|err| ContextError::ParseFailure(err.to_string()))?;

    Ok(Some(EnclosingScope {
        kind,
        start_line: node.start_position().row + 1,
        end_line: node.end_position().row + 1,
        text: text.to_string(),
    }))
}

/// Report whether the file parses without any structural error node.
/// No recovery, no partial results: one error or missing node anywhere
/// marks the whole input invalid.
pub(super) fn check_validity(language: &Language, file: &str) -> Result<Validity, ContextError> {
    let tree = parse_tree(language, file)?;
    let root = tree.root_node();
    if !root.has_error() {
        return Ok(Validity::valid());
    }

    let mut message = "syntax error".to_string();
    for_each_node(&tree, |node| {
        if node.is_error() || node.is_missing() {
            message = format!("syntax error at line {}", node.start_position().row + 1);
            return false;
        }
        true
    });

    Ok(Validity::invalid(message))
}
