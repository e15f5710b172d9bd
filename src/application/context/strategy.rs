//! Per-file strategy selection: the pipeline's entry points.

use super::build::build_scope_context;
use super::expand::expand_hunk;
use super::group::group_hunks;
use super::merge::merge_hunks;
use crate::domain::{ContextConfig, ContextError, ReviewFile};
use crate::infra::diff::parse_patch;
use crate::infra::language::{resolver_for_path, ScopeResolver};

/// Produce the richest context string available for one file.
///
/// With a resolver for the file's extension, runs the scope pipeline:
/// hunks grouped by enclosing scope, merged per scope and rebuilt with
/// their edits in place, while unresolvable hunks get margin
/// expansion. Without a resolver, or when any error escapes the scope
/// pipeline, the whole file degrades to margin expansion. A file
/// always yields a complete string from exactly one path, never a mix
/// of a half-failed pipeline and its fallback.
pub fn smart_context_strategy(file: &ReviewFile, config: &ContextConfig) -> String {
    match resolver_for_path(&file.filename) {
        Some(resolver) => match scope_context_blocks(file, resolver, config) {
            Ok(blocks) => join_blocks(&file.filename, &blocks),
            Err(err) => {
                log::warn!(
                    "Scope context failed for {}; falling back to margin expansion: {}",
                    file.filename,
                    err
                );
                expanded_patch_strategy(file, config)
            }
        },
        None => expanded_patch_strategy(file, config),
    }
}

/// Margin-expand every hunk of the file against its pre-change
/// contents. The strategy of record for files without a resolver, and
/// the fallback for the scope pipeline.
pub fn expanded_patch_strategy(file: &ReviewFile, config: &ContextConfig) -> String {
    match expanded_blocks(file, config) {
        Ok(blocks) => join_blocks(&file.filename, &blocks),
        Err(err) => {
            log::warn!(
                "Margin expansion failed for {}; emitting raw patch: {}",
                file.filename,
                err
            );
            raw_patch_strategy(file)
        }
    }
}

/// The file's patch verbatim under its heading. Last resort when even
/// the diff itself cannot be parsed.
pub fn raw_patch_strategy(file: &ReviewFile) -> String {
    format!("## {}\n\n{}", file.filename, file.patch)
}

fn join_blocks(filename: &str, blocks: &[String]) -> String {
    format!("## {}\n\n{}", filename, blocks.join("\n\n"))
}

fn scope_context_blocks(
    file: &ReviewFile,
    resolver: &dyn ScopeResolver,
    config: &ContextConfig,
) -> Result<Vec<String>, ContextError> {
    let patch_set = parse_patch(&file.patch)?;
    let mut blocks = Vec::new();

    for patch in patch_set.patches() {
        let grouped = group_hunks(patch, &file.new_contents, resolver, config);

        for group in &grouped.groups {
            let combined = merge_hunks(&group.hunks, &file.new_contents)?;
            blocks.push(build_scope_context(
                &file.new_contents,
                &group.scope,
                &combined,
            )?);
        }
        for hunk in &grouped.fallback {
            blocks.push(expand_hunk(&file.old_contents, hunk, config)?);
        }
    }

    Ok(blocks)
}

fn expanded_blocks(
    file: &ReviewFile,
    config: &ContextConfig,
) -> Result<Vec<String>, ContextError> {
    let patch_set = parse_patch(&file.patch)?;
    let mut blocks = Vec::new();

    for patch in patch_set.patches() {
        for hunk in &patch.hunks {
            blocks.push(expand_hunk(&file.old_contents, hunk, config)?);
        }
    }

    Ok(blocks)
}
