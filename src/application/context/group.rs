//! Bucketing hunks by the scope that encloses them.

use super::trim::trim_hunk;
use crate::domain::{ContextConfig, ContextError, EnclosingScope, Hunk, Patch, ScopeKey};
use crate::infra::language::ScopeResolver;

/// All hunks that resolved to one scope, in diff order.
#[derive(Debug, Clone)]
pub struct ScopeGroup {
    pub key: ScopeKey,
    pub scope: EnclosingScope,
    pub hunks: Vec<Hunk>,
}

/// Output of grouping: scope buckets in discovery order, plus the
/// hunks that found no scope and fall back to margin expansion.
#[derive(Debug, Clone, Default)]
pub struct GroupedHunks {
    pub groups: Vec<ScopeGroup>,
    pub fallback: Vec<Hunk>,
}

/// Bucket each hunk of `patch` under the scope enclosing it in the
/// new file. Hunks whose scope cannot be resolved (no enclosing node,
/// resolver failure, or a hunk with no edit lines) are routed to the
/// fallback set instead; resolution problems never escape this
/// function.
pub fn group_hunks(
    patch: &Patch,
    new_contents: &str,
    resolver: &dyn ScopeResolver,
    config: &ContextConfig,
) -> GroupedHunks {
    let file_line_count = new_contents.lines().count();
    let mut grouped = GroupedHunks::default();

    for hunk in &patch.hunks {
        let trimmed = match trim_hunk(hunk) {
            Ok(trimmed) => trimmed,
            Err(err) => {
                log::warn!("Routing hunk at +{} to fallback: {}", hunk.new_start, err);
                grouped.fallback.push(hunk.clone());
                continue;
            }
        };

        match resolve_scope(resolver, new_contents, file_line_count, &trimmed, config) {
            Ok(Some(scope)) => {
                let key = scope.key();
                match grouped.groups.iter_mut().find(|group| group.key == key) {
                    Some(group) => group.hunks.push(hunk.clone()),
                    None => grouped.groups.push(ScopeGroup {
                        key,
                        scope,
                        hunks: vec![hunk.clone()],
                    }),
                }
            }
            Ok(None) => {
                log::debug!("No enclosing scope for hunk at +{}", trimmed.new_start);
                grouped.fallback.push(hunk.clone());
            }
            Err(err) => {
                log::debug!(
                    "Scope resolution failed for hunk at +{}: {}",
                    trimmed.new_start,
                    err
                );
                grouped.fallback.push(hunk.clone());
            }
        }
    }

    grouped
}

/// Query the resolver for the scope enclosing a trimmed hunk.
///
/// The first query widens the edit span by `scope_search_margin` on
/// both sides (clamped to the file) so that a resolvable scope covers
/// the edit's whole neighborhood. Under smallest-containing selection
/// a widened span is strictly harder to contain, so when it yields
/// nothing the exact edit span is queried once before giving up. Two
/// queries by design, not a retry: no failure is being recovered.
fn resolve_scope(
    resolver: &dyn ScopeResolver,
    new_contents: &str,
    file_line_count: usize,
    trimmed: &Hunk,
    config: &ContextConfig,
) -> Result<Option<EnclosingScope>, ContextError> {
    let last_line = file_line_count.max(1);
    let edit_start = trimmed.new_start.min(last_line).max(1);
    let edit_end = (trimmed.new_start + trimmed.new_side_count().max(1) - 1).min(last_line);

    let window_start = edit_start.saturating_sub(config.scope_search_margin).max(1);
    let window_end = (edit_end + config.scope_search_margin).min(last_line);

    if let Some(scope) = resolver.find_enclosing_scope(new_contents, window_start, window_end)? {
        return Ok(Some(scope));
    }
    resolver.find_enclosing_scope(new_contents, edit_start, edit_end.max(edit_start))
}
