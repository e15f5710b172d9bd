//! patchscope augments a unified diff with the smallest meaningful
//! syntactic construct enclosing each change, so a reviewer sees whole
//! functions and blocks instead of bare hunks.
//!
//! Entry points live in [`application::context`]: per changed file,
//! [`application::context::smart_context_strategy`] picks a
//! tree-sitter resolver by extension and rebuilds each touched scope
//! with its edits in place, degrading to fixed-window margin expansion
//! whenever syntax support is missing or extraction fails.

pub mod application;
pub mod domain;
pub mod infra;
