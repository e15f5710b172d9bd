//! Infrastructure layer (adapters/implementations).
//!
//! Diff parsing backed by `unidiff`, per-language tree-sitter
//! resolvers, and config loading.

pub mod config;
pub mod diff;
pub mod language;
