//! Domain types for the context extraction engine.
//! Defines the data model shared by the diff parser, the per-language
//! resolvers and the extraction pipeline.

pub mod config;
pub mod error;
pub mod hunk;
pub mod review;
pub mod scope;

pub use config::*;
pub use error::*;
pub use hunk::*;
pub use review::*;
pub use scope::*;
