//! Loading `ContextConfig` from an explicit TOML file.

use crate::domain::ContextConfig;
use std::path::Path;

/// Read a `ContextConfig` from a TOML file. A missing or unreadable
/// file, or one that fails to parse, yields the defaults; partial
/// files fill in only the keys they set.
pub fn load_config(path: &Path) -> ContextConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return ContextConfig::default();
    };
    toml::from_str(&contents).unwrap_or_else(|err| {
        log::warn!(
            "Ignoring malformed config {}: {}",
            path.display(),
            err
        );
        ContextConfig::default()
    })
}
