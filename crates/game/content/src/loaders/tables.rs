//! Position tables loader.

use std::path::Path;

use combat_core::PositionTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for row-vs-row position tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load position tables from a TOML file.
    ///
    /// Range classes absent from the file use the built-in tables; pairings
    /// absent from a class use that class's `fallback`.
    pub fn load(path: &Path) -> LoadResult<PositionTables> {
        let content = read_file(path)?;
        toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse tables TOML at {}: {}", path.display(), e)
        })
    }
}
