//! Content loaders for reading combat data from files.
//!
//! Balance values and position tables come from TOML; enemies, encounters
//! and the party come from RON. Every loader returns [`LoadResult`] with the
//! failing path in the error message.

pub mod config;
pub mod encounters;
pub mod enemies;
pub mod factory;
pub mod party;
pub mod tables;

mod elements;

pub use config::ConfigLoader;
pub use encounters::EncounterLoader;
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use party::PartyLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
