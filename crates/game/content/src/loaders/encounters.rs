//! Encounter table loader.

use std::collections::HashMap;
use std::path::Path;

use crate::bestiary::EncounterTemplate;
use crate::loaders::{LoadResult, read_file};

/// Loader for encounter tables from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load encounter tables from a RON file.
    ///
    /// RON format: `{ "patrol": (name: "Goblin Patrol", enemies: [(enemy: "goblin", count: 2)]) }`
    pub fn load(path: &Path) -> LoadResult<HashMap<String, EncounterTemplate>> {
        let content = read_file(path)?;
        let encounters: HashMap<String, EncounterTemplate> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse encounter RON at {}: {}", path.display(), e)
        })?;

        tracing::debug!(count = encounters.len(), "loaded encounter table");
        Ok(encounters)
    }
}
