//! Content factory for loading every combat data file from one directory.

use std::path::{Path, PathBuf};

use combat_core::{CombatConfig, PositionTables};

use crate::bestiary::Bestiary;
use crate::character::Character;
use crate::loaders::{
    ConfigLoader, EncounterLoader, EnemyLoader, LoadResult, PartyLoader, TablesLoader,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.toml
/// ├── enemies.ron
/// ├── encounters.ron
/// └── party.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat balance values from `config.toml`.
    ///
    /// A missing file means built-in defaults.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::warn!(path = %path.display(), "no config file, using defaults");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load position tables from `tables.toml`.
    ///
    /// A missing file means built-in tables.
    pub fn load_tables(&self) -> LoadResult<PositionTables> {
        let path = self.data_dir.join("tables.toml");
        if !path.exists() {
            tracing::warn!(path = %path.display(), "no tables file, using built-in tables");
            return Ok(PositionTables::default());
        }
        TablesLoader::load(&path)
    }

    /// Load enemy and encounter tables from `enemies.ron` and `encounters.ron`.
    pub fn load_bestiary(&self) -> LoadResult<Bestiary> {
        let enemies = EnemyLoader::load(&self.data_dir.join("enemies.ron"))?;
        let encounters = EncounterLoader::load(&self.data_dir.join("encounters.ron"))?;
        Ok(Bestiary::new(enemies, encounters))
    }

    /// Load the party from `party.ron`.
    pub fn load_party(&self) -> LoadResult<Vec<Character>> {
        PartyLoader::load(&self.party_path())
    }

    /// Persist the party to `party.ron`.
    pub fn save_party(&self, party: &[Character]) -> LoadResult<()> {
        PartyLoader::save(&self.party_path(), party)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn party_path(&self) -> PathBuf {
        self.data_dir.join("party.ron")
    }
}
