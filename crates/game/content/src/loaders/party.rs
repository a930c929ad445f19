//! Party roster loader.

use std::path::Path;

use crate::character::Character;
use crate::loaders::elements::infer_elements;
use crate::loaders::{LoadResult, read_file};

/// Loader for the adventuring party from RON files.
pub struct PartyLoader;

impl PartyLoader {
    /// Load the party from a RON file.
    ///
    /// RON format: `[ (name: "Brannoc", class: Fighter, hp: 42, max_hp: 42, ...), ... ]`
    pub fn load(path: &Path) -> LoadResult<Vec<Character>> {
        let content = read_file(path)?;
        let mut party: Vec<Character> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse party RON at {}: {}", path.display(), e)
        })?;

        for character in &mut party {
            if character.max_hp <= 0 {
                anyhow::bail!(
                    "character '{}' has non-positive max_hp {}",
                    character.name,
                    character.max_hp
                );
            }
            character.hp = character.hp.min(character.max_hp);
            infer_elements(character.abilities.iter_mut());
        }
        Ok(party)
    }

    /// Writes the party back out, e.g. after an encounter.
    pub fn save(path: &Path, party: &[Character]) -> LoadResult<()> {
        let pretty = ron::ser::PrettyConfig::new().struct_names(false);
        let content = ron::ser::to_string_pretty(party, pretty)
            .map_err(|e| anyhow::anyhow!("Failed to serialize party: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
    }
}
