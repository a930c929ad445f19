//! Enemy table loader.

use std::collections::HashMap;
use std::path::Path;

use crate::bestiary::EnemyTemplate;
use crate::loaders::elements::infer_elements;
use crate::loaders::{LoadResult, read_file};

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load the enemy table from a RON file.
    ///
    /// RON format: `{ "goblin": (name: "Goblin", max_hp: 14, ...), ... }`
    ///
    /// Abilities without an explicit element get one inferred from their name.
    pub fn load(path: &Path) -> LoadResult<HashMap<String, EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy RON at {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<HashMap<String, EnemyTemplate>> {
        let mut enemies: HashMap<String, EnemyTemplate> = ron::from_str(content)?;

        for (key, template) in &mut enemies {
            if template.max_hp <= 0 {
                anyhow::bail!("enemy '{key}' has non-positive max_hp {}", template.max_hp);
            }
            let (low, high) = template.profile.gold_reward;
            if low > high {
                anyhow::bail!("enemy '{key}' has an inverted gold range ({low}, {high})");
            }
            infer_elements(template.abilities.iter_mut());
        }

        tracing::debug!(count = enemies.len(), "loaded enemy table");
        Ok(enemies)
    }
}
