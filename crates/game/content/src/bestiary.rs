//! Enemy templates and encounter tables.

use std::collections::HashMap;

use anyhow::{Context, bail};
use combat_core::{Ability, Combatant, CombatantKind, EnemyProfile, Resistances, Row, StatBlock};

/// Blueprint for one kind of enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub level: u32,
    pub max_hp: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatBlock,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_resist: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: Resistances,
    /// Row used when the encounter slot does not pick one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub row: Row,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<Ability>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile: EnemyProfile,
}

#[cfg(feature = "serde")]
fn default_level() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn default_count() -> u32 {
    1
}

/// One line of an encounter table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSlot {
    /// Key into the enemy table.
    pub enemy: String,
    #[cfg_attr(feature = "serde", serde(default = "default_count"))]
    pub count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub row: Option<Row>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterTemplate {
    pub name: String,
    pub enemies: Vec<EncounterSlot>,
}

/// Enemy and encounter tables keyed by content id.
#[derive(Clone, Debug, Default)]
pub struct Bestiary {
    enemies: HashMap<String, EnemyTemplate>,
    encounters: HashMap<String, EncounterTemplate>,
}

impl Bestiary {
    pub fn new(
        enemies: HashMap<String, EnemyTemplate>,
        encounters: HashMap<String, EncounterTemplate>,
    ) -> Self {
        Self {
            enemies,
            encounters,
        }
    }

    pub fn enemy(&self, key: &str) -> Option<&EnemyTemplate> {
        self.enemies.get(key)
    }

    /// Encounter keys in sorted order.
    pub fn encounter_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.encounters.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Instantiates one enemy, optionally overriding its row.
    pub fn build_enemy(&self, key: &str, row: Option<Row>) -> anyhow::Result<Combatant> {
        let template = self
            .enemies
            .get(key)
            .with_context(|| format!("unknown enemy '{key}'"))?;
        Ok(instantiate(template, template.name.clone(), row))
    }

    /// Builds the enemy side of an encounter and returns it with the
    /// encounter's display name.
    ///
    /// Slots with a count above one get letter suffixes ("Goblin A",
    /// "Goblin B") so log lines stay unambiguous.
    pub fn build_encounter(&self, key: &str) -> anyhow::Result<(Vec<Combatant>, String)> {
        let encounter = self
            .encounters
            .get(key)
            .with_context(|| format!("unknown encounter '{key}'"))?;
        if encounter.enemies.is_empty() {
            bail!("encounter '{key}' has no enemies");
        }

        let mut combatants = Vec::new();
        for slot in &encounter.enemies {
            let template = self.enemies.get(&slot.enemy).with_context(|| {
                format!("encounter '{key}' references unknown enemy '{}'", slot.enemy)
            })?;
            for index in 0..slot.count {
                let name = if slot.count > 1 {
                    format!("{} {}", template.name, suffix(index))
                } else {
                    template.name.clone()
                };
                combatants.push(instantiate(template, name, slot.row));
            }
        }

        tracing::debug!(encounter = key, enemies = combatants.len(), "built encounter");
        Ok((combatants, encounter.name.clone()))
    }
}

fn instantiate(template: &EnemyTemplate, name: String, row: Option<Row>) -> Combatant {
    Combatant::builder(name, CombatantKind::Enemy)
        .level(template.level)
        .max_hp(template.max_hp)
        .stats(template.stats)
        .defense(template.defense)
        .magic_resist(template.magic_resist)
        .resistances(template.resistances.clone())
        .row(row.unwrap_or(template.row))
        .abilities(template.abilities.iter().cloned())
        .enemy_profile(template.profile.clone())
        .build()
}

fn suffix(index: u32) -> char {
    char::from_u32(u32::from(b'A') + index % 26).unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::Damage;

    fn bestiary() -> Bestiary {
        let goblin = EnemyTemplate {
            name: "Goblin".into(),
            level: 1,
            max_hp: 14,
            stats: StatBlock::new(9, 11, 8, 4, 5, 4),
            defense: 2,
            magic_resist: 0,
            resistances: Resistances::new(),
            row: Row::Front,
            abilities: Vec::new(),
            profile: EnemyProfile {
                attack_damage: Damage::Range(2, 5),
                xp_reward: 8,
                ..EnemyProfile::default()
            },
        };
        let encounter = EncounterTemplate {
            name: "Goblin Patrol".into(),
            enemies: vec![
                EncounterSlot {
                    enemy: "goblin".into(),
                    count: 2,
                    row: None,
                },
                EncounterSlot {
                    enemy: "goblin".into(),
                    count: 1,
                    row: Some(Row::Back),
                },
            ],
        };
        Bestiary::new(
            HashMap::from([("goblin".to_string(), goblin)]),
            HashMap::from([("patrol".to_string(), encounter)]),
        )
    }

    #[test]
    fn builds_named_enemies_in_slot_order() {
        let (enemies, name) = bestiary().build_encounter("patrol").expect("known encounter");
        assert_eq!(name, "Goblin Patrol");
        let names: Vec<&str> = enemies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Goblin A", "Goblin B", "Goblin"]);
        assert_eq!(enemies[2].row, Row::Back);
        assert!(enemies.iter().all(|c| c.is_enemy() && c.hp == 14));
    }

    #[test]
    fn unknown_keys_are_errors() {
        let bestiary = bestiary();
        let err = bestiary.build_encounter("ambush").unwrap_err();
        assert!(err.to_string().contains("unknown encounter 'ambush'"));
        assert!(bestiary.build_enemy("dragon", None).is_err());
    }
}
