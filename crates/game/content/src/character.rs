//! Persistent party members and their bridge into combat.
//!
//! A [`Character`] outlives encounters. Before a fight it is snapshotted into a
//! [`Combatant`] with [`build_player_combatant`]; afterwards the surviving HP,
//! pools and lingering afflictions are copied back with [`write_back`].

use combat_core::{
    Ability, ClassKind, Combatant, CombatantKind, ResourcePools, Resistances, Row, StatBlock,
    StatusEffect, StatusEffects, Weapon,
};

/// A party member as stored between encounters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub class: ClassKind,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub level: u32,
    pub hp: i32,
    pub max_hp: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatBlock,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pools: ResourcePools,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_resist: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub focus_bonus: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: Resistances,
    /// `None` means the character fights unarmed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<Weapon>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub row: Row,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<Ability>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: StatusEffects,
}

#[cfg(feature = "serde")]
fn default_level() -> u32 {
    1
}

/// What one exploration step did to a character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub damage: i32,
    pub expired: Vec<StatusEffect>,
    pub messages: Vec<String>,
}

impl Character {
    pub fn new(name: impl Into<String>, class: ClassKind, max_hp: i32) -> Self {
        Self {
            name: name.into(),
            class,
            level: 1,
            hp: max_hp,
            max_hp,
            stats: StatBlock::uniform(10),
            pools: ResourcePools::new(),
            defense: 0,
            magic_resist: 0,
            focus_bonus: 0,
            resistances: Resistances::new(),
            weapon: None,
            row: Row::Front,
            abilities: Vec::new(),
            status: StatusEffects::empty(),
        }
    }

    pub fn is_conscious(&self) -> bool {
        self.hp > 0
    }

    /// Advances step-counted afflictions by one step of exploration.
    ///
    /// Poison damage outside combat never drops a conscious character below
    /// 1 HP.
    pub fn take_step(&mut self) -> StepReport {
        let tick = self.status.tick_step();
        let mut report = StepReport::default();

        if tick.damage > 0 && self.is_conscious() {
            let dealt = tick.damage.min(self.hp - 1).max(0);
            self.hp -= dealt;
            report.damage = dealt;
            report.messages.push(format!(
                "{} suffers {dealt} poison damage.",
                self.name
            ));
        }
        for effect in &tick.expired {
            report
                .messages
                .push(format!("{}'s {} wears off.", self.name, effect.label()));
        }
        report.expired = tick.expired;
        report
    }
}

/// Snapshots a character into a combatant for one encounter.
///
/// The character is left untouched. A character without a weapon fights
/// unarmed.
pub fn build_player_combatant(character: &Character) -> Combatant {
    let mut builder = Combatant::builder(character.name.clone(), CombatantKind::Player)
        .class(character.class)
        .level(character.level)
        .max_hp(character.max_hp)
        .hp(character.hp)
        .stats(character.stats)
        .pools(character.pools.clone())
        .defense(character.defense)
        .magic_resist(character.magic_resist)
        .focus_bonus(character.focus_bonus)
        .resistances(character.resistances.clone())
        .row(character.row)
        .abilities(character.abilities.iter().cloned())
        .status(character.status.clone());

    if let Some(weapon) = &character.weapon {
        builder = builder.weapon(weapon.clone());
    }
    builder.build()
}

/// Copies the results of an encounter back onto the character.
///
/// HP and pool levels carry over. Step-counted afflictions (poison, curses)
/// linger after the fight; round-counted ones end with it.
pub fn write_back(character: &mut Character, combatant: &Combatant) {
    character.hp = combatant.hp.clamp(0, character.max_hp);

    for (kind, pool) in character.pools.iter_mut() {
        if let Some(after) = combatant.pools.get(kind) {
            pool.current = after.current.clamp(0, pool.max);
        }
    }

    let mut status = combatant.status.clone();
    status.remove_where(|effect| {
        !matches!(
            effect,
            StatusEffect::Poison { .. } | StatusEffect::Curse { .. }
        )
    });
    character.status = status;

    tracing::debug!(
        name = %character.name,
        hp = character.hp,
        afflictions = character.status.len(),
        "wrote combat results back"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{
        CombatConfig, CurseKind, DebuffKind, Pool, PoisonTier, ResourceKind, StatWeights,
    };

    fn ranger() -> Character {
        let mut ranger = Character::new("Sable", ClassKind::Ranger, 30);
        ranger.pools = ResourcePools::new().with(ResourceKind::DexSp, Pool::new(12, 20));
        ranger.row = Row::Mid;
        ranger
    }

    #[test]
    fn snapshot_copies_without_mutating() {
        let mut character = ranger();
        character.weapon = Some(Weapon {
            name: "Hunting Bow".into(),
            stat_weights: StatWeights::strength(0.0).with_dexterity(0.6),
            ..Weapon::unarmed()
        });
        let before = character.clone();

        let combatant = build_player_combatant(&character);
        assert_eq!(character, before);
        assert_eq!(combatant.name, "Sable");
        assert_eq!(combatant.hp, 30);
        assert_eq!(combatant.row, Row::Mid);
        assert_eq!(combatant.weapon.name, "Hunting Bow");
        assert_eq!(combatant.pools.current(ResourceKind::DexSp), 12);
        assert!(combatant.alive);
    }

    #[test]
    fn missing_weapon_fights_unarmed() {
        let combatant = build_player_combatant(&ranger());
        assert_eq!(combatant.weapon, Weapon::unarmed());
    }

    #[test]
    fn write_back_keeps_step_afflictions_only() {
        let config = CombatConfig::default();
        let mut character = ranger();
        let mut combatant = build_player_combatant(&character);
        combatant.take_damage(11, &config);
        let _ = combatant.pools.try_spend(ResourceKind::DexSp, 5);
        combatant.status.add(StatusEffect::poison(PoisonTier::Moderate));
        combatant.status.add(StatusEffect::Debuff {
            kind: DebuffKind::Slowed,
            rounds: 2,
        });
        combatant.status.add(StatusEffect::Curse {
            kind: CurseKind::Frailty,
            magnitude: 2,
            steps_remaining: 30,
        });

        write_back(&mut character, &combatant);
        assert_eq!(character.hp, 19);
        assert_eq!(character.pools.current(ResourceKind::DexSp), 7);
        assert_eq!(character.status.len(), 2);
        assert!(character.status.is_poisoned());
    }

    #[test]
    fn poison_runs_its_course_while_walking() {
        let mut character = ranger();
        character.status.add(StatusEffect::poison(PoisonTier::Weak));

        let total: i32 = (0..12).map(|_| character.take_step().damage).sum();
        assert_eq!(total, 16);
        assert_eq!(character.hp, 14);
        assert!(!character.status.is_poisoned());
    }

    #[test]
    fn walking_poison_leaves_one_hp() {
        let mut character = ranger();
        character.hp = 3;
        character.status.add(StatusEffect::poison(PoisonTier::Deadly));

        let report = (0..2).map(|_| character.take_step()).last();
        assert_eq!(report.map(|r| r.damage), Some(2));
        assert_eq!(character.hp, 1);
    }
}
