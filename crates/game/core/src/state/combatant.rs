//! The unit of battle.

use crate::config::CombatConfig;

use super::{
    Ability, ClassKind, CombatantId, CombatantKind, Damage, PhysicalKind, ResourcePools,
    Resistances, Row, Stat, StatBlock, StatusEffects, Weapon, WeaponRange,
};

/// Enemy target-selection personality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiArchetype {
    #[default]
    Aggressive,
    Defensive,
    Tactical,
    Supportive,
    Boss,
}

/// Enemy-only combat data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyProfile {
    pub ai: AiArchetype,
    pub attack_damage: Damage,
    pub attack_range: WeaponRange,
    pub attack_kind: PhysicalKind,
    pub xp_reward: u32,
    /// Inclusive gold range.
    pub gold_reward: (u32, u32),
}

impl Default for EnemyProfile {
    fn default() -> Self {
        Self {
            ai: AiArchetype::Aggressive,
            attack_damage: Damage::Flat(1),
            attack_range: WeaponRange::Melee,
            attack_kind: PhysicalKind::Blunt,
            xp_reward: 0,
            gold_reward: (0, 0),
        }
    }
}

/// A combatant snapshot owned by the encounter.
///
/// Built once per encounter by the content layer, mutated during play and
/// written back afterwards. `id` is assigned by the roster.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub kind: CombatantKind,
    pub name: String,
    pub class: Option<ClassKind>,
    pub level: u32,

    pub hp: i32,
    pub max_hp: i32,
    pub pools: ResourcePools,

    pub stats: StatBlock,
    pub defense: i32,
    pub magic_resist: i32,
    pub focus_bonus: i32,
    pub resistances: Resistances,

    pub weapon: Weapon,
    pub row: Row,
    pub abilities: Vec<Ability>,
    pub status: StatusEffects,
    pub enemy: Option<EnemyProfile>,

    pub is_defending: bool,
    pub alive: bool,
}

impl Combatant {
    pub fn builder(name: impl Into<String>, kind: CombatantKind) -> CombatantBuilder {
        CombatantBuilder::new(name, kind)
    }

    /// Alive and above zero HP. Only active combatants are scheduled or
    /// targeted.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.alive && self.hp > 0
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.kind == CombatantKind::Player
    }

    #[inline]
    pub fn is_enemy(&self) -> bool {
        self.kind == CombatantKind::Enemy
    }

    pub fn opposes(&self, other: &Combatant) -> bool {
        self.kind.opposes(other.kind)
    }

    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        f64::from(self.hp.max(0)) / f64::from(self.max_hp)
    }

    /// Attribute feeding spell accuracy and damage.
    pub fn casting_stat(&self) -> i32 {
        let stat = self.class.map_or(Stat::Int, ClassKind::casting_stat);
        self.stats.get(stat)
    }

    /// Players wielding a weapon outside their training suffer penalties.
    pub fn is_non_proficient(&self) -> bool {
        match (self.kind, self.class) {
            (CombatantKind::Player, Some(class)) => !self.weapon.is_proficient(class),
            _ => false,
        }
    }

    /// Subtracts HP. Returns true if this hit dropped the combatant.
    ///
    /// HP never goes below the configured death floor.
    pub fn take_damage(&mut self, amount: i32, config: &CombatConfig) -> bool {
        if !self.alive {
            return false;
        }
        self.hp -= amount.max(0);
        if self.hp <= 0 {
            self.hp = self.hp.max(config.death_floor);
            self.alive = false;
            self.is_defending = false;
            return true;
        }
        false
    }

    /// Adds HP up to the maximum. Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let restored = amount.clamp(0, (self.max_hp - self.hp).max(0));
        self.hp += restored;
        restored
    }

    /// Brings a fallen combatant back with the given HP (at least 1).
    pub fn revive(&mut self, hp: i32) -> i32 {
        self.hp = hp.clamp(1, self.max_hp.max(1));
        self.alive = true;
        self.hp
    }

    /// Log line announcing this combatant's death.
    pub fn death_message(&self) -> String {
        match self.kind {
            CombatantKind::Player => format!("{} has fallen!", self.name),
            CombatantKind::Enemy => format!("{} is defeated!", self.name),
        }
    }
}

/// Builder for [`Combatant`].
///
/// Unset fields take neutral defaults: level 1, 10 in every stat, full HP,
/// Front row, no abilities.
#[derive(Clone, Debug)]
pub struct CombatantBuilder {
    kind: CombatantKind,
    name: String,
    class: Option<ClassKind>,
    level: u32,
    hp: Option<i32>,
    max_hp: i32,
    pools: ResourcePools,
    stats: StatBlock,
    defense: i32,
    magic_resist: i32,
    focus_bonus: i32,
    resistances: Resistances,
    weapon: Option<Weapon>,
    row: Row,
    abilities: Vec<Ability>,
    status: StatusEffects,
    enemy: Option<EnemyProfile>,
}

impl CombatantBuilder {
    pub fn new(name: impl Into<String>, kind: CombatantKind) -> Self {
        Self {
            kind,
            name: name.into(),
            class: None,
            level: 1,
            hp: None,
            max_hp: 10,
            pools: ResourcePools::new(),
            stats: StatBlock::uniform(10),
            defense: 0,
            magic_resist: 0,
            focus_bonus: 0,
            resistances: Resistances::new(),
            weapon: None,
            row: Row::Front,
            abilities: Vec::new(),
            status: StatusEffects::empty(),
            enemy: None,
        }
    }

    pub fn class(mut self, class: ClassKind) -> Self {
        self.class = Some(class);
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Sets maximum HP; current HP starts full unless [`hp`](Self::hp) is set.
    pub fn max_hp(mut self, max_hp: i32) -> Self {
        self.max_hp = max_hp;
        self
    }

    pub fn hp(mut self, hp: i32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn pools(mut self, pools: ResourcePools) -> Self {
        self.pools = pools;
        self
    }

    pub fn stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    pub fn defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    pub fn magic_resist(mut self, magic_resist: i32) -> Self {
        self.magic_resist = magic_resist;
        self
    }

    pub fn focus_bonus(mut self, focus_bonus: i32) -> Self {
        self.focus_bonus = focus_bonus;
        self
    }

    pub fn resistances(mut self, resistances: Resistances) -> Self {
        self.resistances = resistances;
        self
    }

    pub fn weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.row = row;
        self
    }

    pub fn ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn abilities(mut self, abilities: impl IntoIterator<Item = Ability>) -> Self {
        self.abilities.extend(abilities);
        self
    }

    pub fn status(mut self, status: StatusEffects) -> Self {
        self.status = status;
        self
    }

    pub fn enemy_profile(mut self, profile: EnemyProfile) -> Self {
        self.enemy = Some(profile);
        self
    }

    pub fn build(self) -> Combatant {
        let weapon = match self.weapon {
            Some(weapon) => weapon,
            None => {
                if self.kind == CombatantKind::Player {
                    tracing::warn!(name = %self.name, "no weapon equipped, falling back to unarmed");
                }
                Weapon::unarmed()
            }
        };
        let enemy = match (self.kind, self.enemy) {
            (CombatantKind::Enemy, None) => Some(EnemyProfile::default()),
            (_, profile) => profile,
        };
        let max_hp = self.max_hp.max(1);
        let hp = self.hp.unwrap_or(max_hp).min(max_hp);

        Combatant {
            id: CombatantId::default(),
            kind: self.kind,
            name: self.name,
            class: self.class,
            level: self.level,
            hp,
            max_hp,
            pools: self.pools,
            stats: self.stats,
            defense: self.defense,
            magic_resist: self.magic_resist,
            focus_bonus: self.focus_bonus,
            resistances: self.resistances,
            weapon,
            row: self.row,
            abilities: self.abilities,
            status: self.status,
            enemy,
            is_defending: false,
            alive: hp > 0,
        }
    }
}
