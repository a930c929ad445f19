/// Combat configuration constants and tunable balance parameters.
///
/// Capacity constants are compile-time values used as type parameters.
/// Everything else is a runtime-tunable default that content files may
/// override (see `combat-content`'s `ConfigLoader`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Lowest HP value a combatant can be pushed to.
    pub death_floor: i32,
    /// Damage dealt by any registered hit is never lower than this.
    pub minimum_damage: i32,

    /// Inclusive clamp applied to every accuracy computation.
    pub accuracy_floor: i32,
    pub accuracy_ceiling: i32,
    pub physical_base_accuracy: i32,
    pub magic_base_accuracy: i32,

    /// Accuracy penalty applied when the defender is defending.
    pub defend_accuracy_penalty: i32,
    /// Defense multiplier applied when the defender is defending.
    pub defend_defense_multiplier: f64,
    /// Magic resist multiplier applied when the defender is defending.
    pub defend_magic_resist_multiplier: f64,

    pub non_proficient_accuracy_penalty: i32,
    pub non_proficient_damage_multiplier: f64,
    pub non_proficient_speed_penalty: i32,

    pub physical_variance: VarianceRange,
    pub magic_variance: VarianceRange,

    /// Share of a pool's maximum regenerated at each round boundary.
    pub regen_percent: f64,
    /// Regen share for Ki pools owned by the monk archetype.
    pub ki_regen_percent: f64,

    /// Allies below this HP fraction trigger enemy healing.
    pub heal_ally_threshold: f64,
    /// Row weights used by melee attackers when picking a target.
    pub melee_row_weights: RowWeights,
    /// STR scaling applied on top of an enemy's sampled attack damage.
    pub enemy_str_scaling: f64,

    /// Share of the primary hit's physical power dealt to pierced targets.
    pub pierce_damage_ratio: f64,

    pub base_crit_chance: f64,

    /// Multipliers converting ability cost into power when a descriptor
    /// leaves `power` at zero.
    pub heal_power_per_cost: f64,
    pub spell_power_per_cost: f64,
    pub physical_bonus_per_cost: f64,
}

/// Inclusive bounds of a uniform damage variance draw.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarianceRange {
    pub min: f64,
    pub max: f64,
}

impl VarianceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Target-selection weights per defender row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowWeights {
    pub front: u32,
    pub mid: u32,
    pub back: u32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_STATUS_EFFECTS: usize = 8;
    pub const MAX_PIERCE_TARGETS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DEATH_FLOOR: i32 = 0;
    pub const DEFAULT_REGEN_PERCENT: f64 = 0.03;
    pub const DEFAULT_KI_REGEN_PERCENT: f64 = 0.0375;

    pub fn new() -> Self {
        Self {
            death_floor: Self::DEFAULT_DEATH_FLOOR,
            minimum_damage: 1,
            accuracy_floor: 30,
            accuracy_ceiling: 95,
            physical_base_accuracy: 75,
            magic_base_accuracy: 80,
            defend_accuracy_penalty: 15,
            defend_defense_multiplier: 1.5,
            defend_magic_resist_multiplier: 1.25,
            non_proficient_accuracy_penalty: 15,
            non_proficient_damage_multiplier: 0.8,
            non_proficient_speed_penalty: 5,
            physical_variance: VarianceRange::new(0.85, 1.15),
            magic_variance: VarianceRange::new(0.90, 1.10),
            regen_percent: Self::DEFAULT_REGEN_PERCENT,
            ki_regen_percent: Self::DEFAULT_KI_REGEN_PERCENT,
            heal_ally_threshold: 0.6,
            melee_row_weights: RowWeights {
                front: 5,
                mid: 3,
                back: 2,
            },
            enemy_str_scaling: 0.5,
            pierce_damage_ratio: 0.6,
            base_crit_chance: 5.0,
            heal_power_per_cost: 1.5,
            spell_power_per_cost: 1.2,
            physical_bonus_per_cost: 0.8,
        }
    }

    pub fn with_death_floor(death_floor: i32) -> Self {
        Self {
            death_floor,
            ..Self::new()
        }
    }

    /// Clamps a raw accuracy value into the configured bounds.
    pub fn clamp_accuracy(&self, accuracy: i32) -> i32 {
        accuracy.clamp(self.accuracy_floor, self.accuracy_ceiling)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
