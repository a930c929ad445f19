//! Damage and healing calculations.
//!
//! All functions here are pure: randomness (variance, heal bonus) is drawn by
//! the caller and passed in, so every formula can be tested with fixed inputs.

use crate::config::CombatConfig;
use crate::state::{Combatant, CurseKind, DamageKind, Element, Stat};

use super::crit::CritData;
use super::position::PositionModifier;

// ============================================================================
// Physical
// ============================================================================

/// Result of a physical damage computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalDamage {
    /// Raw power before proficiency, position, variance, resistance and
    /// defense. Row-piercing follow-ups scale from this.
    pub base_power: f64,
    /// Final damage, at least the configured minimum.
    pub amount: i32,
}

/// Inputs to [`physical_damage`] that vary per swing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalStrike {
    pub ability_bonus: f64,
    pub position: PositionModifier,
    pub variance: f64,
    pub crit: Option<CritData>,
}

/// Weapon damage against a defender.
///
/// # Formula
///
/// ```text
/// stat_damage = Σ stat[k] × weight[k]        (crossbows skip STR)
/// raw = stat_damage + base + enhancement + ability_bonus - weakness curse
/// raw ×= 0.8 if non-proficient
/// raw ×= position × variance × resistance(subtype)
/// def = (defense - frailty curse) × (1 - bypass) × 1.5 if defending
///       × (1 - crit.ignore_defense) on a qualifying crit
/// final = (raw - def) × crit.multiplier, at least 1, truncated
/// ```
pub fn physical_damage(
    attacker: &Combatant,
    defender: &Combatant,
    strike: PhysicalStrike,
    config: &CombatConfig,
) -> PhysicalDamage {
    let weapon = &attacker.weapon;
    let weights = weapon.stat_weights;

    let stat_damage: f64 = [Stat::Str, Stat::Dex, Stat::Con, Stat::Int, Stat::Wis, Stat::Pie]
        .into_iter()
        .filter(|stat| !(weapon.is_crossbow() && *stat == Stat::Str))
        .map(|stat| f64::from(attacker.stat(stat)) * weights.get(stat))
        .sum();

    let base_power = stat_damage
        + f64::from(weapon.base_damage)
        + f64::from(weapon.enhancement)
        + strike.ability_bonus
        - f64::from(attacker.status.curse_magnitude(CurseKind::Weakness));

    let mut raw = base_power;
    if attacker.is_non_proficient() {
        raw *= config.non_proficient_damage_multiplier;
    }
    raw *= strike.position.damage;
    raw *= strike.variance;
    raw *= defender
        .resistances
        .multiplier(DamageKind::Physical(weapon.physical));

    let mut defense = effective_defense(defender, config);
    if let Some(bypass) = weapon.armor_bypass {
        defense *= 1.0 - bypass.clamp(0.0, 1.0);
    }
    if let Some(ignore) = strike.crit.and_then(|c| c.ignore_defense) {
        defense *= 1.0 - ignore;
    }

    let mut amount = raw - defense;
    if let Some(crit) = strike.crit {
        amount *= crit.multiplier;
    }

    PhysicalDamage {
        base_power,
        amount: floor_damage(amount, config),
    }
}

/// Enemy basic attack damage.
///
/// `sampled` is the enemy's `attack_damage` draw. STR scales on top, then the
/// physical pipeline applies without proficiency or crit terms.
pub fn enemy_damage(
    attacker: &Combatant,
    defender: &Combatant,
    sampled: i32,
    position: PositionModifier,
    variance: f64,
    config: &CombatConfig,
) -> i32 {
    let kind = attacker
        .enemy
        .as_ref()
        .map_or(attacker.weapon.physical, |profile| profile.attack_kind);

    let raw = (f64::from(sampled) + f64::from(attacker.stat(Stat::Str)) * config.enemy_str_scaling
        - f64::from(attacker.status.curse_magnitude(CurseKind::Weakness)))
        * position.damage
        * variance
        * defender.resistances.multiplier(DamageKind::Physical(kind));

    floor_damage(raw - effective_defense(defender, config), config)
}

// ============================================================================
// Magic
// ============================================================================

/// Spell damage against a defender.
///
/// # Formula
///
/// ```text
/// stat_damage = casting_stat × 1.5 + focus + weapon spell bonus
/// raw = (stat_damage + spell_power) × variance × resistance(element)
/// final = (raw - magic_resist × 1.25 if defending) × 1.5 on crit, at least 1
/// ```
pub fn magic_damage(
    caster: &Combatant,
    defender: &Combatant,
    spell_power: f64,
    element: Element,
    variance: f64,
    crit: Option<CritData>,
    config: &CombatConfig,
) -> i32 {
    let stat_damage = f64::from(caster.casting_stat()) * 1.5
        + f64::from(caster.focus_bonus)
        + f64::from(caster.weapon.spell_bonus);

    let raw = (stat_damage + spell_power)
        * variance
        * defender
            .resistances
            .multiplier(DamageKind::Elemental(element));

    let mut resist = f64::from(defender.magic_resist);
    if defender.is_defending {
        resist *= config.defend_magic_resist_multiplier;
    }

    let mut amount = raw - resist;
    if let Some(crit) = crit {
        amount *= crit.multiplier;
    }
    floor_damage(amount, config)
}

// ============================================================================
// Healing
// ============================================================================

/// Upper bound of the random heal bonus: `max(1, PIE / 2)`.
pub fn heal_bonus_cap(healer: &Combatant) -> i32 {
    (healer.stat(Stat::Pie) / 2).max(1)
}

/// HP restored to `target`.
///
/// # Formula
///
/// ```text
/// amount = PIE × 2 + spell_power + focus + bonus_roll
/// amount ×= crit.multiplier on crit
/// clamped to [0, max_hp - hp]
/// ```
pub fn healing_amount(
    healer: &Combatant,
    target: &Combatant,
    spell_power: f64,
    bonus_roll: i32,
    crit: Option<CritData>,
) -> i32 {
    let mut amount = f64::from(healer.stat(Stat::Pie)) * 2.0
        + spell_power
        + f64::from(healer.focus_bonus)
        + f64::from(bonus_roll);
    if let Some(crit) = crit {
        amount *= crit.multiplier;
    }
    let missing = (target.max_hp - target.hp).max(0);
    (amount as i32).clamp(0, missing)
}

// ============================================================================
// Helpers
// ============================================================================

/// Defense after frailty curses and the defending stance.
fn effective_defense(defender: &Combatant, config: &CombatConfig) -> f64 {
    let frailty = defender.status.curse_magnitude(CurseKind::Frailty);
    let mut defense = f64::from((defender.defense - frailty).max(0));
    if defender.is_defending {
        defense *= config.defend_defense_multiplier;
    }
    defense
}

fn floor_damage(amount: f64, config: &CombatConfig) -> i32 {
    (amount as i32).max(config.minimum_damage)
}
