//! Accuracy calculations.
//!
//! Three separate formulas exist: player physical attacks, spells, and enemy
//! basic attacks. The enemy formula deliberately has no weapon terms and is
//! kept apart from the physical one.

use crate::config::CombatConfig;
use crate::state::{Combatant, Stat};

/// Accuracy of a physical attack or physical ability.
///
/// # Formula
///
/// ```text
/// 75 + (att.DEX - def.DEX) × 2
///    + weapon accuracy + enhancement + position delta + modifier
///    - 15 if non-proficient
///    - 15 if defender is defending
///    - attacker status penalties
/// clamped to [30, 95]
/// ```
///
/// # Arguments
///
/// * `position_delta` - Accuracy delta from the position table
/// * `modifier` - Extra modifier, e.g. an ability's accuracy bonus
pub fn physical_accuracy(
    attacker: &Combatant,
    defender: &Combatant,
    position_delta: i32,
    modifier: i32,
    config: &CombatConfig,
) -> i32 {
    let mut accuracy = config.physical_base_accuracy
        + (attacker.stat(Stat::Dex) - defender.stat(Stat::Dex)) * 2
        + attacker.weapon.accuracy_mod
        + attacker.weapon.enhancement
        + position_delta
        + modifier;

    if attacker.is_non_proficient() {
        accuracy -= config.non_proficient_accuracy_penalty;
    }
    if defender.is_defending {
        accuracy -= config.defend_accuracy_penalty;
    }
    accuracy -= attacker.status.accuracy_penalty();

    config.clamp_accuracy(accuracy)
}

/// Accuracy of a spell or magical debuff.
///
/// # Formula
///
/// ```text
/// 80 + (casting stat - def.WIS) × 2 + modifier + focus bonus
///    - attacker status penalties
/// clamped to [30, 95]
/// ```
pub fn magic_accuracy(
    caster: &Combatant,
    defender: &Combatant,
    modifier: i32,
    config: &CombatConfig,
) -> i32 {
    let accuracy = config.magic_base_accuracy
        + (caster.casting_stat() - defender.stat(Stat::Wis)) * 2
        + modifier
        + caster.focus_bonus
        - caster.status.accuracy_penalty();

    config.clamp_accuracy(accuracy)
}

/// Accuracy of an enemy basic attack.
///
/// Same shape as [`physical_accuracy`] without the weapon accuracy,
/// enhancement and proficiency terms.
pub fn enemy_accuracy(
    attacker: &Combatant,
    defender: &Combatant,
    position_delta: i32,
    config: &CombatConfig,
) -> i32 {
    let mut accuracy = config.physical_base_accuracy
        + (attacker.stat(Stat::Dex) - defender.stat(Stat::Dex)) * 2
        + position_delta;

    if defender.is_defending {
        accuracy -= config.defend_accuracy_penalty;
    }
    accuracy -= attacker.status.accuracy_penalty();

    config.clamp_accuracy(accuracy)
}

/// A d100 roll at or under the accuracy hits.
#[inline]
pub fn check_hit(accuracy: i32, roll: u32) -> bool {
    i64::from(roll) <= i64::from(accuracy)
}
