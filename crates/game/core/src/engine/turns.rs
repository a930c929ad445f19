//! Turn scheduling.
//!
//! Order is rebuilt from scratch at encounter start and at every round
//! boundary, so speed changes from buffs and debuffs take effect next round.

use std::cmp::Reverse;

use crate::config::CombatConfig;
use crate::env::RngOracle;
use crate::state::{Combatant, CombatantId, Roster, Stat};

/// Initiative value of a combatant.
///
/// # Formula
///
/// ```text
/// base  = DEX × 2 + WIS × 0.5 + level + weapon speed - 5 if non-proficient
/// speed = max(base, 0) × Π status speed multipliers, truncated
/// ```
pub fn compute_speed(combatant: &Combatant, config: &CombatConfig) -> i32 {
    let mut base = f64::from(combatant.stat(Stat::Dex)) * 2.0
        + f64::from(combatant.stat(Stat::Wis)) * 0.5
        + f64::from(combatant.level)
        + f64::from(combatant.weapon.speed_mod);
    if combatant.is_non_proficient() {
        base -= f64::from(config.non_proficient_speed_penalty);
    }

    (base.max(0.0) * combatant.status.speed_multiplier()) as i32
}

/// Builds the order of turns for one round.
///
/// Only active combatants are included. Sorted by speed, then DEX, then a
/// fresh random draw, all descending. One draw is taken per included
/// combatant, in roster order, so the draw sequence is reproducible.
pub fn build_turn_order(
    roster: &Roster,
    rng: &mut impl RngOracle,
    config: &CombatConfig,
) -> Vec<CombatantId> {
    let mut slots: Vec<(i32, i32, u32, CombatantId)> = roster
        .iter()
        .filter(|c| c.is_active())
        .map(|c| {
            (
                compute_speed(c, config),
                c.stat(Stat::Dex),
                rng.next_u32(),
                c.id,
            )
        })
        .collect();

    slots.sort_by_key(|&(speed, dex, draw, _)| (Reverse(speed), Reverse(dex), Reverse(draw)));
    slots.into_iter().map(|(.., id)| id).collect()
}
