//! Target pickers used by the enemy AI.

use crate::config::RowWeights;
use crate::env::RngOracle;
use crate::state::{Combatant, CombatantId, Row};

/// Uniform pick. `None` for an empty slice.
pub fn random(candidates: &[&Combatant], rng: &mut impl RngOracle) -> Option<CombatantId> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.pick(candidates.len())].id)
}

/// Lowest current HP; the earliest roster entry wins ties.
pub fn lowest_hp(candidates: &[&Combatant]) -> Option<CombatantId> {
    candidates
        .iter()
        .min_by_key(|c| (c.hp, c.id))
        .map(|c| c.id)
}

/// Lowest HP fraction; the earliest roster entry wins ties.
pub fn most_wounded(candidates: &[&Combatant]) -> Option<CombatantId> {
    candidates
        .iter()
        .min_by(|a, b| {
            a.hp_fraction()
                .total_cmp(&b.hp_fraction())
                .then(a.id.cmp(&b.id))
        })
        .map(|c| c.id)
}

/// Uniform pick among back-row candidates, or among everyone if none.
pub fn back_row_first(candidates: &[&Combatant], rng: &mut impl RngOracle) -> Option<CombatantId> {
    let back: Vec<&Combatant> = candidates
        .iter()
        .copied()
        .filter(|c| c.row == Row::Back)
        .collect();
    if back.is_empty() {
        random(candidates, rng)
    } else {
        random(&back, rng)
    }
}

/// Weighted draw by row, as melee attackers prefer whoever is closest.
pub fn row_weighted(
    candidates: &[&Combatant],
    weights: RowWeights,
    rng: &mut impl RngOracle,
) -> Option<CombatantId> {
    let weight = |row: Row| match row {
        Row::Front => weights.front,
        Row::Mid => weights.mid,
        Row::Back => weights.back,
    };
    let total: u32 = candidates.iter().map(|c| weight(c.row)).sum();
    if total == 0 {
        return random(candidates, rng);
    }

    let mut draw = rng.range(1, total as i32) as u32;
    for candidate in candidates {
        let w = weight(candidate.row);
        if draw <= w {
            return Some(candidate.id);
        }
        draw -= w;
    }
    candidates.last().map(|c| c.id)
}
