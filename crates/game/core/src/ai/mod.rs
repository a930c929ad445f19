//! Enemy decision making.
//!
//! Heuristics, in priority order:
//!
//! 1. An enemy with a healing ability heals the most wounded ally once any
//!    ally drops below the heal threshold. Self-only heals are kept for the
//!    caster.
//! 2. Melee attackers pick a player by row-weighted draw.
//! 3. Everyone else picks by archetype.
pub mod targeting;

use crate::config::CombatConfig;
use crate::env::RngOracle;
use crate::state::{AiArchetype, Combatant, CombatantId, Roster, WeaponRange};

/// What an enemy decided to do on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyAction {
    Attack,
    UseAbility(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyDecision {
    pub action: EnemyAction,
    pub target: CombatantId,
}

/// Chooses an action for `enemy_id`.
///
/// Returns `None` when no player is left standing.
pub fn choose_action(
    roster: &Roster,
    enemy_id: CombatantId,
    rng: &mut impl RngOracle,
    config: &CombatConfig,
) -> Option<EnemyDecision> {
    let enemy = roster.get(enemy_id)?;
    let players: Vec<&Combatant> = roster.living_players().collect();
    if players.is_empty() {
        return None;
    }

    if let Some(decision) = choose_heal(roster, enemy, config) {
        tracing::debug!(enemy = %enemy.name, target = %decision.target, "ai heals ally");
        return Some(decision);
    }

    let profile = enemy.enemy.clone().unwrap_or_default();
    let picked = if profile.attack_range == WeaponRange::Melee {
        targeting::row_weighted(&players, config.melee_row_weights, rng)
    } else {
        match profile.ai {
            AiArchetype::Aggressive | AiArchetype::Supportive | AiArchetype::Boss => {
                targeting::random(&players, rng)
            }
            AiArchetype::Defensive => targeting::lowest_hp(&players),
            AiArchetype::Tactical => targeting::back_row_first(&players, rng),
        }
    };
    let target = picked?;

    tracing::debug!(enemy = %enemy.name, ai = %profile.ai, %target, "ai attacks");
    Some(EnemyDecision {
        action: EnemyAction::Attack,
        target,
    })
}

fn choose_heal(roster: &Roster, enemy: &Combatant, config: &CombatConfig) -> Option<EnemyDecision> {
    if !enemy.abilities.iter().any(|ability| ability.kind.is_healing()) {
        return None;
    }

    let allies: Vec<&Combatant> = roster.active_of(enemy.kind).collect();
    let hurting = allies
        .iter()
        .any(|ally| ally.hp_fraction() < config.heal_ally_threshold);
    if !hurting {
        return None;
    }

    let target = targeting::most_wounded(&allies)?;
    if let Some(index) = castable_heal(enemy, target) {
        return Some(EnemyDecision {
            action: EnemyAction::UseAbility(index),
            target,
        });
    }

    // a self-only heal still helps when the caster is the one hurting
    if enemy.hp_fraction() < config.heal_ally_threshold
        && let Some(index) = castable_heal(enemy, enemy.id)
    {
        return Some(EnemyDecision {
            action: EnemyAction::UseAbility(index),
            target: enemy.id,
        });
    }
    None
}

/// First healing ability `enemy` may aim at `target`. Enemies cast for
/// free, so only the targeting rules narrow the choice.
fn castable_heal(enemy: &Combatant, target: CombatantId) -> Option<usize> {
    enemy.abilities.iter().position(|ability| {
        ability.kind.is_healing() && (!ability.is_self_only() || target == enemy.id)
    })
}
