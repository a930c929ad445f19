//! Automatic action choice for party members.
//!
//! Priorities, highest first:
//!
//! 1. Heal the most wounded ally once anyone drops below half HP.
//! 2. Sweep the enemy side with an area ability when two or more stand.
//! 3. Spend a single-target ability while its pool is above half.
//! 4. Swing at the enemy with the lowest HP.

use combat_core::ai::targeting;
use combat_core::{Ability, AbilityType, Combatant, CombatantId, PlayerAction, Roster};

const HEAL_BELOW: f64 = 0.5;

/// Picks an action for `actor`. `None` when the actor is unknown or no
/// enemy is left to fight.
pub fn choose(roster: &Roster, actor: CombatantId) -> Option<PlayerAction> {
    let me = roster.get(actor)?;
    let enemies: Vec<&Combatant> = roster.living_enemies().collect();
    let weakest = targeting::lowest_hp(&enemies)?;

    let allies: Vec<&Combatant> = roster.living_players().collect();
    if allies.iter().any(|c| c.hp_fraction() < HEAL_BELOW)
        && let Some(ability) = find(me, |a| a.kind == AbilityType::Heal)
        && let Some(target) = targeting::most_wounded(&allies)
    {
        return Some(PlayerAction::UseAbility { ability, target });
    }

    if enemies.len() >= 2
        && let Some(ability) = find(me, |a| a.kind == AbilityType::Aoe)
    {
        return Some(PlayerAction::UseAbility {
            ability,
            target: weakest,
        });
    }

    let single_target = find(me, |a| {
        matches!(a.kind, AbilityType::Attack | AbilityType::Spell)
            && !a.is_self_only()
            && above_half(me, a)
    });
    if let Some(ability) = single_target {
        return Some(PlayerAction::UseAbility {
            ability,
            target: weakest,
        });
    }

    Some(PlayerAction::Attack { target: weakest })
}

/// Index of the first affordable ability matching `filter`.
fn find(me: &Combatant, filter: impl Fn(&Ability) -> bool) -> Option<usize> {
    me.abilities
        .iter()
        .position(|a| affordable(me, a) && filter(a))
}

fn affordable(me: &Combatant, ability: &Ability) -> bool {
    ability
        .resource
        .is_none_or(|kind| me.pools.current(kind) >= ability.cost)
}

fn above_half(me: &Combatant, ability: &Ability) -> bool {
    let Some(kind) = ability.resource else {
        return true;
    };
    me.pools
        .get(kind)
        .is_some_and(|pool| pool.current * 2 > pool.max)
}
