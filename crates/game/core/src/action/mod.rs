//! Action resolvers.
//!
//! Resolvers read combatants out of the [`Roster`], run the formulas in
//! [`crate::combat`] with draws from the injected RNG, and apply the results.
//! Each call is atomic: cost, rolls, HP changes and log lines all land before
//! it returns.

mod ability;
mod attack;

pub use ability::resolve_ability;
pub use attack::resolve_attack;

use crate::combat::{ActionOutcome, PositionTables};
use crate::config::CombatConfig;
use crate::env::RngOracle;
use crate::error::ActionFailure;
use crate::state::{Combatant, CombatantId, Roster};

/// Shared inputs threaded through every resolver.
pub struct CombatContext<'a, R: RngOracle> {
    pub config: &'a CombatConfig,
    pub tables: &'a PositionTables,
    pub rng: &'a mut R,
}

impl<'a, R: RngOracle> CombatContext<'a, R> {
    pub fn new(config: &'a CombatConfig, tables: &'a PositionTables, rng: &'a mut R) -> Self {
        Self {
            config,
            tables,
            rng,
        }
    }
}

/// Ensures the acting combatant is up.
///
/// Handing a turn to a fallen combatant is a caller bug: debug builds assert,
/// release builds refuse without side effects.
fn ready_attacker(roster: &Roster, id: CombatantId) -> Result<&Combatant, ActionOutcome> {
    let attacker = roster.get(id);
    debug_assert!(
        attacker.is_some_and(Combatant::is_active),
        "combatant {id} asked to act while down"
    );
    match attacker {
        Some(attacker) if attacker.is_active() => Ok(attacker),
        other => {
            let name = other.map_or_else(|| id.to_string(), |c| c.name.clone());
            Err(ActionOutcome::failed(
                ActionFailure::AttackerDown(id),
                format!("{name} cannot act."),
            ))
        }
    }
}

fn invalid_target(target: CombatantId, reason: &'static str, message: String) -> ActionOutcome {
    ActionOutcome::failed(ActionFailure::InvalidTarget { target, reason }, message)
}

/// Applies damage and logs a death if it was lethal. Returns true on death.
fn apply_damage(
    roster: &mut Roster,
    target: CombatantId,
    amount: i32,
    config: &CombatConfig,
    outcome: &mut ActionOutcome,
) -> bool {
    let Some(combatant) = roster.get_mut(target) else {
        return false;
    };
    if combatant.take_damage(amount, config) {
        tracing::info!(target = %combatant.name, "combatant down");
        outcome.push(combatant.death_message());
        return true;
    }
    false
}

fn crit_prefix(is_crit: bool) -> &'static str {
    if is_crit { "Critical hit! " } else { "" }
}
