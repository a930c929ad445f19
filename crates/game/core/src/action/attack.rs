//! Basic attack path.

use crate::combat::{
    ActionOutcome, AttackKind, PhysicalStrike, check_crit, check_hit, enemy_accuracy,
    enemy_damage, physical_accuracy, physical_damage,
};
use crate::env::RngOracle;
use crate::state::{CombatantId, Roster};

use super::{CombatContext, apply_damage, crit_prefix, invalid_target, ready_attacker};

/// Resolves a basic attack.
///
/// Players swing their equipped weapon: physical accuracy, crit, physical
/// damage. Enemies use their attack profile: enemy accuracy, sampled attack
/// damage, no crits.
///
/// Draw order: hit roll, then crit roll (players only) or damage sample
/// (enemies), then variance.
pub fn resolve_attack<R: RngOracle>(
    ctx: &mut CombatContext<'_, R>,
    roster: &mut Roster,
    attacker_id: CombatantId,
    target_id: CombatantId,
) -> ActionOutcome {
    let attacker = match ready_attacker(roster, attacker_id) {
        Ok(attacker) => attacker,
        Err(refused) => return refused,
    };
    let Some(target) = roster.get(target_id) else {
        return invalid_target(target_id, "no such combatant", "There is no such target.".into());
    };
    if !target.is_active() {
        return invalid_target(
            target_id,
            "target is already down",
            format!("{} is already down.", target.name),
        );
    }
    if !attacker.opposes(target) {
        return invalid_target(
            target_id,
            "cannot attack an ally",
            format!("{} will not attack an ally.", attacker.name),
        );
    }

    let config = ctx.config;
    let attacker_name = attacker.name.clone();
    let target_name = target.name.clone();
    let mut outcome = ActionOutcome::default();

    let (amount, is_crit) = if let Some(profile) = attacker.enemy.as_ref() {
        let position = ctx
            .tables
            .modifier(profile.attack_range, attacker.row, target.row);
        let accuracy = enemy_accuracy(attacker, target, position.accuracy, config);
        let roll = ctx.rng.roll_d100();
        tracing::debug!(attacker = %attacker_name, target = %target_name, accuracy, roll, "enemy attack roll");
        if !check_hit(accuracy, roll) {
            outcome.push(format!("{attacker_name} attacks {target_name} but misses!"));
            return outcome;
        }

        let sampled = profile.attack_damage.sample(ctx.rng);
        let variance = ctx
            .rng
            .uniform(config.physical_variance.min, config.physical_variance.max);
        let amount = enemy_damage(attacker, target, sampled, position, variance, config);
        (amount, false)
    } else {
        let position = ctx
            .tables
            .modifier(attacker.weapon.range, attacker.row, target.row);
        let accuracy = physical_accuracy(attacker, target, position.accuracy, 0, config);
        let roll = ctx.rng.roll_d100();
        tracing::debug!(attacker = %attacker_name, target = %target_name, accuracy, roll, "attack roll");
        if !check_hit(accuracy, roll) {
            outcome.push(format!("{attacker_name} attacks {target_name} but misses!"));
            return outcome;
        }

        let crit = check_crit(attacker, AttackKind::Physical, 0.0, config, ctx.rng);
        let variance = ctx
            .rng
            .uniform(config.physical_variance.min, config.physical_variance.max);
        let strike = PhysicalStrike {
            ability_bonus: 0.0,
            position,
            variance,
            crit,
        };
        let amount = physical_damage(attacker, target, strike, config).amount;
        (amount, crit.is_some())
    };

    outcome.hit = true;
    outcome.is_crit = is_crit;
    outcome.damage = amount;
    outcome.push(format!(
        "{}{attacker_name} attacks {target_name} for {amount} damage!",
        crit_prefix(is_crit)
    ));
    apply_damage(roster, target_id, amount, config, &mut outcome);
    outcome
}
