//! Ability resolver.
//!
//! Resolution order:
//!
//! 1. Validate the ability and its target. Nothing is paid on failure.
//! 2. Players pay the cost, unconditionally once validation passed.
//! 3. Dispatch on [`AbilityType`].
//! 4. Offensive hits apply execute, stun, granted status and row-piercing,
//!    then recoil on the user.

use crate::combat::{
    AbilityOutcome, ActionOutcome, AttackKind, PhysicalStrike, check_crit, check_hit,
    heal_bonus_cap, healing_amount, magic_accuracy, magic_damage, physical_accuracy,
    physical_damage,
};
use crate::config::CombatConfig;
use crate::env::RngOracle;
use crate::error::ActionFailure;
use crate::state::{Ability, AbilityType, Combatant, CombatantId, Element, Roster, StatusEffect};

use super::{CombatContext, apply_damage, crit_prefix, invalid_target, ready_attacker};

/// Resolves `attacker`'s ability at `ability_index` against `target`.
pub fn resolve_ability<R: RngOracle>(
    ctx: &mut CombatContext<'_, R>,
    roster: &mut Roster,
    attacker_id: CombatantId,
    target_id: CombatantId,
    ability_index: usize,
) -> AbilityOutcome {
    let ability = match validate(roster, attacker_id, target_id, ability_index) {
        Ok(ability) => ability,
        Err(refused) => return refused,
    };

    if let Err(refused) = pay_cost(roster, attacker_id, &ability) {
        return refused;
    }

    match ability.kind {
        AbilityType::Heal | AbilityType::AoeHeal => {
            resolve_heal(ctx, roster, attacker_id, target_id, &ability)
        }
        AbilityType::Cure => resolve_cure(roster, attacker_id, target_id, &ability),
        AbilityType::Revive => resolve_revive(roster, attacker_id, target_id, &ability),
        AbilityType::Buff => resolve_buff(roster, attacker_id, target_id, &ability),
        AbilityType::Debuff => resolve_debuff(ctx, roster, attacker_id, target_id, &ability),
        AbilityType::Attack | AbilityType::Spell | AbilityType::Special | AbilityType::Aoe => {
            resolve_offensive(ctx, roster, attacker_id, target_id, &ability)
        }
        // rejected during validation
        AbilityType::Passive => ActionOutcome::default(),
    }
}

// ============================================================================
// Validation and cost
// ============================================================================

fn validate(
    roster: &Roster,
    attacker_id: CombatantId,
    target_id: CombatantId,
    ability_index: usize,
) -> Result<Ability, ActionOutcome> {
    let attacker = ready_attacker(roster, attacker_id)?;

    let Some(ability) = attacker.abilities.get(ability_index) else {
        return Err(ActionOutcome::failed(
            ActionFailure::InvalidAbility {
                reason: "unknown ability",
            },
            format!("{} does not know that ability.", attacker.name),
        ));
    };
    if ability.kind == AbilityType::Passive {
        return Err(ActionOutcome::failed(
            ActionFailure::InvalidAbility {
                reason: "passive abilities cannot be activated",
            },
            format!("{} is passive and cannot be used.", ability.name),
        ));
    }

    let Some(target) = roster.get(target_id) else {
        return Err(invalid_target(
            target_id,
            "no such combatant",
            "There is no such target.".into(),
        ));
    };

    if ability.kind == AbilityType::Revive {
        if target.is_active() || attacker.opposes(target) {
            return Err(invalid_target(
                target_id,
                "revive requires a fallen ally",
                format!("{} can only be used on a fallen ally.", ability.name),
            ));
        }
        return Ok(ability.clone());
    }

    if !target.is_active() {
        return Err(invalid_target(
            target_id,
            "target is already down",
            format!("{} is already down.", target.name),
        ));
    }

    if ability.is_self_only() {
        if target_id != attacker_id {
            return Err(invalid_target(
                target_id,
                "ability can only target its user",
                format!("{} can only target {}.", ability.name, attacker.name),
            ));
        }
        return Ok(ability.clone());
    }

    let hostile = attacker.opposes(target);
    if ability.kind.targets_opponents() && !hostile {
        return Err(invalid_target(
            target_id,
            "ability must target an opponent",
            format!("{} cannot target an ally.", ability.name),
        ));
    }
    if !ability.kind.targets_opponents() && hostile {
        return Err(invalid_target(
            target_id,
            "ability must target an ally",
            format!("{} cannot target an opponent.", ability.name),
        ));
    }

    Ok(ability.clone())
}

/// Players pay ability costs; enemies cast for free.
fn pay_cost(
    roster: &mut Roster,
    attacker_id: CombatantId,
    ability: &Ability,
) -> Result<(), ActionOutcome> {
    let Some(attacker) = roster.get_mut(attacker_id) else {
        return Ok(());
    };
    let Some(resource) = ability.resource else {
        return Ok(());
    };
    if !attacker.is_player() || ability.cost <= 0 {
        return Ok(());
    }

    let available = attacker.pools.current(resource);
    if !attacker.pools.try_spend(resource, ability.cost) {
        tracing::debug!(
            attacker = %attacker.name,
            ability = %ability.name,
            %resource,
            available,
            cost = ability.cost,
            "insufficient resource"
        );
        return Err(ActionOutcome::failed(
            ActionFailure::InsufficientResource {
                resource,
                cost: ability.cost,
                available,
            },
            format!(
                "Not enough {resource} to use {} ({available}/{}).",
                ability.name, ability.cost
            ),
        ));
    }
    Ok(())
}

// ============================================================================
// Support branches
// ============================================================================

fn resolve_heal<R: RngOracle>(
    ctx: &mut CombatContext<'_, R>,
    roster: &mut Roster,
    healer_id: CombatantId,
    target_id: CombatantId,
    ability: &Ability,
) -> AbilityOutcome {
    let config = ctx.config;
    let targets = match ability.kind {
        AbilityType::AoeHeal => allies_of(roster, healer_id),
        _ => vec![target_id],
    };
    let power = ability.effective_power(config.heal_power_per_cost);
    let mut outcome = ActionOutcome {
        hit: true,
        ..ActionOutcome::default()
    };

    for id in targets {
        let (Some(healer), Some(target)) = (roster.get(healer_id), roster.get(id)) else {
            continue;
        };
        let crit = check_crit(healer, AttackKind::Heal, ability.bonus_crit, config, ctx.rng);
        let bonus = ctx.rng.range(0, heal_bonus_cap(healer));
        let amount = healing_amount(healer, target, power, bonus, crit);
        let healer_name = healer.name.clone();

        let Some(target) = roster.get_mut(id) else {
            continue;
        };
        let restored = target.heal(amount);
        outcome.healing += restored;
        outcome.is_crit |= crit.is_some();
        outcome.push(format!(
            "{}{healer_name}'s {} restores {restored} HP to {}.",
            if crit.is_some() { "Critical heal! " } else { "" },
            ability.name,
            target.name
        ));
    }
    outcome
}

fn resolve_cure(
    roster: &mut Roster,
    healer_id: CombatantId,
    target_id: CombatantId,
    ability: &Ability,
) -> AbilityOutcome {
    let healer_name = name_of(roster, healer_id);
    let mut outcome = ActionOutcome {
        hit: true,
        ..ActionOutcome::default()
    };
    if let Some(target) = roster.get_mut(target_id) {
        let removed = target.status.cure();
        outcome.push(if removed > 0 {
            format!("{healer_name}'s {} cleanses {}.", ability.name, target.name)
        } else {
            format!("{} has nothing to cure.", target.name)
        });
    }
    outcome
}

fn resolve_revive(
    roster: &mut Roster,
    healer_id: CombatantId,
    target_id: CombatantId,
    ability: &Ability,
) -> AbilityOutcome {
    let healer_name = name_of(roster, healer_id);
    let mut outcome = ActionOutcome {
        hit: true,
        ..ActionOutcome::default()
    };
    if let Some(target) = roster.get_mut(target_id) {
        let hp = if ability.power > 0 {
            ability.power
        } else {
            target.max_hp / 4
        };
        let restored = target.revive(hp);
        target.status.clear();
        outcome.healing = restored;
        outcome.push(format!(
            "{} is revived by {healer_name} with {restored} HP!",
            target.name
        ));
    }
    outcome
}

fn resolve_buff(
    roster: &mut Roster,
    caster_id: CombatantId,
    target_id: CombatantId,
    ability: &Ability,
) -> AbilityOutcome {
    let caster_name = name_of(roster, caster_id);
    let mut outcome = ActionOutcome {
        hit: true,
        ..ActionOutcome::default()
    };
    let Some(target) = roster.get_mut(target_id) else {
        return outcome;
    };
    match ability.grants {
        Some(effect) => {
            target.status.add(effect);
            outcome.push(format!(
                "{caster_name} uses {}: {} gains {}.",
                ability.name,
                target.name,
                effect.label()
            ));
        }
        None => outcome.push(format!("{caster_name} uses {}.", ability.name)),
    }
    outcome
}

fn resolve_debuff<R: RngOracle>(
    ctx: &mut CombatContext<'_, R>,
    roster: &mut Roster,
    caster_id: CombatantId,
    target_id: CombatantId,
    ability: &Ability,
) -> AbilityOutcome {
    let mut outcome = ActionOutcome::default();
    let (Some(caster), Some(target)) = (roster.get(caster_id), roster.get(target_id)) else {
        return outcome;
    };
    let accuracy = magic_accuracy(caster, target, ability.accuracy_mod, ctx.config);
    let roll = ctx.rng.roll_d100();
    tracing::debug!(caster = %caster.name, ability = %ability.name, accuracy, roll, "debuff roll");

    let caster_name = caster.name.clone();
    if !check_hit(accuracy, roll) {
        outcome.push(format!("{caster_name}'s {} misses {}!", ability.name, target.name));
        return outcome;
    }

    outcome.hit = true;
    let Some(target) = roster.get_mut(target_id) else {
        return outcome;
    };
    match ability.grants {
        Some(effect) => {
            target.status.add(effect);
            outcome.push(format!(
                "{caster_name}'s {} afflicts {} with {}!",
                ability.name,
                target.name,
                effect.label()
            ));
        }
        None => outcome.push(format!("{caster_name}'s {} hits {}.", ability.name, target.name)),
    }
    outcome
}

// ============================================================================
// Offensive branch
// ============================================================================

fn resolve_offensive<R: RngOracle>(
    ctx: &mut CombatContext<'_, R>,
    roster: &mut Roster,
    attacker_id: CombatantId,
    target_id: CombatantId,
    ability: &Ability,
) -> AbilityOutcome {
    let mut outcome = ActionOutcome::default();
    let targets = match ability.kind {
        AbilityType::Aoe => roster
            .get(target_id)
            .map(|primary| {
                roster
                    .active_of(primary.kind)
                    .map(|c| c.id)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default(),
        _ => vec![target_id],
    };
    let magical = ability.is_magical();

    for id in targets {
        let struck = if magical {
            strike_magic(ctx, roster, attacker_id, id, ability, &mut outcome)
        } else {
            strike_physical(ctx, roster, attacker_id, id, ability, &mut outcome)
        };

        let Some(base_power) = struck else {
            continue;
        };
        if ability.pierces_rows() && ability.kind != AbilityType::Aoe && !magical {
            pierce_rows(ctx.config, roster, id, ability, base_power, &mut outcome);
        }
    }

    apply_recoil(roster, attacker_id, ability, &mut outcome);
    outcome
}

/// Physical ability hit. Returns the base physical power on a hit.
fn strike_physical<R: RngOracle>(
    ctx: &mut CombatContext<'_, R>,
    roster: &mut Roster,
    attacker_id: CombatantId,
    target_id: CombatantId,
    ability: &Ability,
    outcome: &mut ActionOutcome,
) -> Option<f64> {
    let config = ctx.config;
    let attacker = roster.get(attacker_id)?;
    let target = roster.get(target_id)?;

    let position = ctx
        .tables
        .modifier(attacker.weapon.range, attacker.row, target.row);
    let accuracy = physical_accuracy(
        attacker,
        target,
        position.accuracy,
        ability.accuracy_mod,
        config,
    );
    let roll = ctx.rng.roll_d100();
    tracing::debug!(attacker = %attacker.name, ability = %ability.name, accuracy, roll, "ability roll");
    if !check_hit(accuracy, roll) {
        outcome.push(format!(
            "{}'s {} misses {}!",
            attacker.name, ability.name, target.name
        ));
        return None;
    }

    let crit = check_crit(
        attacker,
        AttackKind::Physical,
        ability.bonus_crit,
        config,
        ctx.rng,
    );
    let variance = ctx
        .rng
        .uniform(config.physical_variance.min, config.physical_variance.max);
    let strike = PhysicalStrike {
        ability_bonus: ability.effective_power(config.physical_bonus_per_cost),
        position,
        variance,
        crit,
    };
    let hit = physical_damage(attacker, target, strike, config);
    let executes = executes(ability, target);
    let attacker_name = attacker.name.clone();

    let landed = LandedHit {
        amount: hit.amount,
        is_crit: crit.is_some(),
        executes,
    };
    land_hit(ctx, roster, &attacker_name, target_id, ability, landed, outcome);
    Some(hit.base_power)
}

/// Magical ability hit. Returns the spell power on a hit.
fn strike_magic<R: RngOracle>(
    ctx: &mut CombatContext<'_, R>,
    roster: &mut Roster,
    attacker_id: CombatantId,
    target_id: CombatantId,
    ability: &Ability,
    outcome: &mut ActionOutcome,
) -> Option<f64> {
    let config = ctx.config;
    let caster = roster.get(attacker_id)?;
    let target = roster.get(target_id)?;

    let accuracy = magic_accuracy(caster, target, ability.accuracy_mod, config);
    let roll = ctx.rng.roll_d100();
    tracing::debug!(caster = %caster.name, ability = %ability.name, accuracy, roll, "spell roll");
    if !check_hit(accuracy, roll) {
        outcome.push(format!(
            "{}'s {} misses {}!",
            caster.name, ability.name, target.name
        ));
        return None;
    }

    let crit = check_crit(caster, AttackKind::Spell, ability.bonus_crit, config, ctx.rng);
    let variance = ctx
        .rng
        .uniform(config.magic_variance.min, config.magic_variance.max);
    let spell_power = ability.effective_power(config.spell_power_per_cost);
    let element = ability.element.unwrap_or(Element::Arcane);
    let amount = magic_damage(caster, target, spell_power, element, variance, crit, config);
    let executes = executes(ability, target);
    let caster_name = caster.name.clone();

    let landed = LandedHit {
        amount,
        is_crit: crit.is_some(),
        executes,
    };
    land_hit(ctx, roster, &caster_name, target_id, ability, landed, outcome);
    Some(spell_power)
}

fn executes(ability: &Ability, target: &Combatant) -> bool {
    ability
        .execute_threshold
        .is_some_and(|threshold| target.hp_fraction() <= threshold)
}

/// A registered offensive hit, before execute doubling.
#[derive(Clone, Copy, Debug)]
struct LandedHit {
    amount: i32,
    is_crit: bool,
    executes: bool,
}

/// Applies a registered offensive hit and its on-hit extras.
fn land_hit<R: RngOracle>(
    ctx: &mut CombatContext<'_, R>,
    roster: &mut Roster,
    attacker_name: &str,
    target_id: CombatantId,
    ability: &Ability,
    hit: LandedHit,
    outcome: &mut ActionOutcome,
) {
    let LandedHit {
        amount,
        is_crit,
        executes,
    } = hit;
    let amount = if executes { amount.saturating_mul(2) } else { amount };
    let target_name = name_of(roster, target_id);

    outcome.hit = true;
    outcome.is_crit |= is_crit;
    outcome.damage += amount;
    if executes {
        outcome.push(format!("{attacker_name} executes {target_name}!"));
    }
    outcome.push(format!(
        "{}{attacker_name} uses {} on {target_name} for {amount} damage!",
        crit_prefix(is_crit),
        ability.name
    ));

    if apply_damage(roster, target_id, amount, ctx.config, outcome) {
        return;
    }

    if ability.stun_chance > 0 {
        let roll = ctx.rng.roll_d100();
        tracing::debug!(target = %target_name, chance = ability.stun_chance, roll, "stun roll");
        if roll <= ability.stun_chance {
            if let Some(target) = roster.get_mut(target_id) {
                target.status.add(StatusEffect::stun(1));
                outcome.push(format!("{target_name} is stunned!"));
            }
        }
    }
    if let (Some(effect), Some(target)) = (ability.grants, roster.get_mut(target_id)) {
        target.status.add(effect);
        outcome.push(format!("{target_name} is afflicted with {}!", effect.label()));
    }
}

/// Carries a physical hit through to up to two rear-row opponents.
fn pierce_rows(
    config: &CombatConfig,
    roster: &mut Roster,
    primary_id: CombatantId,
    ability: &Ability,
    base_power: f64,
    outcome: &mut ActionOutcome,
) {
    let Some(primary) = roster.get(primary_id) else {
        return;
    };
    let victims: Vec<CombatantId> = roster
        .rear_rows_of(primary.kind)
        .filter(|c| c.id != primary_id)
        .take(CombatConfig::MAX_PIERCE_TARGETS)
        .map(|c| c.id)
        .collect();

    if victims.is_empty() {
        outcome.push("No enemies in back rows to pierce.");
        return;
    }

    let amount = ((base_power * config.pierce_damage_ratio) as i32).max(config.minimum_damage);
    for id in victims {
        let name = name_of(roster, id);
        outcome.damage += amount;
        outcome.push(format!(
            "{} pierces through to {name} for {amount} damage!",
            ability.name
        ));
        apply_damage(roster, id, amount, config, outcome);
    }
}

/// Self-damage proportional to damage dealt; never drops the user below 1 HP.
fn apply_recoil(
    roster: &mut Roster,
    attacker_id: CombatantId,
    ability: &Ability,
    outcome: &mut ActionOutcome,
) {
    if ability.recoil <= 0.0 || outcome.damage <= 0 {
        return;
    }
    let Some(attacker) = roster.get_mut(attacker_id) else {
        return;
    };
    let recoil = (f64::from(outcome.damage) * ability.recoil) as i32;
    let taken = recoil.min(attacker.hp - 1).max(0);
    if taken > 0 {
        attacker.hp -= taken;
        outcome.push(format!("{} takes {taken} recoil damage.", attacker.name));
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn name_of(roster: &Roster, id: CombatantId) -> String {
    roster
        .get(id)
        .map_or_else(|| id.to_string(), |c| c.name.clone())
}

fn allies_of(roster: &Roster, id: CombatantId) -> Vec<CombatantId> {
    roster
        .get(id)
        .map(|c| roster.active_of(c.kind).map(|ally| ally.id).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::PositionTables;
    use crate::env::ScriptedRng;
    use crate::state::{
        AbilityFlags, BuffKind, ClassKind, CombatantKind, Pool, ResourceKind, ResourcePools,
        StatBlock,
    };

    const HERO: CombatantId = CombatantId(0);
    const CLERIC: CombatantId = CombatantId(1);
    const OGRE: CombatantId = CombatantId(2);

    fn roster(hero_abilities: Vec<Ability>) -> Roster {
        Roster::new([
            Combatant::builder("Brand", CombatantKind::Player)
                .class(ClassKind::Knight)
                .stats(StatBlock::new(16, 10, 14, 8, 8, 8))
                .max_hp(50)
                .pools(ResourcePools::new().with(ResourceKind::StrSp, Pool::new(8, 20)))
                .abilities(hero_abilities)
                .build(),
            Combatant::builder("Ilse", CombatantKind::Player)
                .class(ClassKind::Cleric)
                .stats(StatBlock::new(8, 10, 10, 8, 10, 14))
                .max_hp(30)
                .pools(ResourcePools::new().with(ResourceKind::PieMp, Pool::full(30)))
                .ability(Ability::new("Mend", AbilityType::Heal).with_cost(6, ResourceKind::PieMp))
                .build(),
            Combatant::builder("Ogre", CombatantKind::Enemy)
                .stats(StatBlock::new(16, 6, 16, 4, 4, 4))
                .max_hp(60)
                .build(),
        ])
    }

    fn resolve(
        roster: &mut Roster,
        rng: &mut ScriptedRng,
        attacker: CombatantId,
        target: CombatantId,
        index: usize,
    ) -> AbilityOutcome {
        let config = CombatConfig::default();
        let tables = PositionTables::default();
        let mut ctx = CombatContext::new(&config, &tables, rng);
        resolve_ability(&mut ctx, roster, attacker, target, index)
    }

    #[test]
    fn invalid_target_costs_nothing() {
        let guard = Ability::new("Guard", AbilityType::Buff)
            .with_cost(4, ResourceKind::StrSp)
            .with_flags(AbilityFlags::SELF_ONLY);
        let mut roster = roster(vec![guard]);
        let mut rng = ScriptedRng::new();

        let outcome = resolve(&mut roster, &mut rng, HERO, CLERIC, 0);

        assert!(matches!(
            outcome.failure,
            Some(ActionFailure::InvalidTarget { .. })
        ));
        assert_eq!(
            roster.get(HERO).map(|c| c.pools.current(ResourceKind::StrSp)),
            Some(8)
        );
    }

    #[test]
    fn self_only_buff_applies_to_user() {
        let haste = Ability::new("Battle Focus", AbilityType::Buff)
            .with_cost(4, ResourceKind::StrSp)
            .with_flags(AbilityFlags::SELF_ONLY)
            .granting(StatusEffect::Buff {
                kind: BuffKind::Hasted,
                rounds: 2,
            });
        let mut roster = roster(vec![haste]);
        let mut rng = ScriptedRng::new();

        let outcome = resolve(&mut roster, &mut rng, HERO, HERO, 0);

        assert!(outcome.failure.is_none());
        let hero = roster.get(HERO).cloned();
        assert!(hero.is_some_and(|h| h.status.speed_multiplier() == 1.5
            && h.pools.current(ResourceKind::StrSp) == 4));
    }

    #[test]
    fn passive_cannot_be_activated() {
        let mut roster = roster(vec![Ability::new("Tough Hide", AbilityType::Passive)]);
        let mut rng = ScriptedRng::new();

        let outcome = resolve(&mut roster, &mut rng, HERO, OGRE, 0);
        assert!(matches!(
            outcome.failure,
            Some(ActionFailure::InvalidAbility { .. })
        ));
        assert_eq!(rng.d100_consumed(), 0);
    }

    #[test]
    fn heal_clamps_to_missing_hp() {
        let mut roster = roster(Vec::new());
        if let Some(hero) = roster.get_mut(HERO) {
            hero.hp = 45;
        }
        let mut rng = ScriptedRng::new().with_d100([100]);

        let outcome = resolve(&mut roster, &mut rng, CLERIC, HERO, 0);

        assert_eq!(outcome.healing, 5);
        assert_eq!(roster.get(HERO).map(|c| c.hp), Some(50));
        assert_eq!(
            roster.get(CLERIC).map(|c| c.pools.current(ResourceKind::PieMp)),
            Some(24)
        );
    }

    #[test]
    fn execute_doubles_and_recoil_spares_user() {
        let reckless = Ability::new("Reckless Cleave", AbilityType::Attack)
            .with_cost(5, ResourceKind::StrSp)
            .with_power(10)
            .with_execute_threshold(0.25)
            .with_recoil(0.5);
        let mut roster = roster(vec![reckless]);
        if let Some(ogre) = roster.get_mut(OGRE) {
            ogre.hp = 15;
        }
        if let Some(hero) = roster.get_mut(HERO) {
            hero.hp = 3;
        }
        // hit, no crit
        let mut rng = ScriptedRng::new().with_d100([1, 100]);

        let outcome = resolve(&mut roster, &mut rng, HERO, OGRE, 0);

        // unarmed: 16 × 0.5 + 2 + 10 = 20, doubled by execute
        assert_eq!(outcome.damage, 40);
        assert!(outcome.messages.iter().any(|m| m.contains("executes")));
        assert!(roster.get(OGRE).is_some_and(|o| !o.alive));
        assert_eq!(roster.get(HERO).map(|c| c.hp), Some(1));
    }

    #[test]
    fn revive_only_targets_fallen_allies() {
        let mut roster = roster(vec![Ability::new("Raise", AbilityType::Revive).with_power(12)]);
        let mut rng = ScriptedRng::new();

        let refused = resolve(&mut roster, &mut rng, HERO, CLERIC, 0);
        assert!(refused.refused());

        if let Some(cleric) = roster.get_mut(CLERIC) {
            cleric.hp = 0;
            cleric.alive = false;
        }
        let outcome = resolve(&mut roster, &mut rng, HERO, CLERIC, 0);
        assert_eq!(outcome.healing, 12);
        assert!(roster.get(CLERIC).is_some_and(Combatant::is_active));
    }
}
