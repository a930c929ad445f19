mod common;

use combat_core::{
    Ability, AbilityFlags, AbilityType, ActionFailure, CombatConfig, CombatContext, CombatantId,
    PoisonTier, PositionTables, ResourceKind, Roster, Row, ScriptedRng, StatusEffect,
    resolve_ability, resolve_attack,
};

use common::{fighter, goblin, mage};

fn hp(roster: &Roster, id: CombatantId) -> i32 {
    roster.get(id).map_or(i32::MIN, |c| c.hp)
}

#[test]
fn fighter_strikes_goblin_warrior_reproducibly() {
    let config = CombatConfig::default();
    let tables = PositionTables::default();

    let run = || {
        let mut roster = Roster::new([fighter(), goblin("Goblin Warrior", Row::Front, 30)]);
        // hit, then no crit; variance pinned at 1.0
        let mut rng = ScriptedRng::new().with_d100([10, 99]);
        let mut ctx = CombatContext::new(&config, &tables, &mut rng);
        let outcome = resolve_attack(&mut ctx, &mut roster, CombatantId(0), CombatantId(1));
        (outcome, hp(&roster, CombatantId(1)))
    };

    let (first, first_hp) = run();
    let (second, second_hp) = run();
    assert_eq!(first, second);
    assert_eq!(first_hp, second_hp);

    // 16 + 14 × 0.7 = 25.8, minus defense 5
    assert!(first.hit && !first.is_crit);
    assert_eq!(first.damage, 20);
    assert_eq!(first_hp, 10);
    assert_eq!(
        first.messages,
        vec!["Brannoc attacks Goblin Warrior for 20 damage!".to_string()]
    );
}

#[test]
fn weak_poison_ticks_four_times_over_twelve_steps() {
    let mut victim = fighter();
    victim.status.add(StatusEffect::poison(PoisonTier::Weak));

    let mut total = 0;
    let mut ticks = 0;
    for step in 1..=12 {
        let tick = victim.status.tick_step();
        if tick.damage > 0 {
            ticks += 1;
            assert_eq!(step % 3, 0, "poison ticked on step {step}");
        }
        total += tick.damage;
    }

    assert_eq!(ticks, 4);
    assert_eq!(total, 16);
    assert!(!victim.status.is_poisoned());
    assert_eq!(victim.status.tick_step().damage, 0);
}

fn lunge() -> Ability {
    Ability::new("Lunge", AbilityType::Attack)
        .with_power(10)
        .with_flags(AbilityFlags::PIERCE_ROWS)
}

#[test]
fn piercing_hits_at_most_two_rear_enemies() {
    let config = CombatConfig::default();
    let tables = PositionTables::default();
    let mut attacker = fighter();
    attacker.abilities.push(lunge());
    let mut roster = Roster::new([
        attacker,
        goblin("Shieldbearer", Row::Front, 60),
        goblin("Spearman", Row::Mid, 30),
        goblin("Archer", Row::Back, 30),
        goblin("Shaman", Row::Back, 30),
    ]);
    let mut rng = ScriptedRng::new().with_d100([10]).with_fallback_d100(99);
    let mut ctx = CombatContext::new(&config, &tables, &mut rng);

    let outcome = resolve_ability(&mut ctx, &mut roster, CombatantId(0), CombatantId(1), 0);

    // base power 25.8 + 10 = 35.8: primary 30.8 → 30, pierce 0.6 × 35.8 → 21
    assert_eq!(outcome.damage, 30 + 21 + 21);
    assert_eq!(hp(&roster, CombatantId(1)), 30);
    assert_eq!(hp(&roster, CombatantId(2)), 9);
    assert_eq!(hp(&roster, CombatantId(3)), 9);
    assert_eq!(hp(&roster, CombatantId(4)), 30);
    assert_eq!(
        outcome
            .messages
            .iter()
            .filter(|m| m.contains("pierces through"))
            .count(),
        2
    );
}

#[test]
fn piercing_with_no_rear_enemies_adds_nothing() {
    let config = CombatConfig::default();
    let tables = PositionTables::default();
    let mut attacker = fighter();
    attacker.abilities.push(lunge());
    let mut roster = Roster::new([
        attacker,
        goblin("Shieldbearer", Row::Front, 60),
        goblin("Brawler", Row::Front, 30),
    ]);
    let mut rng = ScriptedRng::new().with_d100([10]).with_fallback_d100(99);
    let mut ctx = CombatContext::new(&config, &tables, &mut rng);

    let outcome = resolve_ability(&mut ctx, &mut roster, CombatantId(0), CombatantId(1), 0);

    assert_eq!(outcome.damage, 30);
    assert_eq!(hp(&roster, CombatantId(2)), 30);
    assert!(
        outcome
            .messages
            .iter()
            .any(|m| m == "No enemies in back rows to pierce.")
    );
}

#[test]
fn insufficient_resource_refuses_without_rolling() {
    let config = CombatConfig::default();
    let tables = PositionTables::default();
    let mut roster = Roster::new([mage(), goblin("Goblin", Row::Front, 20)]);
    let mut rng = ScriptedRng::new();
    let mut ctx = CombatContext::new(&config, &tables, &mut rng);

    let outcome = resolve_ability(&mut ctx, &mut roster, CombatantId(0), CombatantId(1), 0);

    assert_eq!(
        outcome.failure,
        Some(ActionFailure::InsufficientResource {
            resource: ResourceKind::IntMp,
            cost: 10,
            available: 8,
        })
    );
    assert!(!outcome.hit);
    assert_eq!(rng.d100_consumed(), 0);
    assert_eq!(
        roster
            .get(CombatantId(0))
            .map(|c| c.pools.current(ResourceKind::IntMp)),
        Some(8)
    );
    assert_eq!(hp(&roster, CombatantId(1)), 20);
    assert_eq!(
        outcome.messages,
        vec!["Not enough INT-MP to use Fireball (8/10).".to_string()]
    );
}
