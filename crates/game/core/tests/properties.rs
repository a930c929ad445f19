mod common;

use combat_core::combat::{enemy_accuracy, magic_accuracy, physical_accuracy};
use combat_core::engine::end_of_round;
use combat_core::{
    CombatConfig, CombatContext, CombatantId, Encounter, EncounterPhase, PcgRng, PlayerAction,
    PositionTables, RngOracle, Roster, Row, StatBlock, resolve_attack,
};

use common::{fighter, goblin, mage};

#[test]
fn accuracy_stays_within_bounds() {
    let config = CombatConfig::default();
    let mut rng = PcgRng::seeded(11);

    for _ in 0..200 {
        let mut attacker = fighter();
        let mut defender = goblin("Dummy", Row::Front, 20);
        attacker.stats = StatBlock::new(10, rng.range(0, 60), 10, rng.range(0, 60), 10, 10);
        defender.stats = StatBlock::new(10, rng.range(0, 60), 10, 10, rng.range(0, 60), 10);
        defender.is_defending = rng.pick(2) == 1;
        let delta = rng.range(-40, 40);

        for accuracy in [
            physical_accuracy(&attacker, &defender, delta, rng.range(-30, 30), &config),
            magic_accuracy(&attacker, &defender, rng.range(-30, 30), &config),
            enemy_accuracy(&defender, &attacker, delta, &config),
        ] {
            assert!((30..=95).contains(&accuracy), "accuracy {accuracy}");
        }
    }
}

#[test]
fn every_hit_deals_at_least_one_damage() {
    let config = CombatConfig::default();
    let tables = PositionTables::default();
    let mut rng = PcgRng::seeded(3);

    for _ in 0..200 {
        let mut roster = Roster::new([fighter(), goblin("Ironhide", Row::Back, 500)]);
        if let Some(armored) = roster.get_mut(CombatantId(1)) {
            armored.defense = 200;
        }
        let mut ctx = CombatContext::new(&config, &tables, &mut rng);
        let outcome = resolve_attack(&mut ctx, &mut roster, CombatantId(0), CombatantId(1));
        if outcome.hit {
            assert!(outcome.damage >= 1);
        } else {
            assert_eq!(outcome.damage, 0);
        }
    }
}

#[test]
fn regeneration_never_overfills_or_heals() {
    let config = CombatConfig::default();
    let mut wounded = mage();
    wounded.hp = 5;
    let mut roster = Roster::new([wounded, fighter()]);

    for _ in 0..30 {
        end_of_round(&mut roster, &config);
        for combatant in roster.iter() {
            for (_, pool) in combatant.pools.iter() {
                assert!(pool.current <= pool.max);
            }
        }
        assert_eq!(roster.get(CombatantId(0)).map(|c| c.hp), Some(5));
    }
    assert_eq!(
        roster
            .get(CombatantId(0))
            .map(|c| c.pools.iter().all(|(_, pool)| pool.current == pool.max)),
        Some(true)
    );
}

#[test]
fn round_advances_by_one_per_rebuild() {
    let mut encounter = Encounter::new(
        "Long Watch",
        [fighter(), goblin("Sentinel", Row::Front, 400)],
        CombatConfig::default(),
        PositionTables::default(),
        PcgRng::seeded(21),
    );

    let mut last_round = encounter.round();
    for _ in 0..40 {
        match encounter.phase() {
            EncounterPhase::PlayerTurn(actor) => {
                encounter
                    .submit_player_action(actor, PlayerAction::Defend)
                    .expect("accepted");
            }
            EncounterPhase::EnemyTurn(_) => {
                encounter.run_enemy_turn().expect("accepted");
            }
            _ => break,
        }
        let round = encounter.round();
        assert!(round == last_round || round == last_round + 1);
        last_round = round;
    }
    assert!(last_round > 1);
}
