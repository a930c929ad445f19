mod common;
mod driver;

use combat_core::{
    ActionFailure, CombatConfig, CombatantId, Encounter, EncounterError, EncounterPhase, PcgRng,
    PlayerAction, PositionTables, Row, ScriptedRng,
};

use common::{fighter, goblin, mage};
use driver::play_out;

fn skirmish(seed: u64) -> Encounter<PcgRng> {
    Encounter::new(
        "Goblin Ambush",
        [
            fighter(),
            mage(),
            goblin("Goblin Warrior", Row::Front, 18),
            goblin("Goblin Archer", Row::Back, 12),
        ],
        CombatConfig::default(),
        PositionTables::default(),
        PcgRng::seeded(seed),
    )
}

#[test]
fn encounter_runs_to_a_terminal_phase() {
    for seed in 0..20 {
        let mut encounter = skirmish(seed);
        play_out(&mut encounter, 500);

        let phase = encounter.phase();
        assert!(phase.is_terminal(), "seed {seed} ended in {phase}");
        match phase {
            EncounterPhase::Victory => {
                assert_eq!(encounter.roster().living_enemies().count(), 0);
                assert!(encounter.roster().living_players().count() > 0);
                let result = encounter.result().expect("victory pays out");
                assert_eq!(result.xp, 20);
                assert!((2..=12).contains(&result.gold));
            }
            EncounterPhase::Defeat => {
                assert_eq!(encounter.roster().living_players().count(), 0);
                assert!(encounter.result().is_none());
            }
            _ => unreachable!(),
        }

        assert!(matches!(
            encounter.submit_player_action(CombatantId(0), PlayerAction::Defend),
            Err(EncounterError::EncounterOver { .. })
        ));
        assert!(matches!(
            encounter.run_enemy_turn(),
            Err(EncounterError::EncounterOver { .. })
        ));
        assert_eq!(encounter.phase(), phase);
    }
}

#[test]
fn round_counter_tracks_round_banners() {
    let mut encounter = skirmish(7);
    play_out(&mut encounter, 500);

    let banners = encounter
        .log()
        .iter()
        .filter(|line| line.starts_with("--- Round "))
        .count();
    assert_eq!(banners as u32, encounter.round());
    assert!(encounter.round() >= 1);
}

#[test]
fn fallen_combatants_never_take_a_turn() {
    for seed in 0..10 {
        let mut encounter = skirmish(seed);
        for _ in 0..500 {
            if let Some(actor) = encounter.phase().actor() {
                let combatant = encounter.roster().get(actor).expect("actor exists");
                assert!(combatant.alive && combatant.hp > 0);
            }
            for combatant in encounter.roster().iter() {
                assert_eq!(combatant.hp > 0, combatant.alive, "{}", combatant.name);
            }

            match encounter.phase() {
                EncounterPhase::PlayerTurn(actor) => {
                    let target = driver::first_enemy(&encounter).expect("enemy standing");
                    let outcome = encounter
                        .submit_player_action(actor, PlayerAction::Attack { target })
                        .expect("accepted");
                    assert!(outcome.failure.is_none());
                }
                EncounterPhase::EnemyTurn(_) => {
                    encounter.run_enemy_turn().expect("accepted");
                }
                _ => break,
            }
        }
        assert!(encounter.phase().is_terminal());
    }
}

#[test]
fn attacking_an_ally_keeps_the_turn() {
    let mut encounter = Encounter::new(
        "Training Yard",
        [fighter(), mage(), goblin("Goblin", Row::Front, 20)],
        CombatConfig::default(),
        PositionTables::default(),
        ScriptedRng::new(),
    );
    let EncounterPhase::PlayerTurn(actor) = encounter.phase() else {
        panic!("a player should act first, got {}", encounter.phase());
    };
    let ally = if actor == CombatantId(0) {
        CombatantId(1)
    } else {
        CombatantId(0)
    };

    let outcome = encounter
        .submit_player_action(actor, PlayerAction::Attack { target: ally })
        .expect("accepted");
    assert!(matches!(
        outcome.failure,
        Some(ActionFailure::InvalidTarget { .. })
    ));
    assert_eq!(encounter.phase(), EncounterPhase::PlayerTurn(actor));
    assert_eq!(encounter.round(), 1);
}

#[test]
fn enemy_api_rejects_player_turns() {
    let mut encounter = skirmish(3);
    if let EncounterPhase::PlayerTurn(_) = encounter.phase() {
        assert!(matches!(
            encounter.run_enemy_turn(),
            Err(EncounterError::NotEnemyTurn { .. })
        ));
    }
    encounter.run_until_player_input();
    if let EncounterPhase::PlayerTurn(actor) = encounter.phase() {
        let other = if actor == CombatantId(0) {
            CombatantId(1)
        } else {
            CombatantId(0)
        };
        assert_eq!(
            encounter.submit_player_action(other, PlayerAction::Defend),
            Err(EncounterError::NotActingCombatant {
                submitted: other,
                expected: actor,
            })
        );
    }
}
