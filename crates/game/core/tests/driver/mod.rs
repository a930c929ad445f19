use combat_core::{CombatantId, Encounter, EncounterPhase, PlayerAction, RngOracle};

/// Plays an encounter to the end: players swing at the first standing enemy.
///
/// Panics if the fight does not finish within `max_turns`.
pub fn play_out<R: RngOracle>(encounter: &mut Encounter<R>, max_turns: usize) {
    for _ in 0..max_turns {
        match encounter.phase() {
            EncounterPhase::PlayerTurn(actor) => {
                let target = first_enemy(encounter).expect("an enemy is standing");
                encounter
                    .submit_player_action(actor, PlayerAction::Attack { target })
                    .expect("player turn accepted");
            }
            EncounterPhase::EnemyTurn(_) => {
                encounter.run_enemy_turn().expect("enemy turn accepted");
            }
            EncounterPhase::Victory | EncounterPhase::Defeat => return,
        }
    }
    panic!("encounter did not finish within {max_turns} turns");
}

pub fn first_enemy<R: RngOracle>(encounter: &Encounter<R>) -> Option<CombatantId> {
    encounter.roster().living_enemies().next().map(|c| c.id)
}
