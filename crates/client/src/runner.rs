//! One headless encounter from content load to party save.

use anyhow::{Context, Result, bail};
use combat_content::{Character, ContentFactory, build_player_combatant, write_back};
use combat_core::{Encounter, EncounterPhase, EncounterResult, PcgRng, PlayerAction};

use crate::config::SimConfig;
use crate::pilot;

/// Everything a finished skirmish produced.
#[derive(Clone, Debug)]
pub struct SkirmishReport {
    pub encounter: String,
    pub outcome: EncounterPhase,
    pub rounds: u32,
    pub turns: usize,
    pub result: Option<EncounterResult>,
    pub log: Vec<String>,
    pub digest: [u8; 32],
    /// The party after write-back and any post-fight walking.
    pub party: Vec<Character>,
}

/// Loads content, fights the configured encounter to the end and writes the
/// results back onto the party.
///
/// # Errors
///
/// Returns an error if content fails to load, the encounter key is unknown,
/// the fight outlasts `max_turns`, or saving the party fails.
pub fn run(config: &SimConfig) -> Result<SkirmishReport> {
    let factory = ContentFactory::new(&config.data_dir);
    let combat_config = factory.load_config()?;
    let tables = factory.load_tables()?;
    let bestiary = factory.load_bestiary()?;
    let mut party = factory.load_party()?;

    let (enemies, name) = bestiary.build_encounter(&config.encounter)?;
    tracing::info!(
        encounter = %name,
        party = party.len(),
        enemies = enemies.len(),
        seed = config.seed,
        "starting skirmish"
    );

    // The roster keeps party members first, in party order, so ids line up
    // with `party` indices for write-back.
    let fighters = party.iter().map(build_player_combatant).chain(enemies);
    let mut encounter = Encounter::new(
        name.clone(),
        fighters,
        combat_config,
        tables,
        PcgRng::seeded(config.seed),
    );

    let turns = play(&mut encounter, config.max_turns)?;
    let outcome = encounter.phase();
    let rounds = encounter.round();
    let result = encounter.result();
    let mut log = encounter.log().to_vec();
    let digest = encounter.state_digest();
    tracing::info!(%outcome, rounds, turns, "skirmish finished");

    let roster = encounter.into_roster();
    for (character, combatant) in party.iter_mut().zip(roster.iter()) {
        write_back(character, combatant);
    }

    for _ in 0..config.walk_steps {
        for character in party.iter_mut().filter(|c| c.is_conscious()) {
            log.extend(character.take_step().messages);
        }
    }

    if let Some(dir) = &config.party_out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        ContentFactory::new(dir).save_party(&party)?;
        tracing::info!(dir = %dir.display(), "saved party");
    }

    Ok(SkirmishReport {
        encounter: name,
        outcome,
        rounds,
        turns,
        result,
        log,
        digest,
        party,
    })
}

/// Drives the encounter until it ends. Returns the number of turns taken.
fn play(encounter: &mut Encounter<PcgRng>, max_turns: usize) -> Result<usize> {
    for turn in 0..max_turns {
        match encounter.phase() {
            EncounterPhase::PlayerTurn(actor) => {
                let action =
                    pilot::choose(encounter.roster(), actor).unwrap_or(PlayerAction::Defend);
                let outcome = encounter.submit_player_action(actor, action)?;
                if outcome.failure.is_some() {
                    tracing::debug!(%actor, ?action, "pilot choice refused, defending");
                    encounter.submit_player_action(actor, PlayerAction::Defend)?;
                }
            }
            EncounterPhase::EnemyTurn(_) => {
                encounter.run_enemy_turn()?;
            }
            EncounterPhase::Victory | EncounterPhase::Defeat => return Ok(turn),
        }
    }
    if !encounter.phase().is_terminal() {
        bail!(
            "encounter '{}' still undecided after {max_turns} turns",
            encounter.name()
        );
    }
    Ok(max_turns)
}
