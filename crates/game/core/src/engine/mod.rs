//! Encounter state machine.
//!
//! The [`Encounter`] owns the roster and the RNG for one fight. Callers drive
//! it one turn at a time: players through [`Encounter::submit_player_action`],
//! enemies through [`Encounter::run_enemy_turn`]. After every resolved action
//! the encounter settles into the next phase, handling round rollover, dead
//! slots and incapacitated combatants on the way.

mod digest;
mod errors;
mod rewards;
mod ticker;
mod turns;

pub use errors::EncounterError;
pub use rewards::{EncounterResult, compute_rewards};
pub use ticker::{end_of_round, regenerate};
pub use turns::{build_turn_order, compute_speed};

use std::fmt;

use crate::action::{CombatContext, resolve_ability, resolve_attack};
use crate::ai::{self, EnemyAction};
use crate::combat::{ActionOutcome, PositionTables};
use crate::config::CombatConfig;
use crate::env::RngOracle;
use crate::state::{Combatant, CombatantId, CombatantKind, Roster};

/// Whose move it is, or how the fight ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterPhase {
    PlayerTurn(CombatantId),
    EnemyTurn(CombatantId),
    Victory,
    Defeat,
}

impl EncounterPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }

    /// The combatant whose turn it is, if any.
    pub fn actor(&self) -> Option<CombatantId> {
        match self {
            Self::PlayerTurn(id) | Self::EnemyTurn(id) => Some(*id),
            Self::Victory | Self::Defeat => None,
        }
    }
}

impl fmt::Display for EncounterPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerTurn(id) => write!(f, "player turn ({id})"),
            Self::EnemyTurn(id) => write!(f, "enemy turn ({id})"),
            Self::Victory => f.write_str("victory"),
            Self::Defeat => f.write_str("defeat"),
        }
    }
}

/// A choice submitted for a player-controlled combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    Attack { target: CombatantId },
    UseAbility { ability: usize, target: CombatantId },
    Defend,
}

/// One fight between the party and a group of enemies.
pub struct Encounter<R: RngOracle> {
    name: String,
    roster: Roster,
    config: CombatConfig,
    tables: PositionTables,
    rng: R,
    turn_order: Vec<CombatantId>,
    cursor: usize,
    round: u32,
    phase: EncounterPhase,
    log: Vec<String>,
    result: Option<EncounterResult>,
}

impl<R: RngOracle> Encounter<R> {
    /// Sets up the roster, rolls the first turn order and settles into the
    /// first actionable phase.
    pub fn new(
        name: impl Into<String>,
        combatants: impl IntoIterator<Item = Combatant>,
        config: CombatConfig,
        tables: PositionTables,
        mut rng: R,
    ) -> Self {
        let name = name.into();
        let roster = Roster::new(combatants);
        let turn_order = build_turn_order(&roster, &mut rng, &config);

        tracing::info!(
            encounter = %name,
            combatants = roster.len(),
            "encounter started"
        );

        let mut encounter = Self {
            name,
            roster,
            config,
            tables,
            rng,
            turn_order,
            cursor: 0,
            round: 1,
            phase: EncounterPhase::Defeat,
            log: vec!["--- Round 1 ---".to_string()],
            result: None,
        };
        encounter.settle();
        encounter
    }

    // ========================================================================
    // Turn API
    // ========================================================================

    /// Resolves an action for the acting player.
    ///
    /// Refusals that happen before any roll (bad target, unpaid cost, unusable
    /// ability) come back as an outcome with `failure` set, and the same
    /// player keeps the turn.
    pub fn submit_player_action(
        &mut self,
        actor: CombatantId,
        action: PlayerAction,
    ) -> Result<ActionOutcome, EncounterError> {
        let expected = match self.phase {
            EncounterPhase::PlayerTurn(id) => id,
            EncounterPhase::EnemyTurn(_) => {
                return Err(EncounterError::NotPlayerTurn { phase: self.phase });
            }
            EncounterPhase::Victory | EncounterPhase::Defeat => {
                return Err(EncounterError::EncounterOver { phase: self.phase });
            }
        };
        if !self.roster.contains(actor) {
            return Err(EncounterError::UnknownCombatant(actor));
        }
        if actor != expected {
            return Err(EncounterError::NotActingCombatant {
                submitted: actor,
                expected,
            });
        }

        let outcome = match action {
            PlayerAction::Attack { target } => {
                let mut ctx = CombatContext::new(&self.config, &self.tables, &mut self.rng);
                resolve_attack(&mut ctx, &mut self.roster, actor, target)
            }
            PlayerAction::UseAbility { ability, target } => {
                let mut ctx = CombatContext::new(&self.config, &self.tables, &mut self.rng);
                resolve_ability(&mut ctx, &mut self.roster, actor, target, ability)
            }
            PlayerAction::Defend => self.defend(actor),
        };
        self.log.extend(outcome.messages.iter().cloned());

        if outcome.refused() {
            tracing::debug!(%actor, failure = ?outcome.failure, "player action refused");
        } else {
            self.finish_turn();
        }
        Ok(outcome)
    }

    /// Lets the acting enemy pick and resolve its action.
    pub fn run_enemy_turn(&mut self) -> Result<ActionOutcome, EncounterError> {
        let actor = match self.phase {
            EncounterPhase::EnemyTurn(id) => id,
            EncounterPhase::PlayerTurn(_) => {
                return Err(EncounterError::NotEnemyTurn { phase: self.phase });
            }
            EncounterPhase::Victory | EncounterPhase::Defeat => {
                return Err(EncounterError::EncounterOver { phase: self.phase });
            }
        };

        let decision = ai::choose_action(&self.roster, actor, &mut self.rng, &self.config);
        let outcome = match decision {
            Some(decision) => {
                let mut ctx = CombatContext::new(&self.config, &self.tables, &mut self.rng);
                match decision.action {
                    EnemyAction::Attack => {
                        resolve_attack(&mut ctx, &mut self.roster, actor, decision.target)
                    }
                    EnemyAction::UseAbility(index) => {
                        resolve_ability(&mut ctx, &mut self.roster, actor, decision.target, index)
                    }
                }
            }
            None => {
                let mut outcome = ActionOutcome::default();
                outcome.push(format!("{} hesitates.", self.name_of(actor)));
                outcome
            }
        };
        self.log.extend(outcome.messages.iter().cloned());

        // enemies never hold the turn, even when refused
        self.finish_turn();
        Ok(outcome)
    }

    /// Runs enemy turns until a player must act or the fight is over.
    pub fn run_until_player_input(&mut self) -> EncounterPhase {
        while let EncounterPhase::EnemyTurn(_) = self.phase {
            if self.run_enemy_turn().is_err() {
                break;
            }
        }
        self.phase
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Append-only combat log.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn turn_order(&self) -> &[CombatantId] {
        &self.turn_order
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Rewards, present once the encounter ended in victory.
    pub fn result(&self) -> Option<EncounterResult> {
        self.result
    }

    /// SHA-256 over round, phase, roster state and log length.
    pub fn state_digest(&self) -> [u8; 32] {
        digest::state_digest(self.round, self.phase, &self.roster, self.log.len())
    }

    /// Hands the combatants back for write-back.
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn defend(&mut self, actor: CombatantId) -> ActionOutcome {
        let mut outcome = ActionOutcome::default();
        if let Some(combatant) = self.roster.get_mut(actor) {
            combatant.is_defending = true;
            outcome.push(format!("{} takes a defensive stance.", combatant.name));
        }
        outcome
    }

    fn name_of(&self, id: CombatantId) -> String {
        self.roster
            .get(id)
            .map_or_else(|| id.to_string(), |c| c.name.clone())
    }

    fn finish_turn(&mut self) {
        self.cursor += 1;
        self.settle();
    }

    /// Moves to the next phase.
    ///
    /// Checks, in order: defeat, victory, round rollover, then walks the turn
    /// order past fallen and incapacitated combatants.
    fn settle(&mut self) {
        loop {
            if !self.roster.any_active(CombatantKind::Player) {
                self.conclude(EncounterPhase::Defeat);
                return;
            }
            if !self.roster.any_active(CombatantKind::Enemy) {
                self.conclude(EncounterPhase::Victory);
                return;
            }

            let Some(id) = self.turn_order.get(self.cursor).copied() else {
                self.next_round();
                continue;
            };
            let Some(combatant) = self.roster.get(id) else {
                self.cursor += 1;
                continue;
            };
            if !combatant.is_active() {
                self.cursor += 1;
                continue;
            }
            if let Some(kind) = combatant.status.incapacitation() {
                let name = combatant.name.clone();
                tracing::debug!(%name, %kind, "turn skipped");
                self.log.push(format!("{name} is {kind} and cannot act!"));
                // incapacitation counts down in lost turns, not round boundaries
                let spent = self
                    .roster
                    .get_mut(id)
                    .and_then(|c| c.status.spend_incapacitation());
                if let Some(effect) = spent {
                    self.log
                        .push(format!("{name}'s {} wears off.", effect.label()));
                }
                self.cursor += 1;
                continue;
            }

            self.phase = match combatant.kind {
                CombatantKind::Player => EncounterPhase::PlayerTurn(id),
                CombatantKind::Enemy => EncounterPhase::EnemyTurn(id),
            };
            tracing::info!(round = self.round, phase = %self.phase, "turn");
            return;
        }
    }

    fn next_round(&mut self) {
        let expired = end_of_round(&mut self.roster, &self.config);
        self.log.extend(expired);

        self.turn_order = build_turn_order(&self.roster, &mut self.rng, &self.config);
        self.cursor = 0;
        self.round += 1;
        self.log.push(format!("--- Round {} ---", self.round));
        tracing::info!(round = self.round, order = self.turn_order.len(), "new round");
    }

    fn conclude(&mut self, phase: EncounterPhase) {
        self.phase = phase;
        if phase == EncounterPhase::Victory && self.result.is_none() {
            let result = compute_rewards(&self.roster, &mut self.rng);
            self.log.push(format!(
                "Victory! Gained {} XP and {} gold.",
                result.xp, result.gold
            ));
            self.result = Some(result);
        } else if phase == EncounterPhase::Defeat {
            self.log.push("The party has been defeated.".to_string());
        }
        tracing::info!(encounter = %self.name, round = self.round, %phase, "encounter over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::error::ActionFailure;
    use crate::state::{Ability, AbilityType, EnemyProfile, StatBlock, StatusEffect};

    fn hero() -> Combatant {
        Combatant::builder("Hero", CombatantKind::Player)
            .stats(StatBlock::new(14, 16, 12, 10, 10, 10))
            .max_hp(50)
            .build()
    }

    fn rat(max_hp: i32) -> Combatant {
        Combatant::builder("Rat", CombatantKind::Enemy)
            .stats(StatBlock::new(6, 8, 6, 2, 4, 2))
            .max_hp(max_hp)
            .enemy_profile(EnemyProfile {
                xp_reward: 5,
                gold_reward: (2, 2),
                ..EnemyProfile::default()
            })
            .build()
    }

    fn encounter(combatants: Vec<Combatant>) -> Encounter<ScriptedRng> {
        Encounter::new(
            "Cellar",
            combatants,
            CombatConfig::default(),
            PositionTables::default(),
            ScriptedRng::new(),
        )
    }

    #[test]
    fn fastest_combatant_acts_first() {
        let encounter = encounter(vec![rat(20), hero()]);
        assert_eq!(encounter.phase(), EncounterPhase::PlayerTurn(CombatantId(1)));
        assert_eq!(encounter.turn_order(), &[CombatantId(1), CombatantId(0)]);
        assert_eq!(encounter.round(), 1);
    }

    #[test]
    fn killing_the_last_enemy_is_victory_once() {
        let mut encounter = encounter(vec![hero(), rat(1)]);
        let outcome = encounter.submit_player_action(
            CombatantId(0),
            PlayerAction::Attack {
                target: CombatantId(1),
            },
        );
        assert!(outcome.is_ok_and(|o| o.hit));
        assert_eq!(encounter.phase(), EncounterPhase::Victory);
        assert_eq!(encounter.result(), Some(EncounterResult { xp: 5, gold: 2 }));

        let again = encounter.submit_player_action(CombatantId(0), PlayerAction::Defend);
        assert_eq!(
            again,
            Err(EncounterError::EncounterOver {
                phase: EncounterPhase::Victory
            })
        );
        assert_eq!(encounter.result(), Some(EncounterResult { xp: 5, gold: 2 }));
    }

    #[test]
    fn protocol_misuse_is_an_error() {
        let mut encounter = encounter(vec![hero(), rat(20)]);
        assert_eq!(
            encounter.submit_player_action(CombatantId(1), PlayerAction::Defend),
            Err(EncounterError::NotActingCombatant {
                submitted: CombatantId(1),
                expected: CombatantId(0),
            })
        );
        assert_eq!(
            encounter.submit_player_action(CombatantId(9), PlayerAction::Defend),
            Err(EncounterError::UnknownCombatant(CombatantId(9)))
        );
        assert!(matches!(
            encounter.run_enemy_turn(),
            Err(EncounterError::NotEnemyTurn { .. })
        ));
    }

    #[test]
    fn refused_action_keeps_the_turn() {
        let mut encounter = encounter(vec![hero(), rat(20)]);
        let before = encounter.log().len();
        let outcome = encounter.submit_player_action(
            CombatantId(0),
            PlayerAction::UseAbility {
                ability: 3,
                target: CombatantId(1),
            },
        );
        assert!(matches!(
            outcome.map(|o| o.failure),
            Ok(Some(ActionFailure::InvalidAbility { .. }))
        ));
        assert_eq!(encounter.phase(), EncounterPhase::PlayerTurn(CombatantId(0)));
        assert!(encounter.log().len() > before);
    }

    #[test]
    fn defend_then_round_rollover_clears_the_stance() {
        let mut encounter = encounter(vec![hero(), rat(20)]);
        let defended = encounter.submit_player_action(CombatantId(0), PlayerAction::Defend);
        assert!(defended.is_ok());
        assert_eq!(encounter.phase(), EncounterPhase::EnemyTurn(CombatantId(1)));
        assert_eq!(
            encounter.roster().get(CombatantId(0)).map(|c| c.is_defending),
            Some(true)
        );

        assert_eq!(
            encounter.run_until_player_input(),
            EncounterPhase::PlayerTurn(CombatantId(0))
        );
        assert_eq!(encounter.round(), 2);
        assert!(encounter.log().iter().any(|line| line == "--- Round 2 ---"));
        assert_eq!(
            encounter.roster().get(CombatantId(0)).map(|c| c.is_defending),
            Some(false)
        );
    }

    #[test]
    fn stunned_combatant_loses_its_turn() {
        let mut stunned = hero();
        stunned.status.add(StatusEffect::stun(1));
        let mut encounter = encounter(vec![stunned, rat(20)]);
        // speed 0 while stunned, so the rat goes first
        assert_eq!(encounter.phase(), EncounterPhase::EnemyTurn(CombatantId(1)));

        assert_eq!(
            encounter.run_until_player_input(),
            EncounterPhase::PlayerTurn(CombatantId(0))
        );
        assert_eq!(encounter.round(), 2);
        let log = encounter.log();
        assert!(log.iter().any(|line| line == "Hero is stunned and cannot act!"));
        assert!(log.iter().any(|line| line == "Hero's stunned wears off."));
    }

    #[test]
    fn stun_from_a_slower_attacker_costs_the_next_turn() {
        let bash = Ability::new("Shield Bash", AbilityType::Attack).with_stun_chance(100);
        let slow_hero = Combatant::builder("Hero", CombatantKind::Player)
            .stats(StatBlock::new(14, 1, 12, 10, 10, 10))
            .max_hp(50)
            .ability(bash)
            .build();
        let quick_rat = Combatant::builder("Rat", CombatantKind::Enemy)
            .stats(StatBlock::new(6, 40, 6, 2, 4, 2))
            .max_hp(500)
            .build();
        let mut encounter = Encounter::new(
            "Cellar",
            vec![slow_hero, quick_rat],
            CombatConfig::default(),
            PositionTables::default(),
            ScriptedRng::new().with_fallback_d100(1),
        );
        let hero = CombatantId(0);
        let rat = CombatantId(1);
        let rat_swings = |log: &[String]| {
            log.iter()
                .filter(|l| l.starts_with("Rat attacks"))
                .count()
        };

        // round 1: the rat has already acted when the stun lands
        assert_eq!(encounter.phase(), EncounterPhase::EnemyTurn(rat));
        encounter.run_enemy_turn().expect("rat's turn");
        let outcome = encounter
            .submit_player_action(
                hero,
                PlayerAction::UseAbility {
                    ability: 0,
                    target: rat,
                },
            )
            .expect("hero's turn");
        assert!(outcome.messages.iter().any(|m| m == "Rat is stunned!"));

        // round 2: the stun survived the boundary and eats the rat's turn
        assert_eq!(encounter.round(), 2);
        assert_eq!(encounter.phase(), EncounterPhase::PlayerTurn(hero));
        encounter
            .submit_player_action(hero, PlayerAction::Defend)
            .expect("hero's turn");
        assert_eq!(encounter.round(), 3);
        assert_eq!(rat_swings(encounter.log()), 1);
        let log = encounter.log();
        assert!(log.iter().any(|l| l == "Rat is stunned and cannot act!"));
        assert!(log.iter().any(|l| l == "Rat's stunned wears off."));

        // round 3: back on its feet and first again
        assert_eq!(encounter.phase(), EncounterPhase::EnemyTurn(rat));
        encounter.run_enemy_turn().expect("rat's turn");
        assert_eq!(rat_swings(encounter.log()), 2);
    }
}
