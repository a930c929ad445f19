//! Errors surfaced when the encounter API is driven out of protocol.

use crate::error::{CombatError, ErrorSeverity};
use crate::state::CombatantId;

use super::EncounterPhase;

/// Caller misuse of [`super::Encounter`].
///
/// In-combat refusals (bad target, empty pool) are not errors here; they come
/// back inside the action outcome and leave the turn where it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterError {
    #[error("a player action was submitted during {phase}")]
    NotPlayerTurn { phase: EncounterPhase },

    #[error("an enemy turn was requested during {phase}")]
    NotEnemyTurn { phase: EncounterPhase },

    #[error("the encounter is already over ({phase})")]
    EncounterOver { phase: EncounterPhase },

    #[error("no combatant {0} in this encounter")]
    UnknownCombatant(CombatantId),

    #[error("combatant {submitted} acted out of turn; {expected} is acting")]
    NotActingCombatant {
        submitted: CombatantId,
        expected: CombatantId,
    },
}

impl CombatError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPlayerTurn { .. } => "ENCOUNTER_NOT_PLAYER_TURN",
            Self::NotEnemyTurn { .. } => "ENCOUNTER_NOT_ENEMY_TURN",
            Self::EncounterOver { .. } => "ENCOUNTER_OVER",
            Self::UnknownCombatant(_) => "ENCOUNTER_UNKNOWN_COMBATANT",
            Self::NotActingCombatant { .. } => "ENCOUNTER_NOT_ACTING_COMBATANT",
        }
    }
}
