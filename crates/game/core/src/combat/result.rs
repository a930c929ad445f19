//! Outcome of a resolved action.

use crate::error::ActionFailure;

/// What happened when an action resolved.
///
/// Failures that stop an action before any roll are carried in `failure`
/// rather than returned as errors; the caller logs `messages` either way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActionOutcome {
    pub hit: bool,
    /// Total damage dealt, including row-piercing follow-ups.
    pub damage: i32,
    pub healing: i32,
    pub is_crit: bool,
    pub messages: Vec<String>,
    pub failure: Option<ActionFailure>,
}

/// Outcome of an ability activation.
pub type AbilityOutcome = ActionOutcome;

impl ActionOutcome {
    pub fn failed(failure: ActionFailure, message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// True when the action was refused before anything was rolled or paid.
    pub fn refused(&self) -> bool {
        matches!(
            self.failure,
            Some(
                ActionFailure::InsufficientResource { .. }
                    | ActionFailure::InvalidTarget { .. }
                    | ActionFailure::InvalidAbility { .. }
            )
        )
    }
}
