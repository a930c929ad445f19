//! Common error infrastructure for combat-core.
//!
//! In-combat failures (a target that already fell, a pool that cannot pay a
//! cost) are ordinary outcomes of play, so they are carried inside action
//! outcomes as [`ActionFailure`] values rather than propagated. Misuse of the
//! encounter API by the caller is reported through
//! [`crate::engine::EncounterError`].

use crate::state::{CombatantId, ResourceKind};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller may pick another action.
    ///
    /// Examples: insufficient resource, target already down
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown combatant, action submitted outside its phase
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a fallen combatant was handed a turn
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all combat-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Reasons an action was refused before any roll took place.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionFailure {
    /// The acting combatant cannot pay the ability cost.
    #[error("insufficient {resource}: needs {cost}, has {available}")]
    InsufficientResource {
        resource: ResourceKind,
        cost: i32,
        available: i32,
    },

    /// The target is absent, already down, or not permitted for the ability.
    #[error("invalid target {target}: {reason}")]
    InvalidTarget {
        target: CombatantId,
        reason: &'static str,
    },

    /// The ability cannot be activated (passive, unknown index).
    #[error("ability cannot be used: {reason}")]
    InvalidAbility { reason: &'static str },

    /// The acting combatant is down; nothing was resolved.
    #[error("combatant {0} is down and cannot act")]
    AttackerDown(CombatantId),
}

impl CombatError for ActionFailure {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientResource { .. } | Self::InvalidTarget { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::InvalidAbility { .. } => ErrorSeverity::Validation,
            Self::AttackerDown(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientResource { .. } => "ACTION_INSUFFICIENT_RESOURCE",
            Self::InvalidTarget { .. } => "ACTION_INVALID_TARGET",
            Self::InvalidAbility { .. } => "ACTION_INVALID_ABILITY",
            Self::AttackerDown(_) => "ACTION_ATTACKER_DOWN",
        }
    }
}
