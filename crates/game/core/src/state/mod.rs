//! Combatant model.
//!
//! Everything the resolvers read or mutate lives here: the [`Combatant`]
//! record and its parts, and the [`Roster`] arena that owns them for the
//! duration of an encounter.
mod ability;
mod combatant;
mod common;
mod resources;
mod roster;
mod stats;
mod status;
mod weapon;

pub use ability::{Ability, AbilityFlags, AbilityType};
pub use combatant::{AiArchetype, Combatant, CombatantBuilder, EnemyProfile};
pub use common::{CombatantId, CombatantKind, Row};
pub use resources::{Pool, ResourceKind, ResourcePools};
pub use roster::Roster;
pub use stats::{ClassKind, Stat, StatBlock, StatWeights};
pub use status::{
    BuffKind, CurseKind, DebuffKind, IncapacitateKind, PoisonTier, StatusEffect, StatusEffects,
    StepTick,
};
pub use weapon::{
    Damage, DamageKind, Element, PhysicalKind, Resistance, Resistances, Weapon, WeaponRange,
    WeaponType,
};
