//! Deterministic turn-based combat resolution for party-vs-enemy encounters.
//!
//! `combat-core` holds the rules: turn scheduling, accuracy, damage, healing
//! and crit formulas, the ability resolver, enemy AI, status ticking and the
//! encounter state machine. It performs no I/O. Content (characters, enemy
//! tables, balance values) comes in as plain values, and all randomness comes
//! from an injected [`RngOracle`], so the same seed replays the same fight.
//!
//! Everything is driven through [`engine::Encounter`]; the lower modules are
//! public for tools and tests that need a single formula.
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{CombatContext, resolve_ability, resolve_attack};
pub use ai::{EnemyAction, EnemyDecision, choose_action};
pub use combat::{AbilityOutcome, ActionOutcome, CritData, PositionTables};
pub use config::{CombatConfig, RowWeights, VarianceRange};
pub use engine::{
    Encounter, EncounterError, EncounterPhase, EncounterResult, PlayerAction, build_turn_order,
    compute_speed,
};
pub use env::{PcgRng, RngOracle, ScriptedRng};
pub use error::{ActionFailure, CombatError, ErrorSeverity};
pub use state::{
    Ability, AbilityFlags, AbilityType, AiArchetype, BuffKind, ClassKind, Combatant,
    CombatantBuilder, CombatantId, CombatantKind, CurseKind, Damage, DamageKind, DebuffKind,
    Element, EnemyProfile, IncapacitateKind, PhysicalKind, PoisonTier, Pool, Resistance,
    Resistances, ResourceKind, ResourcePools, Roster, Row, Stat, StatBlock, StatWeights,
    StatusEffect, StatusEffects, StepTick, Weapon, WeaponRange, WeaponType,
};
