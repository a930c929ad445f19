//! Data-driven combat content and the bridge between characters and combat.
//!
//! This crate provides:
//! - Persistent party members ([`Character`]) and their conversion to and
//!   from combatants
//! - Enemy templates and encounter tables ([`Bestiary`])
//! - Loaders for balance values and position tables (TOML) and for enemies,
//!   encounters and the party (RON)
//!
//! All loaders use combat-core types directly with serde for RON/TOML
//! deserialization.

pub mod bestiary;
pub mod character;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bestiary::{Bestiary, EncounterSlot, EncounterTemplate, EnemyTemplate};
pub use character::{Character, StepReport, build_player_combatant, write_back};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EncounterLoader, EnemyLoader, LoadResult, PartyLoader,
    TablesLoader,
};
