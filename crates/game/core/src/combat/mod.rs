//! Combat formulas.
//!
//! Pure functions that turn combatant snapshots plus already-drawn random
//! values into accuracy, damage, healing and crit results. Nothing here
//! mutates a combatant; the resolvers in [`crate::action`] do that.
//!
//! # Core Functions
//!
//! - `physical_accuracy` / `magic_accuracy` / `enemy_accuracy`
//! - `physical_damage` / `magic_damage` / `enemy_damage` / `healing_amount`
//! - `check_crit`
//! - `PositionTables::modifier`

pub mod crit;
pub mod damage;
pub mod hit;
pub mod position;
pub mod result;

pub use crit::{AttackKind, CritData, check_crit, crit_chance, crit_data};
pub use damage::{
    PhysicalDamage, PhysicalStrike, enemy_damage, heal_bonus_cap, healing_amount, magic_damage,
    physical_damage,
};
pub use hit::{check_hit, enemy_accuracy, magic_accuracy, physical_accuracy};
pub use position::{PositionEntry, PositionModifier, PositionTables, RangeTable};
pub use result::{AbilityOutcome, ActionOutcome};
