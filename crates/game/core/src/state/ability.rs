//! Ability descriptors.
//!
//! Abilities are immutable templates authored in content. The resolver
//! dispatches on [`AbilityType`], never on the display name.

use bitflags::bitflags;

use super::{Element, ResourceKind, StatusEffect};

/// What an ability does when activated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityType {
    #[default]
    Attack,
    Spell,
    Heal,
    Buff,
    Debuff,
    /// Offensive ability that strikes every living opponent on the target's side.
    Aoe,
    /// Healing that reaches every living ally.
    AoeHeal,
    /// Removes poison, curses and debuffs.
    Cure,
    /// Restores a fallen ally.
    Revive,
    /// Always-on trait; cannot be activated.
    Passive,
    Special,
}

impl AbilityType {
    pub const fn is_offensive(self) -> bool {
        matches!(self, Self::Attack | Self::Spell | Self::Special | Self::Aoe)
    }

    pub const fn is_healing(self) -> bool {
        matches!(self, Self::Heal | Self::AoeHeal)
    }

    /// Abilities aimed at the opposing side.
    pub const fn targets_opponents(self) -> bool {
        self.is_offensive() || matches!(self, Self::Debuff)
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AbilityFlags: u8 {
        /// Must target the caster.
        const SELF_ONLY   = 1 << 0;
        /// Primary physical hit carries through into the rear rows.
        const PIERCE_ROWS = 1 << 1;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AbilityFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AbilityFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// An ability template.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ability {
    pub name: String,
    pub kind: AbilityType,
    pub cost: i32,
    pub resource: Option<ResourceKind>,
    /// Explicit power. Zero derives power from the cost.
    pub power: i32,
    pub element: Option<Element>,
    pub flags: AbilityFlags,
    pub accuracy_mod: i32,
    /// HP fraction at or below which damage doubles.
    pub execute_threshold: Option<f64>,
    /// Percent chance to stun on hit.
    pub stun_chance: u32,
    pub bonus_crit: f64,
    /// Fraction of dealt damage reflected onto the user.
    pub recoil: f64,
    pub grants: Option<StatusEffect>,
}

impl Ability {
    pub fn new(name: impl Into<String>, kind: AbilityType) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_cost(mut self, cost: i32, resource: ResourceKind) -> Self {
        self.cost = cost;
        self.resource = Some(resource);
        self
    }

    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_flags(mut self, flags: AbilityFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_accuracy_mod(mut self, accuracy_mod: i32) -> Self {
        self.accuracy_mod = accuracy_mod;
        self
    }

    pub fn with_execute_threshold(mut self, threshold: f64) -> Self {
        self.execute_threshold = Some(threshold);
        self
    }

    pub fn with_stun_chance(mut self, chance: u32) -> Self {
        self.stun_chance = chance;
        self
    }

    pub fn with_bonus_crit(mut self, bonus: f64) -> Self {
        self.bonus_crit = bonus;
        self
    }

    pub fn with_recoil(mut self, recoil: f64) -> Self {
        self.recoil = recoil;
        self
    }

    pub fn granting(mut self, effect: StatusEffect) -> Self {
        self.grants = Some(effect);
        self
    }

    pub fn is_self_only(&self) -> bool {
        self.flags.contains(AbilityFlags::SELF_ONLY)
    }

    pub fn pierces_rows(&self) -> bool {
        self.flags.contains(AbilityFlags::PIERCE_ROWS)
    }

    /// Offensive abilities paid from a magic pool resolve as spells.
    pub fn is_magical(&self) -> bool {
        self.resource.is_some_and(ResourceKind::is_magic)
    }

    /// Power used by the resolver.
    ///
    /// A positive `power` always wins, even when the ability also has a cost;
    /// cost × `per_cost` is only the fallback for abilities without one.
    pub fn effective_power(&self, per_cost: f64) -> f64 {
        if self.power > 0 {
            f64::from(self.power)
        } else {
            f64::from(self.cost.max(0)) * per_cost
        }
    }
}
