//! Weapons, damage kinds and resistances.

use std::collections::BTreeMap;

use crate::env::RngOracle;

use super::{ClassKind, StatWeights};

/// Reach class of an attack, selecting the position table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponRange {
    #[default]
    Melee,
    Reach,
    Ranged,
    Thrown,
    Spell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponType {
    #[default]
    Unarmed,
    Dagger,
    ShortSword,
    LongSword,
    Broadsword,
    Mace,
    Axe,
    Spear,
    Staff,
    Bow,
    Crossbow,
    Sling,
    ThrowingKnife,
    Wand,
}

impl WeaponType {
    /// Flat crit chance contributed by the weapon family.
    pub const fn crit_bonus(self) -> f64 {
        match self {
            Self::Dagger => 5.0,
            Self::ShortSword | Self::Bow => 3.0,
            Self::Broadsword | Self::Mace => 2.0,
            _ => 0.0,
        }
    }
}

/// Physical damage subtypes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhysicalKind {
    Slash,
    Pierce,
    #[default]
    Blunt,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Divine,
    Shadow,
    Nature,
    #[default]
    Arcane,
}

impl Element {
    /// Infers an element from keywords in an ability name.
    ///
    /// Content loaders run this once for abilities authored without an
    /// explicit element; it is not consulted during resolution.
    pub fn from_keywords(name: &str) -> Self {
        const KEYWORDS: [(&str, Element); 6] = [
            ("fire", Element::Fire),
            ("ice", Element::Ice),
            ("lightning", Element::Lightning),
            ("divine", Element::Divine),
            ("shadow", Element::Shadow),
            ("nature", Element::Nature),
        ];

        let lowered = name.to_ascii_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map_or(Element::Arcane, |(_, element)| *element)
    }
}

/// Anything a resistance can be keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageKind {
    Physical(PhysicalKind),
    Elemental(Element),
}

/// Resistance level against a damage kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resistance {
    Immune,
    Resistant,
    #[default]
    Neutral,
    Vulnerable,
    VeryVulnerable,
}

impl Resistance {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Immune => 0.0,
            Self::Resistant => 0.5,
            Self::Neutral => 1.0,
            Self::Vulnerable => 1.5,
            Self::VeryVulnerable => 2.0,
        }
    }
}

/// Resistance table; kinds not listed are neutral.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Resistances(BTreeMap<DamageKind, Resistance>);

impl Resistances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: DamageKind, level: Resistance) -> Self {
        self.0.insert(kind, level);
        self
    }

    pub fn level(&self, kind: DamageKind) -> Resistance {
        self.0.get(&kind).copied().unwrap_or_default()
    }

    pub fn multiplier(&self, kind: DamageKind) -> f64 {
        self.level(kind).multiplier()
    }
}

/// Damage that is either fixed or drawn uniformly from an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Damage {
    Flat(i32),
    Range(i32, i32),
}

impl Damage {
    /// Draws a concrete value. Flat damage consumes no randomness.
    pub fn sample(self, rng: &mut impl RngOracle) -> i32 {
        match self {
            Self::Flat(value) => value,
            Self::Range(min, max) => rng.range(min.min(max), min.max(max)),
        }
    }
}

impl Default for Damage {
    fn default() -> Self {
        Self::Flat(1)
    }
}

/// Equipped weapon as seen by the resolvers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Weapon {
    pub name: String,
    pub weapon_type: WeaponType,
    pub range: WeaponRange,
    pub physical: PhysicalKind,
    pub base_damage: i32,
    pub stat_weights: StatWeights,
    pub accuracy_mod: i32,
    pub speed_mod: i32,
    pub crit_mod: f64,
    pub enhancement: i32,
    pub spell_bonus: i32,
    /// Fraction of the defender's armor ignored, in `[0, 1]`.
    pub armor_bypass: Option<f64>,
    /// Classes trained with this weapon. Empty means everyone.
    pub proficient: Vec<ClassKind>,
}

impl Weapon {
    pub fn unarmed() -> Self {
        Self {
            name: "Unarmed".to_string(),
            weapon_type: WeaponType::Unarmed,
            range: WeaponRange::Melee,
            physical: PhysicalKind::Blunt,
            base_damage: 2,
            stat_weights: StatWeights::strength(0.5),
            accuracy_mod: 0,
            speed_mod: 0,
            crit_mod: 0.0,
            enhancement: 0,
            spell_bonus: 0,
            armor_bypass: None,
            proficient: Vec::new(),
        }
    }

    /// Crossbows are cranked mechanically, so their damage ignores STR.
    pub fn is_crossbow(&self) -> bool {
        self.weapon_type == WeaponType::Crossbow
    }

    pub fn is_proficient(&self, class: ClassKind) -> bool {
        self.proficient.is_empty() || self.proficient.contains(&class)
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::unarmed()
    }
}
