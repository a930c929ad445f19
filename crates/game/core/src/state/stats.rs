//! Six-axis attribute block and character classes.

/// Primary attributes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum Stat {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Pie,
}

/// Integer attribute values of a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBlock {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub piety: i32,
}

impl StatBlock {
    /// Builds a block in STR, DEX, CON, INT, WIS, PIE order.
    pub const fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        piety: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            piety,
        }
    }

    /// Every attribute set to the same value.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub const fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Str => self.strength,
            Stat::Dex => self.dexterity,
            Stat::Con => self.constitution,
            Stat::Int => self.intelligence,
            Stat::Wis => self.wisdom,
            Stat::Pie => self.piety,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Str => self.strength = value,
            Stat::Dex => self.dexterity = value,
            Stat::Con => self.constitution = value,
            Stat::Int => self.intelligence = value,
            Stat::Wis => self.wisdom = value,
            Stat::Pie => self.piety = value,
        }
    }
}

/// Per-attribute damage weights of a weapon.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatWeights {
    pub strength: f64,
    pub dexterity: f64,
    pub constitution: f64,
    pub intelligence: f64,
    pub wisdom: f64,
    pub piety: f64,
}

impl StatWeights {
    pub const fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Str => self.strength,
            Stat::Dex => self.dexterity,
            Stat::Con => self.constitution,
            Stat::Int => self.intelligence,
            Stat::Wis => self.wisdom,
            Stat::Pie => self.piety,
        }
    }

    pub const fn strength(weight: f64) -> Self {
        Self {
            strength: weight,
            dexterity: 0.0,
            constitution: 0.0,
            intelligence: 0.0,
            wisdom: 0.0,
            piety: 0.0,
        }
    }

    pub const fn with_dexterity(mut self, weight: f64) -> Self {
        self.dexterity = weight;
        self
    }
}

/// Player classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassKind {
    Fighter,
    Knight,
    Paladin,
    Thief,
    Ranger,
    Assassin,
    Monk,
    #[strum(serialize = "Ki Master")]
    KiMaster,
    Mage,
    Wizard,
    Cleric,
    Priest,
    Druid,
    Bard,
}

impl ClassKind {
    /// Attribute used for spell accuracy and spell damage.
    ///
    /// Arcane casters use INT, divine casters PIE, nature and ki users WIS.
    /// Everyone else falls back to INT.
    pub const fn casting_stat(self) -> Stat {
        match self {
            Self::Mage | Self::Wizard => Stat::Int,
            Self::Cleric | Self::Priest | Self::Paladin => Stat::Pie,
            Self::Druid | Self::Monk | Self::KiMaster | Self::Ranger => Stat::Wis,
            _ => Stat::Int,
        }
    }

    /// Monk-archetype classes regenerate Ki faster.
    pub const fn is_ki_user(self) -> bool {
        matches!(self, Self::Monk | Self::KiMaster)
    }
}
