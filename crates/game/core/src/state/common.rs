use std::fmt;

/// Stable handle of a combatant inside a [`Roster`](super::Roster).
///
/// Ids are arena indices assigned at roster construction and never reused
/// during an encounter, so turn orders can hold them across deaths and
/// revivals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl CombatantId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of the battle a combatant fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantKind {
    Player,
    Enemy,
}

impl CombatantKind {
    #[inline]
    pub const fn opposes(self, other: Self) -> bool {
        !matches!(
            (self, other),
            (Self::Player, Self::Player) | (Self::Enemy, Self::Enemy)
        )
    }
}

/// Formation row.
///
/// Rows drive the position modifier lookup and melee target preference.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Row {
    #[default]
    Front,
    Mid,
    Back,
}

impl Row {
    /// Mid and Back rows are reachable by row-piercing attacks.
    #[inline]
    pub const fn is_rear(self) -> bool {
        matches!(self, Self::Mid | Self::Back)
    }
}
