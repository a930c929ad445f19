//! Non-HP resource pools.
//!
//! HP lives on the combatant as the `hp`/`max_hp` pair; the pools here are the
//! class-specific currencies abilities are paid with.

use std::collections::BTreeMap;

use super::Stat;

/// Resource pool kinds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    #[strum(serialize = "STR-SP")]
    StrSp,
    #[strum(serialize = "DEX-SP")]
    DexSp,
    #[strum(serialize = "INT-MP")]
    IntMp,
    #[strum(serialize = "WIS-MP")]
    WisMp,
    #[strum(serialize = "PIE-MP")]
    PieMp,
    Ki,
}

impl ResourceKind {
    /// Attribute that drives regeneration of this pool.
    pub const fn governing_stat(self) -> Stat {
        match self {
            Self::StrSp => Stat::Str,
            Self::DexSp => Stat::Dex,
            Self::IntMp => Stat::Int,
            Self::WisMp | Self::Ki => Stat::Wis,
            Self::PieMp => Stat::Pie,
        }
    }

    /// Abilities paid from a magic pool resolve as spells.
    pub const fn is_magic(self) -> bool {
        matches!(self, Self::IntMp | Self::WisMp | Self::PieMp)
    }
}

/// A bounded integer meter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pool {
    pub current: i32,
    pub max: i32,
}

impl Pool {
    pub const fn new(current: i32, max: i32) -> Self {
        Self { current, max }
    }

    pub const fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Adds `amount`, clamped to the maximum. Returns the amount gained.
    pub fn restore(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = (self.current + amount.max(0)).min(self.max).max(before);
        self.current - before
    }
}

/// Resource pools keyed by kind, iterated in a fixed order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResourcePools {
    pools: BTreeMap<ResourceKind, Pool>,
}

impl ResourcePools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: ResourceKind, pool: Pool) -> Self {
        self.insert(kind, pool);
        self
    }

    pub fn insert(&mut self, kind: ResourceKind, pool: Pool) {
        self.pools.insert(kind, pool);
    }

    pub fn get(&self, kind: ResourceKind) -> Option<&Pool> {
        self.pools.get(&kind)
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> Option<&mut Pool> {
        self.pools.get_mut(&kind)
    }

    /// Current value, or zero when the pool does not exist.
    pub fn current(&self, kind: ResourceKind) -> i32 {
        self.pools.get(&kind).map_or(0, |pool| pool.current)
    }

    /// Deducts `cost` if affordable. Returns false and leaves the pool
    /// untouched otherwise.
    pub fn try_spend(&mut self, kind: ResourceKind, cost: i32) -> bool {
        match self.pools.get_mut(&kind) {
            Some(pool) if pool.current >= cost => {
                pool.current -= cost;
                true
            }
            _ => cost <= 0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &Pool)> {
        self.pools.iter().map(|(kind, pool)| (*kind, pool))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ResourceKind, &mut Pool)> {
        self.pools.iter_mut().map(|(kind, pool)| (*kind, pool))
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_refuses_without_touching_pool() {
        let mut pools = ResourcePools::new().with(ResourceKind::IntMp, Pool::new(8, 20));

        assert!(!pools.try_spend(ResourceKind::IntMp, 10));
        assert_eq!(pools.current(ResourceKind::IntMp), 8);

        assert!(pools.try_spend(ResourceKind::IntMp, 8));
        assert_eq!(pools.current(ResourceKind::IntMp), 0);

        assert!(!pools.try_spend(ResourceKind::Ki, 1));
        assert_eq!(pools.current(ResourceKind::Ki), 0);
    }

    #[test]
    fn restore_clamps_to_max() {
        let mut pool = Pool::new(18, 20);
        assert_eq!(pool.restore(5), 2);
        assert_eq!(pool.current, 20);
        assert_eq!(pool.restore(5), 0);
    }
}
