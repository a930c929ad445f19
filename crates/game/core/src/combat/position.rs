//! Row-based position modifiers.
//!
//! Each weapon range class has its own table mapping
//! (attacker row, defender row) to a damage multiplier and an accuracy delta.
//! Spells ignore formation entirely.

use crate::state::{Row, WeaponRange};

/// Damage multiplier and accuracy delta for one row pairing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionModifier {
    pub damage: f64,
    pub accuracy: i32,
}

impl PositionModifier {
    pub const NEUTRAL: Self = Self::new(1.0, 0);

    pub const fn new(damage: f64, accuracy: i32) -> Self {
        Self { damage, accuracy }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionEntry {
    pub attacker: Row,
    pub defender: Row,
    pub damage: f64,
    pub accuracy: i32,
}

/// Table for one range class. Pairings without an entry use `fallback`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeTable {
    pub fallback: PositionModifier,
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: Vec<PositionEntry>,
}

impl RangeTable {
    /// Builds a table from a 3×3 grid indexed `[attacker][defender]` in
    /// Front, Mid, Back order.
    fn from_grid(grid: [[(f64, i32); 3]; 3], fallback: PositionModifier) -> Self {
        const ROWS: [Row; 3] = [Row::Front, Row::Mid, Row::Back];
        let mut entries = Vec::with_capacity(9);
        for (attacker, line) in ROWS.into_iter().zip(grid) {
            for (defender, (damage, accuracy)) in ROWS.into_iter().zip(line) {
                entries.push(PositionEntry {
                    attacker,
                    defender,
                    damage,
                    accuracy,
                });
            }
        }
        Self { fallback, entries }
    }

    pub fn lookup(&self, attacker: Row, defender: Row) -> PositionModifier {
        self.entries
            .iter()
            .find(|e| e.attacker == attacker && e.defender == defender)
            .map_or(self.fallback, |e| PositionModifier::new(e.damage, e.accuracy))
    }
}

/// Position tables for every physical range class.
///
/// Deserializing fills any missing range class from the built-in tables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PositionTables {
    pub melee: RangeTable,
    pub reach: RangeTable,
    pub ranged: RangeTable,
    pub thrown: RangeTable,
}

impl PositionTables {
    pub fn new() -> Self {
        Self {
            melee: RangeTable::from_grid(
                [
                    [(1.0, 0), (0.85, -5), (0.7, -10)],
                    [(0.85, -5), (0.7, -10), (0.55, -15)],
                    [(0.6, -15), (0.5, -20), (0.4, -25)],
                ],
                PositionModifier::new(0.5, -20),
            ),
            reach: RangeTable::from_grid(
                [
                    [(1.0, 0), (1.0, 0), (0.8, -5)],
                    [(1.0, 0), (0.85, -5), (0.7, -10)],
                    [(0.7, -10), (0.6, -15), (0.5, -20)],
                ],
                PositionModifier::new(0.7, -10),
            ),
            ranged: RangeTable::from_grid(
                [
                    [(0.85, -5), (0.95, 0), (1.0, 0)],
                    [(1.0, 0), (1.0, 0), (1.0, 0)],
                    [(1.0, 5), (1.0, 5), (1.0, 5)],
                ],
                PositionModifier::NEUTRAL,
            ),
            thrown: RangeTable::from_grid(
                [
                    [(1.0, 0), (0.9, 0), (0.75, -10)],
                    [(0.95, 0), (0.85, -5), (0.7, -10)],
                    [(0.8, -5), (0.7, -10), (0.6, -15)],
                ],
                PositionModifier::new(0.8, -5),
            ),
        }
    }

    /// Looks up the modifier for an attack. Spells always get the neutral
    /// modifier.
    pub fn modifier(&self, range: WeaponRange, attacker: Row, defender: Row) -> PositionModifier {
        let table = match range {
            WeaponRange::Melee => &self.melee,
            WeaponRange::Reach => &self.reach,
            WeaponRange::Ranged => &self.ranged,
            WeaponRange::Thrown => &self.thrown,
            WeaponRange::Spell => return PositionModifier::NEUTRAL,
        };
        table.lookup(attacker, defender)
    }
}

impl Default for PositionTables {
    fn default() -> Self {
        Self::new()
    }
}
