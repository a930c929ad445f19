//! Critical hit evaluation.
//!
//! Crit chance and payoff depend on a class bucket:
//!
//! | bucket    | classes                | chance bonus    | multiplier          | extra              |
//! |-----------|------------------------|-----------------|---------------------|--------------------|
//! | precision | Thief, Ranger, Assassin| DEX / 8         | 1.5 (2.0 Thief/Asn) |                    |
//! | power     | Fighter, Knight        | STR / 10        | 1.5                 | ignore 50% defense |
//! | ki        | Monk, Ki Master        | WIS / 8         | 1.75                |                    |
//! | spell     | any caster             | casting / 10    | 1.5                 |                    |
//! | heal      | any healer             | PIE / 10        | 1.5                 |                    |
//! | other     |                        | 0               | 1.5                 |                    |
//!
//! Enemies never crit.

use crate::config::CombatConfig;
use crate::env::RngOracle;
use crate::state::{ClassKind, Combatant, Stat};

/// What kind of action is asking for a crit roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Physical,
    Spell,
    Heal,
}

/// Payoff of a successful critical hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CritData {
    pub multiplier: f64,
    /// Fraction of the defender's defense ignored.
    pub ignore_defense: Option<f64>,
}

impl CritData {
    const STANDARD: Self = Self {
        multiplier: 1.5,
        ignore_defense: None,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CritBucket {
    Precision,
    Power,
    Ki,
    Spell,
    Heal,
    Other,
}

fn bucket(attacker: &Combatant, kind: AttackKind) -> CritBucket {
    match kind {
        AttackKind::Spell => CritBucket::Spell,
        AttackKind::Heal => CritBucket::Heal,
        AttackKind::Physical => match attacker.class {
            Some(ClassKind::Thief | ClassKind::Ranger | ClassKind::Assassin) => {
                CritBucket::Precision
            }
            Some(ClassKind::Fighter | ClassKind::Knight) => CritBucket::Power,
            Some(ClassKind::Monk | ClassKind::KiMaster) => CritBucket::Ki,
            _ => CritBucket::Other,
        },
    }
}

/// Crit chance in percent, before flooring.
///
/// Physical attacks add the weapon family bonus and the weapon's own crit
/// modifier. `bonus` carries an ability's `bonus_crit`.
pub fn crit_chance(attacker: &Combatant, kind: AttackKind, bonus: f64, config: &CombatConfig) -> f64 {
    let stat = |s: Stat| f64::from(attacker.stat(s));
    let bucket_bonus = match bucket(attacker, kind) {
        CritBucket::Precision => stat(Stat::Dex) / 8.0,
        CritBucket::Power => stat(Stat::Str) / 10.0,
        CritBucket::Ki => stat(Stat::Wis) / 8.0,
        CritBucket::Spell => f64::from(attacker.casting_stat()) / 10.0,
        CritBucket::Heal => stat(Stat::Pie) / 10.0,
        CritBucket::Other => 0.0,
    };

    let weapon_bonus = match kind {
        AttackKind::Physical => attacker.weapon.weapon_type.crit_bonus() + attacker.weapon.crit_mod,
        AttackKind::Spell | AttackKind::Heal => 0.0,
    };

    config.base_crit_chance + bucket_bonus + weapon_bonus + bonus
}

/// Payoff a crit would have for this attacker and action kind.
pub fn crit_data(attacker: &Combatant, kind: AttackKind) -> CritData {
    match bucket(attacker, kind) {
        CritBucket::Precision => CritData {
            multiplier: match attacker.class {
                Some(ClassKind::Thief | ClassKind::Assassin) => 2.0,
                _ => 1.5,
            },
            ignore_defense: None,
        },
        CritBucket::Power => CritData {
            multiplier: 1.5,
            ignore_defense: Some(0.5),
        },
        CritBucket::Ki => CritData {
            multiplier: 1.75,
            ignore_defense: None,
        },
        CritBucket::Spell | CritBucket::Heal | CritBucket::Other => CritData::STANDARD,
    }
}

/// Rolls for a critical hit.
///
/// Enemies return `None` without consuming a roll. Everyone else rolls a
/// d100 and crits when the roll is at or under the floored chance.
pub fn check_crit(
    attacker: &Combatant,
    kind: AttackKind,
    bonus: f64,
    config: &CombatConfig,
    rng: &mut impl RngOracle,
) -> Option<CritData> {
    if attacker.is_enemy() {
        return None;
    }

    let chance = crit_chance(attacker, kind, bonus, config).floor();
    let roll = rng.roll_d100();
    tracing::debug!(attacker = %attacker.name, ?kind, chance, roll, "crit roll");

    (f64::from(roll) <= chance).then(|| crit_data(attacker, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{CombatantKind, StatBlock, Weapon, WeaponType};

    fn player(class: ClassKind, stats: StatBlock) -> Combatant {
        Combatant::builder("Hero", CombatantKind::Player)
            .class(class)
            .stats(stats)
            .build()
    }

    #[test]
    fn buckets_scale_with_their_stat() {
        let config = CombatConfig::default();
        let mut thief = player(ClassKind::Thief, StatBlock::new(10, 16, 10, 10, 10, 10));
        let mut dagger = Weapon::unarmed();
        dagger.weapon_type = WeaponType::Dagger;
        dagger.crit_mod = 1.0;
        thief.weapon = dagger;

        // 5 + 16/8 + 5 (dagger) + 1 (weapon) + 2 (ability)
        assert_eq!(crit_chance(&thief, AttackKind::Physical, 2.0, &config), 15.0);
        assert_eq!(crit_data(&thief, AttackKind::Physical).multiplier, 2.0);

        let fighter = player(ClassKind::Fighter, StatBlock::new(14, 10, 10, 10, 10, 10));
        let chance = crit_chance(&fighter, AttackKind::Physical, 0.0, &config);
        assert!((chance - 6.4).abs() < 1e-9);
        assert_eq!(
            crit_data(&fighter, AttackKind::Physical).ignore_defense,
            Some(0.5)
        );

        let priest = player(ClassKind::Priest, StatBlock::new(8, 8, 8, 8, 8, 20));
        assert_eq!(crit_chance(&priest, AttackKind::Heal, 0.0, &config), 7.0);
        // weapon bonuses never apply to spells
        assert_eq!(crit_chance(&thief, AttackKind::Spell, 0.0, &config), 6.0);
    }

    #[test]
    fn roll_compares_against_floored_chance() {
        let config = CombatConfig::default();
        let fighter = player(ClassKind::Fighter, StatBlock::new(14, 10, 10, 10, 10, 10));

        let mut rng = ScriptedRng::new().with_d100([6, 7]);
        assert!(check_crit(&fighter, AttackKind::Physical, 0.0, &config, &mut rng).is_some());
        assert!(check_crit(&fighter, AttackKind::Physical, 0.0, &config, &mut rng).is_none());
    }

    #[test]
    fn enemies_never_crit_and_never_roll() {
        let config = CombatConfig::default();
        let orc = Combatant::builder("Orc", CombatantKind::Enemy).build();
        let mut rng = ScriptedRng::new().with_fallback_d100(1);

        assert!(check_crit(&orc, AttackKind::Physical, 100.0, &config, &mut rng).is_none());
        assert_eq!(rng.d100_consumed(), 0);
    }
}
