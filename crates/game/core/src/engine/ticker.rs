//! Round-boundary upkeep: defend stance, round-based statuses, regeneration.

use crate::config::CombatConfig;
use crate::state::{Combatant, ResourceKind, Roster};

/// Runs end-of-round upkeep over the whole roster.
///
/// Returns log lines for effects that wore off. HP never regenerates here.
pub fn end_of_round(roster: &mut Roster, config: &CombatConfig) -> Vec<String> {
    let mut messages = Vec::new();

    for combatant in roster.iter_mut().filter(|c| c.is_active()) {
        combatant.is_defending = false;

        for expired in combatant.status.tick_round() {
            messages.push(format!("{}'s {} wears off.", combatant.name, expired.label()));
        }

        if combatant.is_player() {
            regenerate(combatant, config);
        }
    }

    messages
}

/// Restores every non-HP pool.
///
/// # Formula
///
/// ```text
/// gain = floor(governing stat / 4) + floor(max × pct)
/// pct  = ki_regen_percent for Ki on ki users, else regen_percent
/// ```
pub fn regenerate(combatant: &mut Combatant, config: &CombatConfig) {
    let ki_user = combatant.class.is_some_and(|class| class.is_ki_user());
    let stats = combatant.stats;

    for (kind, pool) in combatant.pools.iter_mut() {
        let pct = if kind == ResourceKind::Ki && ki_user {
            config.ki_regen_percent
        } else {
            config.regen_percent
        };
        let gain = stats.get(kind.governing_stat()) / 4 + (f64::from(pool.max) * pct) as i32;
        let restored = pool.restore(gain);
        if restored > 0 {
            tracing::trace!(name = %combatant.name, %kind, restored, "regen");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        ClassKind, CombatantId, CombatantKind, DebuffKind, Pool, ResourcePools, StatBlock,
        StatusEffect,
    };

    fn monk() -> Combatant {
        Combatant::builder("Lin", CombatantKind::Player)
            .class(ClassKind::Monk)
            .stats(StatBlock::new(12, 14, 12, 8, 16, 10))
            .pools(
                ResourcePools::new()
                    .with(ResourceKind::Ki, Pool::new(10, 80))
                    .with(ResourceKind::StrSp, Pool::new(38, 40)),
            )
            .max_hp(30)
            .hp(20)
            .build()
    }

    #[test]
    fn regen_uses_ki_rate_and_clamps() {
        let config = CombatConfig::default();
        let mut roster = Roster::new([monk()]);
        end_of_round(&mut roster, &config);

        let lin = roster.get(CombatantId(0)).map(|c| (c.hp, c.pools.clone()));
        let (hp, pools) = lin.unwrap_or_default();
        // WIS 16 / 4 + floor(80 × 0.0375)
        assert_eq!(pools.current(ResourceKind::Ki), 17);
        // STR 12 / 4 + floor(40 × 0.03) would overshoot
        assert_eq!(pools.current(ResourceKind::StrSp), 40);
        assert_eq!(hp, 20);
    }

    #[test]
    fn enemies_do_not_regenerate_but_do_tick() {
        let config = CombatConfig::default();
        let mut goblin = Combatant::builder("Goblin", CombatantKind::Enemy)
            .pools(ResourcePools::new().with(ResourceKind::IntMp, Pool::new(0, 20)))
            .build();
        goblin.is_defending = true;
        goblin.status.add(StatusEffect::Debuff {
            kind: DebuffKind::Slowed,
            rounds: 1,
        });
        let mut roster = Roster::new([goblin]);

        let messages = end_of_round(&mut roster, &config);
        assert_eq!(messages, vec!["Goblin's Slowed wears off.".to_string()]);

        let goblin = roster.get(CombatantId(0));
        assert_eq!(goblin.map(|g| g.pools.current(ResourceKind::IntMp)), Some(0));
        assert_eq!(goblin.map(|g| g.is_defending), Some(false));
        assert_eq!(goblin.map(|g| g.status.len()), Some(0));
    }

    #[test]
    fn fallen_are_left_alone() {
        let config = CombatConfig::default();
        let mut fallen = monk();
        fallen.hp = 0;
        fallen.alive = false;
        let mut roster = Roster::new([fallen]);
        end_of_round(&mut roster, &config);
        assert_eq!(
            roster
                .get(CombatantId(0))
                .map(|c| c.pools.current(ResourceKind::Ki)),
            Some(10)
        );
    }
}
