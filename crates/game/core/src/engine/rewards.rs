use crate::env::RngOracle;
use crate::state::Roster;

/// Spoils of a won encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterResult {
    pub xp: u32,
    pub gold: u32,
}

/// Sums XP and draws gold for every defeated enemy, in roster order.
pub fn compute_rewards(roster: &Roster, rng: &mut impl RngOracle) -> EncounterResult {
    let mut result = EncounterResult::default();

    for enemy in roster.iter().filter(|c| c.is_enemy() && !c.is_active()) {
        let Some(profile) = &enemy.enemy else {
            continue;
        };
        let (low, high) = profile.gold_reward;
        let gold = rng.range(low.min(high) as i32, low.max(high) as i32).max(0) as u32;

        result.xp = result.xp.saturating_add(profile.xp_reward);
        result.gold = result.gold.saturating_add(gold);
    }

    tracing::info!(xp = result.xp, gold = result.gold, "encounter rewards");
    result
}
