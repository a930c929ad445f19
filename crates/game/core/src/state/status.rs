//! Status effect system for combatants.
//!
//! Two clocks drive effects:
//!
//! - **Rounds**: buffs, debuffs and incapacitation count down once per combat
//!   round boundary ([`StatusEffects::tick_round`]).
//! - **Steps**: poison and curses count exploration steps
//!   ([`StatusEffects::tick_step`]) and are left alone by the round ticker.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;

/// Poison strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoisonTier {
    Weak,
    Moderate,
    Strong,
    Deadly,
}

impl PoisonTier {
    /// (damage per tick, total ticks, steps between ticks)
    pub const fn profile(self) -> (i32, u32, u32) {
        match self {
            Self::Weak => (4, 4, 3),
            Self::Moderate => (6, 5, 3),
            Self::Strong => (9, 6, 2),
            Self::Deadly => (14, 8, 2),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurseKind {
    /// Raw physical damage reduced by the magnitude.
    Weakness,
    /// Defense reduced by the magnitude.
    Frailty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuffKind {
    Hasted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebuffKind {
    Slowed,
    Frostbitten,
    Burning,
    Shocked,
    Blinded,
}

/// Conditions that force a skipped turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum IncapacitateKind {
    Stunned,
    Frozen,
    Petrified,
}

/// A single active status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffect {
    Poison {
        tier: PoisonTier,
        damage: i32,
        ticks_remaining: u32,
        steps_between_ticks: u32,
        steps_until_tick: u32,
    },
    Curse {
        kind: CurseKind,
        magnitude: i32,
        steps_remaining: u32,
    },
    Buff {
        kind: BuffKind,
        rounds: u32,
    },
    Debuff {
        kind: DebuffKind,
        rounds: u32,
    },
    Incapacitate {
        kind: IncapacitateKind,
        /// Turns still to be lost.
        rounds: u32,
    },
}

impl StatusEffect {
    /// Fresh poison of the given tier.
    pub const fn poison(tier: PoisonTier) -> Self {
        let (damage, ticks, every) = tier.profile();
        Self::Poison {
            tier,
            damage,
            ticks_remaining: ticks,
            steps_between_ticks: every,
            steps_until_tick: every,
        }
    }

    pub const fn stun(rounds: u32) -> Self {
        Self::Incapacitate {
            kind: IncapacitateKind::Stunned,
            rounds,
        }
    }

    /// Human-readable label for log lines.
    pub fn label(&self) -> String {
        match self {
            Self::Poison { tier, .. } => format!("{tier} Poison"),
            Self::Curse { kind, .. } => format!("Curse of {kind}"),
            Self::Buff { kind, .. } => kind.to_string(),
            Self::Debuff { kind, .. } => kind.to_string(),
            Self::Incapacitate { kind, .. } => kind.to_string(),
        }
    }

    /// Two effects share a slot when they are the same variant and kind;
    /// adding one replaces the other.
    fn same_slot(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Poison { .. }, Self::Poison { .. }) => true,
            (Self::Curse { kind: a, .. }, Self::Curse { kind: b, .. }) => a == b,
            (Self::Buff { kind: a, .. }, Self::Buff { kind: b, .. }) => a == b,
            (Self::Debuff { kind: a, .. }, Self::Debuff { kind: b, .. }) => a == b,
            (Self::Incapacitate { kind: a, .. }, Self::Incapacitate { kind: b, .. }) => a == b,
            _ => false,
        }
    }

    fn speed_multiplier(&self) -> f64 {
        match self {
            Self::Buff {
                kind: BuffKind::Hasted,
                ..
            } => 1.5,
            Self::Debuff {
                kind: DebuffKind::Slowed,
                ..
            } => 0.75,
            Self::Debuff {
                kind: DebuffKind::Frostbitten,
                ..
            } => 0.5,
            Self::Incapacitate { .. } => 0.0,
            _ => 1.0,
        }
    }

    fn accuracy_penalty(&self) -> i32 {
        match self {
            Self::Poison { .. } => 5,
            Self::Debuff { kind, .. } => match kind {
                DebuffKind::Burning | DebuffKind::Frostbitten => 5,
                DebuffKind::Shocked => 10,
                DebuffKind::Blinded => 30,
                DebuffKind::Slowed => 0,
            },
            _ => 0,
        }
    }
}

/// Result of advancing step-based effects by one exploration step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepTick {
    /// Poison damage dealt this step.
    pub damage: i32,
    /// Effects that ran out this step.
    pub expired: Vec<StatusEffect>,
}

/// Ordered, bounded list of active effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Adds an effect, replacing any effect in the same slot.
    ///
    /// Returns false when the list is full and the effect was dropped.
    pub fn add(&mut self, effect: StatusEffect) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.same_slot(&effect)) {
            *existing = effect;
            return true;
        }
        self.effects.try_push(effect).is_ok()
    }

    pub fn remove_where(&mut self, predicate: impl Fn(&StatusEffect) -> bool) -> usize {
        let before = self.effects.len();
        self.effects.retain(|e| !predicate(e));
        before - self.effects.len()
    }

    /// Removes poison, curses and debuffs. Returns how many were removed.
    pub fn cure(&mut self) -> usize {
        self.remove_where(|e| {
            matches!(
                e,
                StatusEffect::Poison { .. } | StatusEffect::Curse { .. } | StatusEffect::Debuff { .. }
            )
        })
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// The first incapacitating condition, if any.
    pub fn incapacitation(&self) -> Option<IncapacitateKind> {
        self.effects.iter().find_map(|e| match e {
            StatusEffect::Incapacitate { kind, .. } => Some(*kind),
            _ => None,
        })
    }

    /// Charges one lost turn to the first incapacitating effect.
    ///
    /// Returns the effect if that was its last turn.
    pub fn spend_incapacitation(&mut self) -> Option<StatusEffect> {
        let index = self
            .effects
            .iter()
            .position(|e| matches!(e, StatusEffect::Incapacitate { .. }))?;
        if let StatusEffect::Incapacitate { rounds, .. } = &mut self.effects[index] {
            *rounds = rounds.saturating_sub(1);
            if *rounds > 0 {
                return None;
            }
        }
        Some(self.effects.remove(index))
    }

    pub fn is_poisoned(&self) -> bool {
        self.effects
            .iter()
            .any(|e| matches!(e, StatusEffect::Poison { .. }))
    }

    /// Product of all speed multipliers.
    pub fn speed_multiplier(&self) -> f64 {
        self.effects.iter().map(StatusEffect::speed_multiplier).product()
    }

    /// Sum of accuracy penalties, as a positive number.
    pub fn accuracy_penalty(&self) -> i32 {
        self.effects.iter().map(StatusEffect::accuracy_penalty).sum()
    }

    /// Total magnitude of active curses of one kind.
    pub fn curse_magnitude(&self, curse: CurseKind) -> i32 {
        self.effects
            .iter()
            .filter_map(|e| match e {
                StatusEffect::Curse {
                    kind, magnitude, ..
                } if *kind == curse => Some(*magnitude),
                _ => None,
            })
            .sum()
    }

    /// Counts down buffs and debuffs once, removing those that reach zero.
    ///
    /// Incapacitation is not touched here; it counts down in turns lost
    /// (see [`Self::spend_incapacitation`]). Returns the effects that expired.
    pub fn tick_round(&mut self) -> Vec<StatusEffect> {
        let mut expired = Vec::new();
        self.effects.retain(|effect| {
            let rounds = match effect {
                StatusEffect::Buff { rounds, .. } | StatusEffect::Debuff { rounds, .. } => rounds,
                _ => return true,
            };
            *rounds = rounds.saturating_sub(1);
            if *rounds == 0 {
                expired.push(*effect);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Advances step-based effects by one exploration step.
    ///
    /// Poison deals its damage every `steps_between_ticks` steps and expires
    /// after its last tick; curses expire when their step timer runs out.
    pub fn tick_step(&mut self) -> StepTick {
        let mut tick = StepTick::default();
        self.effects.retain(|effect| match effect {
            StatusEffect::Poison {
                damage,
                ticks_remaining,
                steps_between_ticks,
                steps_until_tick,
                ..
            } => {
                *steps_until_tick = steps_until_tick.saturating_sub(1);
                if *steps_until_tick == 0 {
                    tick.damage += *damage;
                    *ticks_remaining = ticks_remaining.saturating_sub(1);
                    *steps_until_tick = (*steps_between_ticks).max(1);
                }
                if *ticks_remaining == 0 {
                    tick.expired.push(*effect);
                    false
                } else {
                    true
                }
            }
            StatusEffect::Curse {
                steps_remaining, ..
            } => {
                *steps_remaining = steps_remaining.saturating_sub(1);
                if *steps_remaining == 0 {
                    tick.expired.push(*effect);
                    false
                } else {
                    true
                }
            }
            _ => true,
        });
        tick
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
