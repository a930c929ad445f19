//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in an encounter (turn-order tie breaks, hit rolls,
//! crit rolls, damage variance, AI target picks, gold rewards) is drawn from a
//! single [`RngOracle`] owned by the encounter.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed and the
//! same call order, they must produce the same sequence of values. Encounter
//! replay and the state digest depend on this.

use std::collections::VecDeque;

/// RNG oracle for deterministic random number generation.
///
/// Only [`next_u32`](RngOracle::next_u32) is required; every other draw is
/// derived from it so that the consumption order stays predictable.
pub trait RngOracle {
    /// Advance the generator and return the next 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Used for hit, crit and stun checks.
    fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// Uniform integer in `[min, max]` inclusive.
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min) + offset as i64) as i32
    }

    /// Uniform float in `[0, 1]`.
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform float in `[lo, hi]`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick from an empty collection");
        self.range(0, len.saturating_sub(1) as i32) as usize
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn roll_d100(&mut self) -> u32 {
        (**self).roll_d100()
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        (**self).range(min, max)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform(lo, hi)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. Same seed, same sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    ///
    /// The seed is stepped once so that small seeds do not start the stream
    /// from a degenerate state.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Scripted RNG for tests and replays of hand-authored situations.
///
/// - d100 rolls are served from a queue, then from a fixed fallback.
/// - `uniform` returns a fixed variance clamped into the requested bounds.
/// - `range` is served from its own queue (clamped into bounds), then `min`.
/// - raw `next_u32` draws return zero, so turn-order ties fall back to
///   roster order.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    d100: VecDeque<u32>,
    fallback_d100: u32,
    ranges: VecDeque<i32>,
    variance: f64,
    d100_consumed: usize,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self {
            d100: VecDeque::new(),
            fallback_d100: 50,
            ranges: VecDeque::new(),
            variance: 1.0,
            d100_consumed: 0,
        }
    }

    /// Queues d100 results, consumed in order.
    pub fn with_d100(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.d100.extend(rolls);
        self
    }

    /// d100 value returned once the queue is exhausted.
    pub fn with_fallback_d100(mut self, roll: u32) -> Self {
        self.fallback_d100 = roll;
        self
    }

    /// Queues integer range results, consumed in order.
    pub fn with_ranges(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.ranges.extend(values);
        self
    }

    /// Fixed value returned by every `uniform` draw.
    pub fn with_variance(mut self, variance: f64) -> Self {
        self.variance = variance;
        self
    }

    /// Number of d100 rolls taken so far.
    pub fn d100_consumed(&self) -> usize {
        self.d100_consumed
    }
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn roll_d100(&mut self) -> u32 {
        self.d100_consumed += 1;
        self.d100.pop_front().unwrap_or(self.fallback_d100)
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        match self.ranges.pop_front() {
            Some(value) if min < max => value.clamp(min, max),
            _ => min,
        }
    }

    fn unit(&mut self) -> f64 {
        0.0
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.variance.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRng::seeded(42);
        let mut b = PcgRng::seeded(42);
        let mut c = PcgRng::seeded(43);

        let left: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let right: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        let other: Vec<u32> = (0..16).map(|_| c.next_u32()).collect();

        assert_eq!(left, right);
        assert_ne!(left, other);
    }

    #[test]
    fn derived_draws_stay_in_bounds() {
        let mut rng = PcgRng::seeded(7);
        for _ in 0..1_000 {
            let d = rng.roll_d100();
            assert!((1..=100).contains(&d));

            let r = rng.range(-3, 4);
            assert!((-3..=4).contains(&r));

            let v = rng.uniform(0.85, 1.15);
            assert!((0.85..=1.15).contains(&v));
        }
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(9, 2), 9);
    }

    #[test]
    fn scripted_rng_serves_queue_then_fallback() {
        let mut rng = ScriptedRng::new()
            .with_d100([1, 100])
            .with_fallback_d100(77)
            .with_ranges([10, 3])
            .with_variance(2.0);

        assert_eq!(rng.roll_d100(), 1);
        assert_eq!(rng.roll_d100(), 100);
        assert_eq!(rng.roll_d100(), 77);
        assert_eq!(rng.d100_consumed(), 3);

        assert_eq!(rng.range(0, 5), 5);
        assert_eq!(rng.range(0, 5), 3);
        assert_eq!(rng.range(0, 5), 0);
        assert_eq!(rng.uniform(0.9, 1.1), 1.1);
    }
}
