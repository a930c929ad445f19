//! Injected environment for combat resolution.
//!
//! Encounters never reach for ambient randomness: the RNG is handed in at
//! construction and threaded through every resolver.
mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
