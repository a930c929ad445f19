//! Headless encounter runner.
//!
//! # Architecture
//!
//! ```text
//! skirmish (composition root)
//!   ├─→ combat-content (data files, party bridge)
//!   ├─→ combat-core (encounter state machine)
//!   └─→ pilot (automatic choices for party members)
//! ```
//!
//! The binary loads a data directory, fights one encounter with every party
//! member on autopilot, writes the results back onto the party and
//! optionally saves it.

pub mod config;
pub mod pilot;
mod runner;

pub use config::SimConfig;
pub use runner::{SkirmishReport, run};
