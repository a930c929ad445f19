//! Skirmish runner binary.
//!
//! # Examples
//!
//! ```bash
//! SKIRMISH_SEED=42 SKIRMISH_ENCOUNTER=crypt_gate cargo run -p skirmish
//!
//! # Save the party after the fight and show roll-level logs
//! SKIRMISH_PARTY_OUT=target/party RUST_LOG=combat_core=debug cargo run -p skirmish
//! ```

use anyhow::Result;
use combat_core::EncounterPhase;
use skirmish::SimConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    tracing::debug!(?config, "loaded runner configuration");

    let report = skirmish::run(&config)?;

    println!("== {} ==", report.encounter);
    for line in &report.log {
        println!("{line}");
    }
    println!();
    match (report.outcome, report.result) {
        (EncounterPhase::Victory, Some(result)) => println!(
            "Victory in {} rounds: {} XP, {} gold.",
            report.rounds, result.xp, result.gold
        ),
        (outcome, _) => println!("Encounter ended in {outcome} after {} rounds.", report.rounds),
    }
    for character in &report.party {
        println!(
            "  {:<10} {:>3}/{:<3} HP",
            character.name, character.hp, character.max_hp
        );
    }
    println!("digest {}", hex::encode(report.digest));

    Ok(())
}
