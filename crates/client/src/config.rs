//! Runner configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one headless skirmish.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Directory holding `config.toml`, `tables.toml` and the RON content.
    pub data_dir: PathBuf,
    pub seed: u64,
    /// Key into `encounters.ron`.
    pub encounter: String,
    /// Hard stop for runaway fights.
    pub max_turns: usize,
    /// Exploration steps walked after the fight, ticking lingering afflictions.
    pub walk_steps: u32,
    /// Where the updated `party.ron` goes. `None` leaves the party unsaved.
    pub party_out_dir: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/game/content/data"),
            seed: 7,
            encounter: "goblin_ambush".to_string(),
            max_turns: 500,
            walk_steps: 0,
            party_out_dir: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_DATA_DIR` - Content directory (default: crates/game/content/data)
    /// - `SKIRMISH_SEED` - RNG seed (default: 7)
    /// - `SKIRMISH_ENCOUNTER` - Encounter key (default: goblin_ambush)
    /// - `SKIRMISH_MAX_TURNS` - Turn limit before giving up (default: 500)
    /// - `SKIRMISH_WALK_STEPS` - Steps walked after the fight (default: 0)
    /// - `SKIRMISH_PARTY_OUT` - Directory to save the updated party to (optional)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SKIRMISH_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = read_env::<u64>("SKIRMISH_SEED") {
            config.seed = seed;
        }
        if let Ok(encounter) = env::var("SKIRMISH_ENCOUNTER") {
            config.encounter = encounter;
        }
        if let Some(turns) = read_env::<usize>("SKIRMISH_MAX_TURNS") {
            config.max_turns = turns.max(1);
        }
        if let Some(steps) = read_env::<u32>("SKIRMISH_WALK_STEPS") {
            config.walk_steps = steps;
        }
        config.party_out_dir = env::var("SKIRMISH_PARTY_OUT").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
