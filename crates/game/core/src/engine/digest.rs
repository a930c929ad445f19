//! SHA-256 fingerprint of encounter state, used to compare replays.

use sha2::{Digest, Sha256};

use crate::state::{Combatant, Roster};

use super::EncounterPhase;

/// Hashes everything a replay must reproduce.
///
/// Fields are fed in a fixed order as little-endian integers, so the digest
/// does not depend on serde being enabled.
pub fn state_digest(round: u32, phase: EncounterPhase, roster: &Roster, log_len: usize) -> [u8; 32] {
    let mut hasher = Sha256::new();

    hasher.update(round.to_le_bytes());
    hasher.update(phase_tag(phase));
    for combatant in roster.iter() {
        hash_combatant(&mut hasher, combatant);
    }
    hasher.update((log_len as u64).to_le_bytes());

    hasher.finalize().into()
}

fn phase_tag(phase: EncounterPhase) -> [u8; 5] {
    let (tag, id) = match phase {
        EncounterPhase::PlayerTurn(id) => (0u8, id.0),
        EncounterPhase::EnemyTurn(id) => (1, id.0),
        EncounterPhase::Victory => (2, 0),
        EncounterPhase::Defeat => (3, 0),
    };
    let id = id.to_le_bytes();
    [tag, id[0], id[1], id[2], id[3]]
}

fn hash_combatant(hasher: &mut Sha256, combatant: &Combatant) {
    hasher.update(combatant.id.0.to_le_bytes());
    hasher.update(combatant.hp.to_le_bytes());
    hasher.update([
        u8::from(combatant.alive),
        u8::from(combatant.is_defending),
        combatant.row as u8,
        combatant.status.len() as u8,
    ]);
    for (kind, pool) in combatant.pools.iter() {
        hasher.update([kind as u8]);
        hasher.update(pool.current.to_le_bytes());
        hasher.update(pool.max.to_le_bytes());
    }
}
