use super::{Combatant, CombatantId, CombatantKind, Row};

/// Arena of every combatant in an encounter.
///
/// Combatants are never removed; the dead stay in place so ids remain valid.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    pub fn new(combatants: impl IntoIterator<Item = Combatant>) -> Self {
        let mut roster = Self::default();
        for combatant in combatants {
            roster.add(combatant);
        }
        roster
    }

    /// Inserts a combatant and assigns its id.
    pub fn add(&mut self, mut combatant: Combatant) -> CombatantId {
        let id = CombatantId(self.combatants.len() as u32);
        combatant.id = id;
        self.combatants.push(combatant);
        id
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(id.index())
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(id.index())
    }

    pub fn contains(&self, id: CombatantId) -> bool {
        id.index() < self.combatants.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.combatants.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Active combatants of one side, in roster order.
    pub fn active_of(&self, kind: CombatantKind) -> impl Iterator<Item = &Combatant> {
        self.combatants
            .iter()
            .filter(move |c| c.kind == kind && c.is_active())
    }

    pub fn living_players(&self) -> impl Iterator<Item = &Combatant> {
        self.active_of(CombatantKind::Player)
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &Combatant> {
        self.active_of(CombatantKind::Enemy)
    }

    pub fn any_active(&self, kind: CombatantKind) -> bool {
        self.active_of(kind).next().is_some()
    }

    /// Active combatants on `kind`'s side standing in Mid or Back rows.
    pub fn rear_rows_of(&self, kind: CombatantKind) -> impl Iterator<Item = &Combatant> {
        self.active_of(kind).filter(|c| Row::is_rear(c.row))
    }

    /// Consumes the roster, returning combatants in id order.
    pub fn into_inner(self) -> Vec<Combatant> {
        self.combatants
    }
}
