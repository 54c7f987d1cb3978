//! Round sequence generation.
//!
//! A match is a series of rounds, each following a fixed slot pattern.
//! Round 1 is shorter than the rest; every later round repeats the same
//! seven-slot shape. Enemy slots are filled from the roster in strict
//! round-robin order across round boundaries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a slot within the sequence, displayed as
/// `"<round>.<position>"` (e.g. `2.6` is the sixth slot of round 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId {
    pub round: u32,
    /// 1-based position within the round's pattern.
    pub position: u32,
}

impl SlotId {
    pub const fn new(round: u32, position: u32) -> Self {
        Self { round, position }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.round, self.position)
    }
}

/// What a slot pits the player against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// A neutral monster wave.
    Creep,
    /// Another rostered player.
    Enemy,
    /// A loot round.
    Fatebox,
}

/// One position in the generated sequence.
///
/// `occupant` is `Some` exactly when `kind` is [`SlotKind::Enemy`]; the
/// constructors maintain this pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    pub kind: SlotKind,
    pub occupant: Option<String>,
}

impl Slot {
    pub fn creep(id: SlotId) -> Self {
        Self {
            id,
            kind: SlotKind::Creep,
            occupant: None,
        }
    }

    pub fn enemy(id: SlotId, occupant: String) -> Self {
        Self {
            id,
            kind: SlotKind::Enemy,
            occupant: Some(occupant),
        }
    }

    pub fn fatebox(id: SlotId) -> Self {
        Self {
            id,
            kind: SlotKind::Fatebox,
            occupant: None,
        }
    }

    /// Human-readable rendering of this slot, e.g. `"2.6 — A"` or
    /// `"1.1 — Creep (Monster)"`.
    pub fn label(&self) -> String {
        match self.kind {
            SlotKind::Creep => format!("{} — Creep (Monster)", self.id),
            SlotKind::Fatebox => format!("{} — Fatebox", self.id),
            SlotKind::Enemy => match &self.occupant {
                Some(name) => format!("{} — {}", self.id, name),
                None => self.id.to_string(),
            },
        }
    }
}

/// Slot pattern for round 1 (`1.1`..`1.5`).
pub const OPENING_PATTERN: &[SlotKind] = &[
    SlotKind::Creep,
    SlotKind::Enemy,
    SlotKind::Enemy,
    SlotKind::Enemy,
    SlotKind::Fatebox,
];

/// Slot pattern for round 2 and every round after (`<round>.1`..`<round>.7`).
pub const REPEATING_PATTERN: &[SlotKind] = &[
    SlotKind::Enemy,
    SlotKind::Enemy,
    SlotKind::Creep,
    SlotKind::Enemy,
    SlotKind::Enemy,
    SlotKind::Enemy,
    SlotKind::Fatebox,
];

/// Generate the round sequence for the given roster names.
///
/// Enemy slots are assigned from `names` round-robin, starting at
/// `names[0]` and wrapping, with the running index carried across round
/// boundaries. Generation stops at `max_slots`, truncating the final
/// round's pattern if needed. Deterministic: identical inputs always
/// yield an identical sequence. An empty `names` yields an empty
/// sequence.
pub fn generate(names: &[String], max_slots: usize) -> Vec<Slot> {
    if names.is_empty() {
        return Vec::new();
    }

    let mut sequence = Vec::with_capacity(max_slots);
    let mut roster_cursor = 0usize;
    let mut round = 1u32;

    while sequence.len() < max_slots {
        let pattern = if round == 1 {
            OPENING_PATTERN
        } else {
            REPEATING_PATTERN
        };
        for (position, kind) in pattern.iter().enumerate() {
            if sequence.len() == max_slots {
                break;
            }
            let id = SlotId::new(round, position as u32 + 1);
            let slot = match kind {
                SlotKind::Enemy => {
                    let name = names[roster_cursor % names.len()].clone();
                    roster_cursor = (roster_cursor + 1) % names.len();
                    Slot::enemy(id, name)
                }
                SlotKind::Creep => Slot::creep(id),
                SlotKind::Fatebox => Slot::fatebox(id),
            };
            sequence.push(slot);
        }
        round += 1;
    }

    sequence
}
