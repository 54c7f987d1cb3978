//! Knockout-aware candidate lookup over a generated sequence.

use std::collections::HashSet;

use crate::sequence::{Slot, SlotKind};

/// Label returned when a full lap finds only knocked-out enemies.
///
/// Unreachable with the shipped round patterns (every round contains a
/// creep and a fatebox) but kept as a safety branch for pattern changes.
pub const NO_OPPONENT_LABEL: &str = "No opponent available";

/// Result of a candidate lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Human-readable label of the selected slot, `None` when the
    /// sequence is empty.
    pub label: Option<String>,
    /// Index to start the following lookup from.
    pub next_index: usize,
}

/// Find the next eligible slot starting at `start_index`.
///
/// Scans at most one full lap, advancing by one modulo the sequence
/// length. Creep and fatebox slots always stop the scan; enemy slots
/// stop it only when their occupant is not in `knockouts`. On a hit the
/// returned `next_index` is one past the selected slot (modulo length).
/// If the lap completes with no eligible slot, the label is
/// [`NO_OPPONENT_LABEL`] and `next_index` is `start_index` unchanged.
///
/// Pure: identical inputs always produce an identical result.
pub fn find_next(start_index: usize, sequence: &[Slot], knockouts: &HashSet<String>) -> Candidate {
    if sequence.is_empty() {
        return Candidate {
            label: None,
            next_index: start_index,
        };
    }

    let len = sequence.len();
    let mut i = start_index % len;
    for _ in 0..len {
        let slot = &sequence[i];
        let eligible = match slot.kind {
            SlotKind::Creep | SlotKind::Fatebox => true,
            SlotKind::Enemy => slot
                .occupant
                .as_ref()
                .map_or(true, |name| !knockouts.contains(name)),
        };
        if eligible {
            return Candidate {
                label: Some(slot.label()),
                next_index: (i + 1) % len,
            };
        }
        i = (i + 1) % len;
    }

    Candidate {
        label: Some(NO_OPPONENT_LABEL.to_string()),
        next_index: start_index,
    }
}
