//! Session state tying roster, sequence, cursor, and knockouts together.
//!
//! The presentation layer owns the session lifecycle; all mutation goes
//! through the methods here. Sequence contents never change after
//! generation; only the cursor, the knockout set, and the committed
//! label move.

use std::collections::HashSet;

use serde::Serialize;

use crate::roster::Roster;
use crate::rotation::{find_next, Candidate};
use crate::sequence::{generate, Slot, SlotId, SlotKind};

/// Cap on the number of generated slots.
pub const MAX_SLOTS: usize = 500;

/// Slot id where a fresh rotation starts scanning. A fixed business
/// rule; treated as an opaque constant.
pub const START_SLOT: SlotId = SlotId::new(2, 6);

/// Read-only projection of one slot for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySlot {
    pub id: String,
    pub kind: SlotKind,
    pub occupant: Option<String>,
    /// Whether the occupant is currently in the knockout set.
    pub knocked_out: bool,
}

impl DisplaySlot {
    /// Rendering including the `" (KO)"` annotation for knocked-out
    /// occupants.
    pub fn label(&self) -> String {
        let mut label = match (self.kind, &self.occupant) {
            (SlotKind::Creep, _) => format!("{} — Creep (Monster)", self.id),
            (SlotKind::Fatebox, _) => format!("{} — Fatebox", self.id),
            (SlotKind::Enemy, Some(name)) => format!("{} — {}", self.id, name),
            (SlotKind::Enemy, None) => self.id.clone(),
        };
        if self.knocked_out {
            label.push_str(" (KO)");
        }
        label
    }
}

/// One prediction session: a confirmed roster, its generated sequence,
/// and the rotation state.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    sequence: Vec<Slot>,
    cursor: usize,
    knockouts: HashSet<String>,
    committed: Option<String>,
}

impl Session {
    /// Start a session for a confirmed roster with the default slot cap.
    ///
    /// Generates the sequence, anchors the cursor at [`START_SLOT`]
    /// (index 0 if the cap cut that slot off), and commits the initial
    /// candidate, so the first displayed opponent is the `2.6` slot.
    pub fn start(roster: Roster) -> Self {
        Self::start_with_cap(roster, MAX_SLOTS)
    }

    /// Same as [`Session::start`] with an explicit slot cap.
    pub fn start_with_cap(roster: Roster, max_slots: usize) -> Self {
        let sequence = generate(roster.names(), max_slots);
        let anchor = sequence
            .iter()
            .position(|slot| slot.id == START_SLOT)
            .unwrap_or(0);
        let knockouts = HashSet::new();
        let cand = find_next(anchor, &sequence, &knockouts);
        Self {
            roster,
            sequence,
            cursor: cand.next_index,
            knockouts,
            committed: cand.label,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn sequence(&self) -> &[Slot] {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn knockouts(&self) -> &HashSet<String> {
        &self.knockouts
    }

    pub fn is_knocked_out(&self, name: &str) -> bool {
        self.knockouts.contains(name)
    }

    /// Toggle a roster member in or out of the knockout set.
    ///
    /// Returns `false` without any state change when `name` is not a
    /// roster member. On success the candidate is recomputed from the
    /// current cursor against the updated set and committed in the same
    /// call, so the displayed label always reflects the latest knockout
    /// state.
    pub fn toggle_knockout(&mut self, name: &str) -> bool {
        if !self.roster.contains(name) {
            return false;
        }
        if !self.knockouts.remove(name) {
            self.knockouts.insert(name.to_string());
        }
        self.recompute();
        true
    }

    /// Advance to the next eligible slot, committing label and cursor.
    ///
    /// Returns the committed label, `None` when the sequence is empty.
    pub fn advance(&mut self) -> Option<String> {
        self.recompute();
        self.committed.clone()
    }

    /// Compute the upcoming candidate without committing anything.
    pub fn preview(&self) -> Option<String> {
        find_next(self.cursor, &self.sequence, &self.knockouts).label
    }

    /// The label to display: the last committed one, else the preview,
    /// else `"-"` when there is nothing to show.
    pub fn current_label(&self) -> String {
        self.committed
            .clone()
            .or_else(|| self.preview())
            .unwrap_or_else(|| "-".to_string())
    }

    /// Projection of the first `limit` slots with knockout annotations.
    pub fn display_sequence(&self, limit: usize) -> Vec<DisplaySlot> {
        self.sequence
            .iter()
            .take(limit)
            .map(|slot| DisplaySlot {
                id: slot.id.to_string(),
                kind: slot.kind,
                occupant: slot.occupant.clone(),
                knocked_out: slot
                    .occupant
                    .as_ref()
                    .map_or(false, |name| self.knockouts.contains(name)),
            })
            .collect()
    }

    /// Clear sequence, cursor, knockouts, and the committed label.
    ///
    /// The session keeps its roster only as a record; confirming the
    /// same names again reproduces the identical sequence.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.cursor = 0;
        self.knockouts.clear();
        self.committed = None;
    }

    fn recompute(&mut self) {
        let Candidate { label, next_index } =
            find_next(self.cursor, &self.sequence, &self.knockouts);
        self.cursor = next_index;
        self.committed = label;
    }
}
