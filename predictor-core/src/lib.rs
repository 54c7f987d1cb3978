//! Rotation engine for a 7-player elimination-style match predictor.
//!
//! Given a confirmed roster, the engine generates a deterministic round
//! sequence following fixed repeating patterns and answers "who does
//! the player face next?", skipping opponents marked as knocked out.
//!
//! The crate is split along the two core operations plus the state that
//! ties them together:
//!
//! - [`roster`]: roster confirmation (trim, drop empties, require 7).
//! - [`sequence`]: deterministic round-sequence generation.
//! - [`rotation`]: pure knockout-aware candidate lookup.
//! - [`session`]: the session object owning sequence, cursor, and
//!   knockout set, meant to be driven by a presentation layer.
//!
//! All operations are synchronous, bounded by the sequence length, and
//! free of hidden state; none of them panic on any input.

pub mod roster;
pub mod rotation;
pub mod sequence;
pub mod session;

pub use roster::{Roster, RosterError, MIN_PLAYERS};
pub use rotation::{find_next, Candidate, NO_OPPONENT_LABEL};
pub use sequence::{generate, Slot, SlotId, SlotKind};
pub use session::{DisplaySlot, Session, MAX_SLOTS, START_SLOT};

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed() -> Roster {
        Roster::confirm(["A", "B", "C", "D", "E", "F", "G"]).unwrap()
    }

    #[test]
    fn full_flow_confirm_rotate_toggle_advance() {
        let mut session = Session::start(confirmed());
        assert_eq!(session.current_label(), "2.6 — A");

        assert_eq!(session.advance().as_deref(), Some("2.7 — Fatebox"));
        assert_eq!(session.advance().as_deref(), Some("3.1 — B"));

        // cursor sits on 3.2 (C); knocking C out commits the 3.3 creep
        assert!(session.toggle_knockout("C"));
        assert_eq!(session.current_label(), "3.3 — Creep (Monster)");
        assert_eq!(session.advance().as_deref(), Some("3.4 — D"));
    }

    #[test]
    fn validation_failure_creates_no_state() {
        let result = Roster::confirm(["only", "three", "names"]);
        assert_eq!(result, Err(RosterError::TooFewPlayers { got: 3 }));
    }

    #[test]
    fn sequence_is_capped_at_max_slots() {
        let session = Session::start(confirmed());
        assert_eq!(session.sequence().len(), MAX_SLOTS);
    }

    #[test]
    fn start_slot_constant_is_round_two_position_six() {
        assert_eq!(START_SLOT.to_string(), "2.6");
    }

    #[test]
    fn knocking_out_the_whole_roster_never_exhausts() {
        let mut session = Session::start(confirmed());
        for name in ["A", "B", "C", "D", "E", "F", "G"] {
            assert!(session.toggle_knockout(name));
        }
        // every round still contains a creep and a fatebox, so the
        // exhaustion sentinel never appears
        for _ in 0..50 {
            let label = session.advance().unwrap();
            assert_ne!(label, NO_OPPONENT_LABEL);
            assert!(label.contains("Creep") || label.contains("Fatebox"));
        }
    }
}
