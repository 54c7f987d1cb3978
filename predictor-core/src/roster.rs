//! Roster confirmation and validation.

use thiserror::Error;

/// Minimum number of usable names required to confirm a roster.
pub const MIN_PLAYERS: usize = 7;

/// Error returned when roster confirmation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Fewer than [`MIN_PLAYERS`] non-empty trimmed names were supplied.
    #[error("at least {MIN_PLAYERS} player names are required, got {got}")]
    TooFewPlayers { got: usize },
}

/// A confirmed, ordered list of participant names.
///
/// Order is significant: it determines the round-robin assignment of
/// players to enemy slots. Names are trimmed and non-empty; duplicates
/// are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Confirm a roster from raw input names.
    ///
    /// Each entry is trimmed and empty entries are dropped. At least
    /// [`MIN_PLAYERS`] entries must survive or confirmation fails with
    /// no roster created.
    pub fn confirm<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filtered: Vec<String> = names
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if filtered.len() < MIN_PLAYERS {
            return Err(RosterError::TooFewPlayers {
                got: filtered.len(),
            });
        }

        Ok(Self { names: filtered })
    }

    /// The confirmed names in roster order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of confirmed players.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is a member of this roster.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Vec<&'static str> {
        vec!["A", "B", "C", "D", "E", "F", "G"]
    }

    #[test]
    fn confirm_accepts_seven_names() {
        let roster = Roster::confirm(seven()).unwrap();
        assert_eq!(roster.len(), 7);
        assert_eq!(roster.names()[0], "A");
        assert_eq!(roster.names()[6], "G");
    }

    #[test]
    fn confirm_trims_whitespace() {
        let roster = Roster::confirm(["  A ", "B", "C", "D", "E", "F", " G  "]).unwrap();
        assert_eq!(roster.names()[0], "A");
        assert_eq!(roster.names()[6], "G");
    }

    #[test]
    fn confirm_drops_empty_entries() {
        let result = Roster::confirm(["A", "", "  ", "B", "C", "D", "E", "F"]);
        assert_eq!(result, Err(RosterError::TooFewPlayers { got: 6 }));
    }

    #[test]
    fn confirm_rejects_short_lists() {
        let result = Roster::confirm(["A", "B", "C"]);
        assert_eq!(result, Err(RosterError::TooFewPlayers { got: 3 }));
    }

    #[test]
    fn confirm_allows_duplicates() {
        let roster = Roster::confirm(["A", "A", "B", "C", "D", "E", "F"]).unwrap();
        assert_eq!(roster.len(), 7);
    }

    #[test]
    fn contains_checks_membership() {
        let roster = Roster::confirm(seven()).unwrap();
        assert!(roster.contains("D"));
        assert!(!roster.contains("Z"));
    }

    #[test]
    fn error_message_reports_count() {
        let err = Roster::confirm(["A"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "at least 7 player names are required, got 1"
        );
    }
}
