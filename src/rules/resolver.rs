//! Round resolution.
//!
//! Two choices are compared with the cyclic dominance relation on
//! `Choice`. `duel` reports the winning seat; `resolve` names the winner.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, Side};

/// Result of a single round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Both agents chose the same symbol.
    Tie,
    /// The named agent won.
    Winner(String),
}

impl RoundOutcome {
    /// Name the winning seat, or `Tie` when there is none.
    #[must_use]
    pub fn from_winner(winner: Option<Side>, name_a: &str, name_b: &str) -> Self {
        match winner {
            None => RoundOutcome::Tie,
            Some(Side::A) => RoundOutcome::Winner(name_a.to_string()),
            Some(Side::B) => RoundOutcome::Winner(name_b.to_string()),
        }
    }

    /// Check if the named agent won.
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        match self {
            RoundOutcome::Winner(winner) => winner == name,
            RoundOutcome::Tie => false,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, RoundOutcome::Tie)
    }

    /// The winner's name, if the round was not a tie.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            RoundOutcome::Winner(winner) => Some(winner),
            RoundOutcome::Tie => None,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Tie => write!(f, "It's a tie!"),
            RoundOutcome::Winner(name) => write!(f, "Winner: {}", name),
        }
    }
}

/// Which seat wins when A plays `a` and B plays `b`, or `None` on a tie.
///
/// ```
/// use rps_arena::core::{Choice, Side};
/// use rps_arena::rules::duel;
///
/// assert_eq!(duel(Choice::Rock, Choice::Scissors), Some(Side::A));
/// assert_eq!(duel(Choice::Rock, Choice::Paper), Some(Side::B));
/// assert_eq!(duel(Choice::Rock, Choice::Rock), None);
/// ```
#[must_use]
pub fn duel(a: Choice, b: Choice) -> Option<Side> {
    if a == b {
        None
    } else if a.beats(b) {
        Some(Side::A)
    } else {
        Some(Side::B)
    }
}

/// Resolve a round between two named agents.
///
/// Pure and total: every one of the nine choice pairs maps to exactly one
/// of tie, A wins, or B wins.
#[must_use]
pub fn resolve(a: Choice, b: Choice, name_a: &str, name_b: &str) -> RoundOutcome {
    RoundOutcome::from_winner(duel(a, b), name_a, name_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_wins() {
        assert_eq!(
            resolve(Choice::Rock, Choice::Scissors, "AI 1", "AI 2"),
            RoundOutcome::Winner("AI 1".to_string())
        );
        assert_eq!(
            resolve(Choice::Paper, Choice::Rock, "AI 1", "AI 2"),
            RoundOutcome::Winner("AI 1".to_string())
        );
        assert_eq!(
            resolve(Choice::Paper, Choice::Scissors, "AI 1", "AI 2"),
            RoundOutcome::Winner("AI 2".to_string())
        );
    }

    #[test]
    fn test_ties() {
        for choice in Choice::ALL {
            assert_eq!(resolve(choice, choice, "x", "y"), RoundOutcome::Tie);
            assert_eq!(duel(choice, choice), None);
        }
    }

    #[test]
    fn test_outcome_helpers() {
        let win = RoundOutcome::Winner("AI 2".to_string());
        assert!(win.is_winner("AI 2"));
        assert!(!win.is_winner("AI 1"));
        assert!(!win.is_tie());
        assert_eq!(win.winner(), Some("AI 2"));

        let tie = RoundOutcome::Tie;
        assert!(tie.is_tie());
        assert!(!tie.is_winner("AI 1"));
        assert_eq!(tie.winner(), None);
    }

    #[test]
    fn test_from_winner_matches_resolve() {
        assert_eq!(RoundOutcome::from_winner(None, "x", "y"), RoundOutcome::Tie);
        assert_eq!(
            RoundOutcome::from_winner(Some(Side::B), "x", "y"),
            RoundOutcome::Winner("y".to_string())
        );
        for a in Choice::ALL {
            for b in Choice::ALL {
                assert_eq!(
                    RoundOutcome::from_winner(duel(a, b), "AI 1", "AI 2"),
                    resolve(a, b, "AI 1", "AI 2")
                );
            }
        }
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(RoundOutcome::Tie.to_string(), "It's a tie!");
        assert_eq!(
            RoundOutcome::Winner("AI 1".to_string()).to_string(),
            "Winner: AI 1"
        );
    }
}
