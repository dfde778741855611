//! Match statistics for summaries and draw sanity checks.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, Side, SideMap};

use super::RoundReport;

/// Running tallies over the rounds of a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Total rounds recorded.
    pub rounds: u64,

    /// Rounds that ended in a tie.
    pub ties: u64,

    /// Rounds won, per seat.
    pub wins: SideMap<u64>,

    /// Times each choice was drawn, per seat, indexed by `Choice::rank`.
    pub choice_counts: SideMap<[u64; 3]>,
}

impl MatchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold one round into the tallies.
    pub fn record(&mut self, report: &RoundReport) {
        self.rounds += 1;
        match report.winner {
            Some(side) => self.wins[side] += 1,
            None => self.ties += 1,
        }
        for side in Side::BOTH {
            self.choice_counts[side][report.choice(side).rank() as usize] += 1;
        }
    }

    /// How often `side` drew `choice`, in `[0, 1]`.
    #[must_use]
    pub fn frequency(&self, side: Side, choice: Choice) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.choice_counts[side][choice.rank() as usize] as f64 / self.rounds as f64
        }
    }

    /// Fraction of rounds that tied.
    #[must_use]
    pub fn tie_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.ties as f64 / self.rounds as f64
        }
    }

    /// Fraction of rounds won by `side`.
    #[must_use]
    pub fn win_rate(&self, side: Side) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins[side] as f64 / self.rounds as f64
        }
    }
}
