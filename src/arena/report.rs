//! Per-round results handed to the host for rendering.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, Side};
use crate::progress::{ProgressStack, StackChange};
use crate::rules::RoundOutcome;

/// Everything a host needs to draw one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number within the match.
    pub round: u64,
    pub choice_a: Choice,
    pub choice_b: Choice,
    pub outcome: RoundOutcome,
    /// Winning seat, `None` on a tie.
    pub winner: Option<Side>,
    pub score_a: u32,
    pub score_b: u32,
    /// Stack after this round's step.
    pub stack: ProgressStack,
    /// What this round's step did to the stack.
    pub change: StackChange,
}

impl RoundReport {
    #[must_use]
    pub fn choice(&self, side: Side) -> Choice {
        match side {
            Side::A => self.choice_a,
            Side::B => self.choice_b,
        }
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::A => self.score_a,
            Side::B => self.score_b,
        }
    }

    /// `score_a - score_b` after this round.
    #[must_use]
    pub fn score_delta(&self) -> i64 {
        i64::from(self.score_a) - i64::from(self.score_b)
    }
}
