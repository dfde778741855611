//! Match state: the two agents, the progress stack, and the round counter.
//!
//! The state machine is `(score_a, score_b, stack)` starting from
//! `(0, 0, [])`. Scores only ever increase; the stack moves one tier per
//! round at most.

use serde::{Deserialize, Serialize};

use crate::core::{Agent, Side, SideMap};
use crate::progress::ProgressStack;

/// Complete state of a running match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Both agents, seat A first.
    pub agents: SideMap<Agent>,

    /// Revealed tiers of the progress visual.
    pub stack: ProgressStack,

    /// Rounds played since the match started or was last reset.
    pub round: u64,
}

impl MatchState {
    /// Fresh state for two named agents.
    #[must_use]
    pub fn new(names: &SideMap<String>) -> Self {
        Self {
            agents: names.map(|name| Agent::new(name.clone())),
            stack: ProgressStack::new(),
            round: 0,
        }
    }

    /// Both scores, seat A first.
    #[must_use]
    pub fn scores(&self) -> SideMap<u32> {
        self.agents.map(Agent::score)
    }

    /// `score_a - score_b`.
    #[must_use]
    pub fn score_delta(&self) -> i64 {
        i64::from(self.agents[Side::A].score()) - i64::from(self.agents[Side::B].score())
    }

    /// Back to `(0, 0, [])`, keeping agent names.
    pub fn reset(&mut self) {
        for (_, agent) in self.agents.iter_mut() {
            agent.reset();
        }
        self.stack.clear();
        self.round = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> SideMap<String> {
        SideMap::new("AI 1".to_string(), "AI 2".to_string())
    }

    #[test]
    fn test_initial_state() {
        let state = MatchState::new(&names());
        assert_eq!(state.scores(), SideMap::new(0, 0));
        assert!(state.stack.is_empty());
        assert_eq!(state.round, 0);
        assert_eq!(state.agents[Side::B].name(), "AI 2");
    }

    #[test]
    fn test_score_delta() {
        let mut state = MatchState::new(&names());
        state.agents[Side::B].record_win();
        state.agents[Side::B].record_win();
        state.agents[Side::A].record_win();

        assert_eq!(state.score_delta(), -1);
    }

    #[test]
    fn test_reset() {
        let mut state = MatchState::new(&names());
        state.agents[Side::A].record_win();
        state.stack.step(1);
        state.round = 7;

        state.reset();

        assert_eq!(state, MatchState::new(&names()));
    }
}
